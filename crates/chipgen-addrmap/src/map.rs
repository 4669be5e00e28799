use crate::error::{AddrMapError, Result};
use crate::num::{align_up, lowest_set_bit, unsigned_width};
use crate::region::Region;

/// Inclusive bit range `[left, right]` a bus address decoder must examine to
/// distinguish the regions of a map. `left == right` is a valid one-bit
/// slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSlice {
    pub left: u32,
    pub right: u32,
}

/// Ordered collection of address regions.
///
/// Invariants (hold after every successful mutation):
/// - Regions are stored in non-decreasing base-address order.
/// - With `unique`, no two regions' closed address intervals intersect.
/// - With a fixed size, every region's end address stays below it.
///
/// A failed [`AddrMap::add`] never mutates the map; validation runs before
/// insertion. Metrics are derived from the current contents on demand.
///
/// The map owns region membership only: callers may keep their own handles
/// to region data. Not internally synchronized; single-owner use is the
/// intended contract.
#[derive(Debug, Clone)]
pub struct AddrMap<R> {
    regions: Vec<R>,
    unique: bool,
    fixed_size: Option<u64>,
}

impl<R: Region> AddrMap<R> {
    /// Empty map: overlapping regions allowed, no capacity bound.
    pub fn new() -> Self {
        Self::with_config(false, None)
    }

    /// Empty map with overlap enforcement and/or a fixed capacity in bytes.
    pub fn with_config(unique: bool, fixed_size: Option<u64>) -> Self {
        Self {
            regions: Vec::new(),
            unique,
            fixed_size,
        }
    }

    /// Build a map by adding `regions` one at a time, in input order, with
    /// the same validation as [`AddrMap::add`]. The first failure
    /// propagates and discards the partially built map.
    pub fn from_regions(
        regions: impl IntoIterator<Item = R>,
        unique: bool,
        fixed_size: Option<u64>,
    ) -> Result<Self> {
        let mut map = Self::with_config(unique, fixed_size);
        for region in regions {
            map.add(region)?;
        }
        Ok(map)
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn fixed_size(&self) -> Option<u64> {
        self.fixed_size
    }

    /// Insert a region, keeping the sequence sorted by base address.
    ///
    /// Fails with [`AddrMapError::SizeExceeded`] if the region's end address
    /// reaches or exceeds the fixed capacity, or with
    /// [`AddrMapError::Overlap`] if uniqueness is enforced and the region
    /// intersects a neighbor at its insertion point. On failure the map is
    /// unchanged.
    ///
    /// Panics if `region.size() == 0`.
    pub fn add(&mut self, region: R) -> Result<()> {
        assert!(region.size() >= 1, "region size must be at least 1 byte");

        self.check_size(&region)?;

        let pos = self.find_pos(&region);

        if self.unique {
            self.check_overlapping(pos, &region)?;
        }

        self.regions.insert(pos, region);
        Ok(())
    }

    /// Regions in ascending base-address order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.regions.iter()
    }

    /// Backing slice, ascending by base address.
    pub fn regions(&self) -> &[R] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Size in bytes: the fixed capacity if one is set, otherwise one past
    /// the highest occupied address. `None` for an unbounded empty map.
    pub fn size(&self) -> Option<u64> {
        match self.fixed_size {
            Some(size) => Some(size),
            None => self.last_addr().map(|last| last + 1),
        }
    }

    /// Minimal number of address bits covering the map.
    pub fn addr_width(&self) -> Option<u32> {
        self.size().map(|size| unsigned_width(size.saturating_sub(1)))
    }

    /// Base address of the first region.
    pub fn first_addr(&self) -> Option<u64> {
        self.regions.first().map(Region::base_addr)
    }

    /// End address of the last region.
    pub fn last_addr(&self) -> Option<u64> {
        self.regions.last().map(Region::end_addr)
    }

    /// Address bit range a decoder must inspect to tell the contained
    /// regions apart. `None` if the map is empty (or has no size).
    pub fn decode_slice(&self) -> Option<DecodeSlice> {
        if self.regions.is_empty() {
            return None;
        }
        let addr_width = self.addr_width()?;
        let size = self.size()?;

        let min_size = self.regions.iter().map(Region::size).min()?;

        // Reserve at least one decoding bit unless a single region spans the
        // whole space.
        let left = if min_size == size {
            addr_width
        } else {
            addr_width - 1
        };

        let right = lowest_set_bit(min_size).min(left);
        Some(DecodeSlice { left, right })
    }

    /// Lowest free aligned base address for a window of `size` bytes.
    ///
    /// `align` defaults to `size`; `start` defaults to one past the last
    /// occupied address (0 for an empty map). Fails with
    /// [`AddrMapError::OutOfRange`] when the window would reach or exceed
    /// the fixed capacity.
    ///
    /// Panics if `size == 0` or `align == Some(0)`.
    pub fn find_free_base(
        &self,
        size: u64,
        align: Option<u64>,
        start: Option<u64>,
    ) -> Result<u64> {
        assert!(size >= 1, "window size must be at least 1 byte");
        let align = align.unwrap_or(size);
        assert!(align >= 1, "alignment must be at least 1");
        let start = start.unwrap_or_else(|| self.last_addr().map_or(0, |last| last + 1));

        let base = self.find_space(size, align, start);

        let end = base + size;
        if let Some(fixed_size) = self.fixed_size {
            if end >= fixed_size {
                return Err(AddrMapError::OutOfRange { end, fixed_size });
            }
        }

        Ok(base)
    }

    /// Single pass over the sorted sequence; `addr` is the lowest aligned
    /// address known to be free so far and never moves backwards.
    fn find_space(&self, size: u64, align: u64, start: u64) -> u64 {
        let mut addr = align_up(start, align);
        for region in &self.regions {
            if region.end_addr() < addr {
                // Entirely before the window; the max keeps an earlier,
                // higher aligned boundary from being undercut.
                addr = align_up(region.next_addr(), align).max(addr);
                continue;
            }
            if region.base_addr() >= addr + size {
                // Gap before this region fits the window.
                break;
            }
            addr = align_up(region.next_addr(), align);
        }
        addr
    }

    fn check_size(&self, region: &R) -> Result<()> {
        if let Some(fixed_size) = self.fixed_size {
            let end = region.end_addr();
            if end >= fixed_size {
                return Err(AddrMapError::SizeExceeded { end, fixed_size });
            }
        }
        Ok(())
    }

    /// First index whose region has a base address above the new one; equal
    /// bases insert after existing entries.
    fn find_pos(&self, region: &R) -> usize {
        let base_addr = region.base_addr();
        self.regions
            .iter()
            .position(|item| item.base_addr() > base_addr)
            .unwrap_or(self.regions.len())
    }

    /// Only the neighbors at the insertion point can introduce a new
    /// overlap in an already-valid sequence.
    fn check_overlapping(&self, pos: usize, region: &R) -> Result<()> {
        let lower = pos.checked_sub(1).and_then(|i| self.regions.get(i));
        let upper = self.regions.get(pos);
        for other in [lower, upper].into_iter().flatten() {
            if region.overlaps(other) {
                return Err(AddrMapError::Overlap {
                    base: region.base_addr(),
                    end: region.end_addr(),
                    other_base: other.base_addr(),
                    other_end: other.end_addr(),
                });
            }
        }
        Ok(())
    }
}

impl<R: Region> Default for AddrMap<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: Region> IntoIterator for &'a AddrMap<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
