use std::fmt;

/// Capability an address region must expose to live in an [`AddrMap`].
///
/// A region is a `[base_addr, end_addr]` closed byte interval. Implementors
/// only provide [`Region::base_addr`] and [`Region::size`]; the derived
/// addresses and the overlap test come for free.
///
/// Contract: `size() >= 1`. Zero-size regions are not supported, and
/// `base_addr + size` must not overflow `u64`.
///
/// [`AddrMap`]: crate::AddrMap
pub trait Region {
    /// First address of the region.
    fn base_addr(&self) -> u64;

    /// Region size in bytes.
    fn size(&self) -> u64;

    /// Last address of the region (inclusive).
    fn end_addr(&self) -> u64 {
        self.base_addr() + self.size() - 1
    }

    /// First address past the region.
    fn next_addr(&self) -> u64 {
        self.end_addr() + 1
    }

    /// Whether the closed intervals of `self` and `other` intersect.
    fn overlaps<O: Region + ?Sized>(&self, other: &O) -> bool {
        self.base_addr() <= other.end_addr() && other.base_addr() <= self.end_addr()
    }
}

/// Minimal named region: enough for layout work, tests and overview tables.
///
/// Real peripheral entities (access rights, register fields, volatility)
/// live in the caller's domain and implement [`Region`] themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRegion {
    name: String,
    base_addr: u64,
    size: u64,
}

impl NamedRegion {
    /// Panics if `size == 0`.
    pub fn new(name: impl Into<String>, base_addr: u64, size: u64) -> Self {
        assert!(size >= 1, "region size must be at least 1 byte");
        Self {
            name: name.into(),
            base_addr,
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Region for NamedRegion {
    fn base_addr(&self) -> u64 {
        self.base_addr
    }

    fn size(&self) -> u64 {
        self.size
    }
}

impl fmt::Display for NamedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
