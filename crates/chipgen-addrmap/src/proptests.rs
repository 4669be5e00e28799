use crate::{AddrMap, NamedRegion, Region};
use proptest::prelude::*;

const MAX_BASE: u64 = 0x400;
const MAX_REGION_SIZE: u64 = 0x40;
const MAX_REGIONS: usize = 24;

fn region_strategy() -> impl Strategy<Value = NamedRegion> {
    (0..MAX_BASE, 1..=MAX_REGION_SIZE)
        .prop_map(|(base, size)| NamedRegion::new(format!("r{base:x}"), base, size))
}

fn regions_strategy() -> impl Strategy<Value = Vec<NamedRegion>> {
    prop::collection::vec(region_strategy(), 0..MAX_REGIONS)
}

fn align_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        Just(1u64),
        Just(2u64),
        Just(4u64),
        Just(8u64),
        Just(16u64),
        // Non power-of-two alignments are allowed too.
        Just(3u64),
        Just(12u64),
    ]
}

/// Feed every region through `add`, keeping the map valid by dropping
/// rejected ones.
fn build_map(
    regions: Vec<NamedRegion>,
    unique: bool,
    fixed_size: Option<u64>,
) -> AddrMap<NamedRegion> {
    let mut map = AddrMap::with_config(unique, fixed_size);
    for region in regions {
        let _ = map.add(region);
    }
    map
}

fn is_sorted(map: &AddrMap<NamedRegion>) -> bool {
    map.regions()
        .windows(2)
        .all(|pair| pair[0].base_addr() <= pair[1].base_addr())
}

fn window_is_free(map: &AddrMap<NamedRegion>, base: u64, size: u64) -> bool {
    // Half-open window [base, base + size) against closed region intervals.
    map.iter()
        .all(|region| region.end_addr() < base || region.base_addr() >= base + size)
}

proptest! {
    #[test]
    fn adds_keep_base_addresses_sorted(regions in regions_strategy(), unique: bool) {
        let map = build_map(regions, unique, None);
        prop_assert!(is_sorted(&map));
    }

    #[test]
    fn unique_maps_never_hold_intersecting_regions(regions in regions_strategy()) {
        let map = build_map(regions, true, None);
        let items = map.regions();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                prop_assert!(!a.overlaps(b), "{a:?} intersects {b:?}");
            }
        }
    }

    #[test]
    fn failing_add_leaves_map_unchanged(
        regions in regions_strategy(),
        extra in region_strategy(),
        unique: bool,
        fixed_size in prop::option::of(1..MAX_BASE),
    ) {
        let mut map = build_map(regions, unique, fixed_size);
        let before = map.regions().to_vec();
        if map.add(extra).is_err() {
            prop_assert_eq!(map.regions(), before.as_slice());
        }
    }

    #[test]
    fn fixed_size_maps_never_reach_their_bound(
        regions in regions_strategy(),
        fixed_size in 1..MAX_BASE,
    ) {
        let map = build_map(regions, false, Some(fixed_size));
        for region in &map {
            prop_assert!(region.end_addr() < fixed_size);
        }
    }

    #[test]
    fn found_window_is_aligned_free_and_minimal(
        regions in regions_strategy(),
        size in 1..=MAX_REGION_SIZE,
        align in align_strategy(),
        start in prop::option::of(0..MAX_BASE),
    ) {
        let map = build_map(regions, false, None);
        let base = map
            .find_free_base(size, Some(align), start)
            .expect("unbounded search cannot fail");

        let effective_start = start
            .unwrap_or_else(|| map.last_addr().map_or(0, |last| last + 1));

        prop_assert_eq!(base % align, 0);
        prop_assert!(base >= effective_start.div_ceil(align) * align);
        prop_assert!(window_is_free(&map, base, size));

        // No smaller aligned candidate at or after the start is free.
        let mut candidate = effective_start.div_ceil(align) * align;
        while candidate < base {
            prop_assert!(
                !window_is_free(&map, candidate, size),
                "smaller free window at {candidate:#x} (result {base:#x})"
            );
            candidate += align;
        }
    }

    #[test]
    fn bounded_search_respects_capacity(
        regions in regions_strategy(),
        size in 1..=MAX_REGION_SIZE,
        fixed_size in 1..MAX_BASE * 2,
    ) {
        let map = build_map(regions, false, Some(fixed_size));
        match map.find_free_base(size, None, None) {
            Ok(base) => {
                prop_assert!(base + size < fixed_size);
                prop_assert!(window_is_free(&map, base, size));
            }
            Err(err) => prop_assert!(
                matches!(err, crate::AddrMapError::OutOfRange { .. }),
                "expected OutOfRange, got {err:?}"
            ),
        }
    }
}
