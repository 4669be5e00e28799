//! Address arithmetic helpers shared by the map and its callers.

/// Round `value` up to the next multiple of `align`.
///
/// `align` does not have to be a power of two. Panics if `align == 0`.
pub fn align_up(value: u64, align: u64) -> u64 {
    assert!(align >= 1, "alignment must be at least 1");
    value.div_ceil(align) * align
}

/// Minimal number of bits needed to represent `value` as an unsigned
/// integer. Never 0: a zero value still occupies one bit.
pub fn unsigned_width(value: u64) -> u32 {
    (u64::BITS - value.leading_zeros()).max(1)
}

/// Bit position of the lowest set bit. Panics if `value == 0`.
pub fn lowest_set_bit(value: u64) -> u32 {
    assert!(value != 0, "value has no set bit");
    value.trailing_zeros()
}
