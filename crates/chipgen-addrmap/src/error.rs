use thiserror::Error;

pub type Result<T> = std::result::Result<T, AddrMapError>;

/// Error type for address-map mutations and free-space queries.
///
/// Every failing operation leaves the map exactly as it was: validation
/// always runs before mutation, so no variant implies partial state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddrMapError {
    /// A new region's closed address interval intersects an existing one
    /// (only raised when the map enforces uniqueness).
    #[error("region [{base:#x}..={end:#x}] overlaps existing region [{other_base:#x}..={other_end:#x}]")]
    Overlap {
        base: u64,
        end: u64,
        other_base: u64,
        other_end: u64,
    },

    /// A region's end address reaches or exceeds the map's fixed capacity.
    #[error("region end address {end:#x} exceeds maximum size {fixed_size:#x}")]
    SizeExceeded { end: u64, fixed_size: u64 },

    /// No free window satisfying the fixed-size bound exists at or after the
    /// computed candidate address.
    #[error("end address {end:#x} would exceed maximum size {fixed_size:#x}")]
    OutOfRange { end: u64, fixed_size: u64 },
}
