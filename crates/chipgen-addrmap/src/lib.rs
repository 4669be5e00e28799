//! Chip address-space layout: non-overlapping named regions, derived decode
//! metrics, and free-window allocation.
//!
//! Hardware-generation tooling lays out peripherals and register blocks long
//! before any RTL exists. This crate provides the container that layout step
//! works against:
//!
//! - [`AddrMap`]: ordered set of address regions, sorted ascending by base
//!   address, with optional overlap rejection and an optional fixed capacity
//! - [`Region`]: the capability a region entity must expose (base/size plus
//!   derived end/next addresses and an interval overlap test)
//! - [`DecodeSlice`]: the bit range a bus address decoder must examine
//! - free-space search ([`AddrMap::find_free_base`]) under size, alignment
//!   and start constraints
//!
//! Metrics ([`AddrMap::size`], [`AddrMap::addr_width`],
//! [`AddrMap::decode_slice`]) are recomputed from the current contents on
//! every call; nothing is cached.
//!
//! The map is a single-owner, build-time structure: it is not internally
//! synchronized, and concurrent mutation requires external locking.

#![forbid(unsafe_code)]

mod error;
mod map;
mod num;
mod overview;
mod region;

pub use error::{AddrMapError, Result};
pub use map::{AddrMap, DecodeSlice};
pub use num::{align_up, lowest_set_bit, unsigned_width};
pub use region::{NamedRegion, Region};


#[cfg(all(test, not(target_arch = "wasm32")))]
mod proptests;
