//! Declarative memory-bus I/O port lists for RAM/ROM macros.
//!
//! An RTL generator wiring a memory macro needs the same handful of ports
//! every time: enable, address, optional write pair, read data, and the
//! optional slice-select and error lines. [`MemIo`] captures the knobs
//! (data width, address width, writability, write slices, error reporting)
//! and [`MemIo::ports`] produces the port declarations in wiring order.
//!
//! This is a pure data holder: no signal semantics, no decoder logic.

#![forbid(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemIoError {
    /// The data width is not an integer multiple of the requested slice
    /// width.
    #[error("cannot split {data_width} bits into slices of {slice_width} bits")]
    UnevenSlices { data_width: u32, slice_width: u32 },
}

/// Port direction relative to the memory: `Fwd` into it, `Bwd` out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Fwd,
    Bwd,
}

/// One port of a memory interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub name: &'static str,
    pub width: u32,
    pub dir: Dir,
    pub title: &'static str,
}

impl Port {
    fn fwd(name: &'static str, width: u32, title: &'static str) -> Self {
        Self {
            name,
            width,
            dir: Dir::Fwd,
            title,
        }
    }

    fn bwd(name: &'static str, width: u32, title: &'static str) -> Self {
        Self {
            name,
            width,
            dir: Dir::Bwd,
            title,
        }
    }
}

/// Memory I/O interface description.
///
/// ```
/// use chipgen_mem::MemIo;
///
/// // A 32-bit ROM with 256 words.
/// let rom = MemIo::new(32, 8, false);
/// let names: Vec<_> = rom.ports().iter().map(|p| p.name).collect();
/// assert_eq!(names, ["ena", "addr", "rdata"]);
///
/// // A byte-writable 32-bit RAM.
/// let ram = MemIo::with_slice_width(32, 8, true, 8, false).unwrap();
/// let names: Vec<_> = ram.ports().iter().map(|p| p.name).collect();
/// assert_eq!(names, ["ena", "addr", "wena", "wdata", "rdata", "sel"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemIo {
    /// Data width in bits.
    pub data_width: u32,
    /// Address width in bits.
    pub addr_width: u32,
    /// Read-only or read/writable memory.
    pub writable: bool,
    /// Word slices for partial writes; widths must sum to `data_width`.
    pub slice_widths: Option<Vec<u32>>,
    /// Report access errors on a dedicated line.
    pub err: bool,
}

impl MemIo {
    /// Plain interface without write slices or error reporting.
    pub fn new(data_width: u32, addr_width: u32, writable: bool) -> Self {
        Self {
            data_width,
            addr_width,
            writable,
            slice_widths: None,
            err: false,
        }
    }

    /// Interface whose data word is split into equal `slice_width`-bit
    /// slices, each with its own select line.
    pub fn with_slice_width(
        data_width: u32,
        addr_width: u32,
        writable: bool,
        slice_width: u32,
        err: bool,
    ) -> Result<Self, MemIoError> {
        if slice_width == 0 || data_width % slice_width != 0 {
            return Err(MemIoError::UnevenSlices {
                data_width,
                slice_width,
            });
        }
        let slices = data_width / slice_width;
        Ok(Self {
            data_width,
            addr_width,
            writable,
            slice_widths: Some(vec![slice_width; slices as usize]),
            err,
        })
    }

    /// Port declarations, in wiring order.
    pub fn ports(&self) -> Vec<Port> {
        let mut ports = vec![
            Port::fwd("ena", 1, "Memory Access Enable"),
            Port::fwd("addr", self.addr_width, "Memory Address"),
        ];
        if self.writable {
            ports.push(Port::fwd("wena", 1, "Memory Write Enable"));
            ports.push(Port::fwd("wdata", self.data_width, "Memory Write Data"));
        }
        ports.push(Port::bwd("rdata", self.data_width, "Memory Read Data"));
        if let Some(slice_widths) = &self.slice_widths {
            ports.push(Port::fwd(
                "sel",
                slice_widths.len() as u32,
                "Slice Selects",
            ));
        }
        if self.err {
            ports.push(Port::bwd("err", 1, "Memory Access Failed"));
        }
        ports
    }
}
