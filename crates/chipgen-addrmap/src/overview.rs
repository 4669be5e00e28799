//! Plain-text overview tables for address maps.

use std::fmt::Display;

use crate::map::AddrMap;
use crate::region::Region;

impl<R: Region + Display> AddrMap<R> {
    /// Render a human-readable overview: total size plus one row per region
    /// in ascending base-address order.
    ///
    /// ```
    /// use chipgen_addrmap::{AddrMap, NamedRegion};
    ///
    /// let mut map = AddrMap::new();
    /// map.add(NamedRegion::new("uart", 0x0, 0x100)).unwrap();
    /// map.add(NamedRegion::new("spi", 0x100, 0x40)).unwrap();
    /// println!("{}", map.overview());
    /// ```
    pub fn overview(&self) -> String {
        let size = match self.size() {
            Some(size) => format!("Size: {size}"),
            None => "Size: -".to_string(),
        };

        let mut rows = vec![
            ["Region", "Base", "Size", "End"].map(String::from).to_vec(),
            ["------", "----", "----", "---"].map(String::from).to_vec(),
        ];
        for region in self {
            rows.push(vec![
                region.to_string(),
                format!("{:#x}", region.base_addr()),
                region.size().to_string(),
                format!("{:#x}", region.end_addr()),
            ]);
        }

        format!("{size}\n\n{}", align_table(&rows))
    }
}

/// Pad every column to its widest cell, `| a | b |` style.
fn align_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (cell, width) in row.iter().zip(widths.iter_mut()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for row in rows {
        out.push('|');
        for (cell, width) in row.iter().zip(widths.iter()) {
            out.push(' ');
            out.push_str(cell);
            out.extend(std::iter::repeat(' ').take(width - cell.len() + 1));
            out.push('|');
        }
        out.push('\n');
    }
    out
}
