//! Color table for 1, 4 and 8-bit images.

use alloc::vec::Vec;
use log::{trace, warn};

use super::cursor::Cursor;
use crate::error::BmpError;

/// Bytes per color table entry (B, G, R, reserved).
pub const PALETTE_ENTRY_LEN: usize = 4;

/// One color table entry, in on-disk byte order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub reserved: u8,
}

impl PaletteEntry {
    /// `[r, g, b]` triple.
    pub fn rgb(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

#[cfg(feature = "rgb")]
impl From<PaletteEntry> for rgb::RGB8 {
    fn from(e: PaletteEntry) -> Self {
        rgb::RGB8::new(e.red, e.green, e.blue)
    }
}

/// Read `count` entries from the cursor. Index in the returned vector is the
/// palette index referenced by pixel data.
pub(crate) fn read_palette(
    cursor: &mut Cursor<'_>,
    count: u32,
    bit_depth: u16,
) -> Result<Vec<PaletteEntry>, BmpError> {
    let needed = count as usize;
    if count > 1 << bit_depth {
        warn!("BMP declares {count} palette entries for a {bit_depth}-bit image");
    }

    // Reject short tables before allocating for them.
    let bytes = needed
        .checked_mul(PALETTE_ENTRY_LEN)
        .ok_or(BmpError::TruncatedPalette { needed })?;
    if bytes > cursor.remaining() {
        return Err(BmpError::TruncatedPalette { needed });
    }

    let mut palette = Vec::new();
    palette
        .try_reserve_exact(needed)
        .map_err(|_| BmpError::OutOfMemory { bytes })?;

    for _ in 0..needed {
        let [blue, green, red, reserved] = cursor
            .read_array::<PALETTE_ENTRY_LEN>()
            .ok_or(BmpError::TruncatedPalette { needed })?;
        palette.push(PaletteEntry {
            blue,
            green,
            red,
            reserved,
        });
    }
    trace!("read {} palette entries", palette.len());
    Ok(palette)
}
