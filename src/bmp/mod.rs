//! Uncompressed BMP decoder.
//!
//! The pipeline runs strictly in file order: file header, info header,
//! optional color table, then scanlines from the pixel data offset.

mod compose;
mod cursor;
mod geometry;
mod header;
mod palette;
mod scanline;

pub use geometry::ScanlineGeometry;
pub use header::{
    BmpHeaders, COMPRESSION_NONE, FILE_HEADER_LEN, FileHeader, INFO_HEADER_LEN, InfoHeader,
    RowOrder, SIGNATURE,
};
pub use palette::{PALETTE_ENTRY_LEN, PaletteEntry};
pub use scanline::{Scanline, ScanlineStore};

pub(crate) use compose::{compose_into, surface_len};

use log::{debug, warn};

use crate::decode::Bitmap;
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use cursor::Cursor;

/// Parse only the two headers.
pub(crate) fn probe(data: &[u8]) -> Result<BmpHeaders, BmpError> {
    header::read_headers(&mut Cursor::new(data))
}

/// Decode headers, palette and scanlines.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    strict: bool,
) -> Result<Bitmap, BmpError> {
    let mut cursor = Cursor::new(data);
    let BmpHeaders { file, info } = header::read_headers(&mut cursor)?;

    validate_fields(&file, &info, cursor.len(), strict)?;

    let layout = PixelLayout::from_bit_depth(info.bit_depth)
        .ok_or(BmpError::UnsupportedBitDepth(info.bit_depth))?;
    if info.compression != COMPRESSION_NONE {
        return Err(BmpError::UnsupportedCompression(info.compression));
    }

    let invalid = || BmpError::InvalidDimensions {
        width: info.width,
        height: info.height,
    };
    if info.height == 0 {
        return Err(invalid());
    }
    let geometry = ScanlineGeometry::new(info.width, info.bit_depth).map_err(|_| invalid())?;
    let rows = info.abs_height() as usize;
    let image_bytes = geometry.image_bytes(rows).ok_or_else(invalid)?;
    debug!(
        "BMP geometry: raw_row_size={} stride={} padding={} rows={rows} layout={layout:?}",
        geometry.raw_row_size, geometry.stride, geometry.padding
    );

    if let Some(limits) = limits {
        let palette_bytes = (info.palette_len() as usize).saturating_mul(PALETTE_ENTRY_LEN);
        limits.check(&info, image_bytes.saturating_add(palette_bytes))?;
    }

    let palette = if info.has_palette() {
        cursor
            .set_position(FILE_HEADER_LEN + INFO_HEADER_LEN as usize)
            .ok_or(BmpError::TruncatedPalette {
                needed: info.palette_len() as usize,
            })?;
        Some(palette::read_palette(
            &mut cursor,
            info.palette_len(),
            info.bit_depth,
        )?)
    } else {
        None
    };

    let scanlines = scanline::read_scanlines(&mut cursor, file.data_offset, geometry, rows)?;

    Ok(Bitmap::new(file, info, palette, scanlines, layout))
}

/// Fields that do not affect pixel decoding. Strict mode rejects bad values;
/// otherwise they are only logged.
fn validate_fields(
    file: &FileHeader,
    info: &InfoHeader,
    data_len: usize,
    strict: bool,
) -> Result<(), BmpError> {
    if info.planes != 1 {
        let msg = alloc::format!("BMP planes field is {}, expected 1", info.planes);
        if strict {
            return Err(BmpError::InvalidHeader(msg));
        }
        warn!("{msg}");
    }
    if file.file_size != 0 && file.file_size as usize != data_len {
        let msg = alloc::format!(
            "BMP file size field ({}) doesn't match actual size ({data_len})",
            file.file_size
        );
        if strict {
            return Err(BmpError::InvalidHeader(msg));
        }
        warn!("{msg}");
    }
    Ok(())
}
