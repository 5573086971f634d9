//! File header and legacy 40-byte info header.
//!
//! Fields are read one at a time at their fixed offsets; the on-disk layout
//! is never reinterpreted as a Rust struct.

use log::debug;

use super::cursor::Cursor;
use crate::error::BmpError;

/// The two signature bytes every BMP starts with.
pub const SIGNATURE: [u8; 2] = *b"BM";
/// Byte length of the file header.
pub const FILE_HEADER_LEN: usize = 14;
/// The only info header size this decoder understands (BITMAPINFOHEADER).
pub const INFO_HEADER_LEN: u32 = 40;
/// Compression code for uncompressed (BI_RGB) pixel data.
pub const COMPRESSION_NONE: u32 = 0;

/// The 14-byte file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Absolute offset of the first scanline.
    pub data_offset: u32,
}

/// Order in which scanlines are stored in the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOrder {
    /// First stored scanline is the bottom of the image (positive height).
    BottomUp,
    /// First stored scanline is the top of the image (negative height).
    TopDown,
}

/// The 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub size: u32,
    pub width: i32,
    /// Negative for top-down files.
    pub height: i32,
    pub planes: u16,
    pub bit_depth: u16,
    pub compression: u32,
    pub image_size: u32,
    pub h_pels_per_meter: i32,
    pub v_pels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    /// Number of stored scanlines.
    pub fn abs_height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    pub fn row_order(&self) -> RowOrder {
        if self.height < 0 {
            RowOrder::TopDown
        } else {
            RowOrder::BottomUp
        }
    }

    /// Whether a color table follows the info header.
    pub fn has_palette(&self) -> bool {
        matches!(self.bit_depth, 1 | 4 | 8)
    }

    /// Entries in the color table: `colors_used`, or `2^bit_depth` when it is zero.
    /// Zero when the depth carries no palette.
    pub fn palette_len(&self) -> u32 {
        if !self.has_palette() {
            0
        } else if self.colors_used != 0 {
            self.colors_used
        } else {
            1 << self.bit_depth
        }
    }
}

pub(crate) fn read_file_header(cursor: &mut Cursor<'_>) -> Result<FileHeader, BmpError> {
    let signature: [u8; 2] = cursor.read_array().ok_or(BmpError::TruncatedHeader)?;
    if signature != SIGNATURE {
        return Err(BmpError::InvalidSignature { found: signature });
    }
    let file_size = cursor.u32_le().ok_or(BmpError::TruncatedHeader)?;
    let reserved1 = cursor.u16_le().ok_or(BmpError::TruncatedHeader)?;
    let reserved2 = cursor.u16_le().ok_or(BmpError::TruncatedHeader)?;
    let data_offset = cursor.u32_le().ok_or(BmpError::TruncatedHeader)?;

    Ok(FileHeader {
        signature,
        file_size,
        reserved1,
        reserved2,
        data_offset,
    })
}

pub(crate) fn read_info_header(cursor: &mut Cursor<'_>) -> Result<InfoHeader, BmpError> {
    let size = cursor.u32_le().ok_or(BmpError::TruncatedHeader)?;
    if size != INFO_HEADER_LEN {
        return Err(BmpError::UnsupportedHeaderSize(size));
    }

    let header = InfoHeader {
        size,
        width: cursor.i32_le().ok_or(BmpError::TruncatedHeader)?,
        height: cursor.i32_le().ok_or(BmpError::TruncatedHeader)?,
        planes: cursor.u16_le().ok_or(BmpError::TruncatedHeader)?,
        bit_depth: cursor.u16_le().ok_or(BmpError::TruncatedHeader)?,
        compression: cursor.u32_le().ok_or(BmpError::TruncatedHeader)?,
        image_size: cursor.u32_le().ok_or(BmpError::TruncatedHeader)?,
        h_pels_per_meter: cursor.i32_le().ok_or(BmpError::TruncatedHeader)?,
        v_pels_per_meter: cursor.i32_le().ok_or(BmpError::TruncatedHeader)?,
        colors_used: cursor.u32_le().ok_or(BmpError::TruncatedHeader)?,
        colors_important: cursor.u32_le().ok_or(BmpError::TruncatedHeader)?,
    };
    debug!(
        "BMP info header: {}x{} depth={} compression={} colors_used={}",
        header.width, header.height, header.bit_depth, header.compression, header.colors_used
    );
    Ok(header)
}

/// Both headers of a BMP, as returned by [`read_headers`](crate::read_headers).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeaders {
    pub file: FileHeader,
    pub info: InfoHeader,
}

impl BmpHeaders {
    pub fn summary(&self) -> crate::Summary<'_> {
        crate::Summary::new(&self.file, &self.info)
    }
}

pub(crate) fn read_headers(cursor: &mut Cursor<'_>) -> Result<BmpHeaders, BmpError> {
    let file = read_file_header(cursor)?;
    let info = read_info_header(cursor)?;
    Ok(BmpHeaders { file, info })
}
