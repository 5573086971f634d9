use crate::error::BmpError;

/// Byte layout of one stored scanline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanlineGeometry {
    /// Bytes holding pixel bits: `ceil(width * bit_depth / 8)`.
    pub raw_row_size: usize,
    /// Stored row length, `raw_row_size` rounded up to a multiple of 4.
    pub stride: usize,
    /// `stride - raw_row_size`, always in `0..=3`.
    pub padding: usize,
}

impl ScanlineGeometry {
    /// Compute the row layout for `width` pixels of `bit_depth` bits.
    ///
    /// Fails with [`BmpError::InvalidDimensions`] when the width is not
    /// positive or the row size does not fit in `usize`.
    pub fn new(width: i32, bit_depth: u16) -> Result<Self, BmpError> {
        let invalid = || BmpError::InvalidDimensions { width, height: 0 };
        let w = usize::try_from(width).map_err(|_| invalid())?;
        if w == 0 {
            return Err(invalid());
        }
        let raw_row_size = w
            .checked_mul(usize::from(bit_depth))
            .and_then(|bits| bits.checked_add(7))
            .map(|bits| bits / 8)
            .ok_or_else(invalid)?;
        let stride = raw_row_size
            .checked_add(3)
            .map(|r| r & !3)
            .ok_or_else(invalid)?;

        Ok(Self {
            raw_row_size,
            stride,
            padding: stride - raw_row_size,
        })
    }

    /// Total bytes for `rows` scanlines.
    pub fn image_bytes(&self, rows: usize) -> Option<usize> {
        self.stride.checked_mul(rows)
    }
}
