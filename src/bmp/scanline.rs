//! Stored scanlines, kept in file order.

use alloc::vec::Vec;
use log::trace;

use super::cursor::Cursor;
use super::geometry::ScanlineGeometry;
use crate::error::BmpError;

/// One stored row: `raw_row_size` pixel bytes followed by alignment padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scanline<'a> {
    bytes: &'a [u8],
    raw_row_size: usize,
}

impl<'a> Scanline<'a> {
    /// The full stored row, padding included (`stride` bytes).
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Pixel bytes only.
    pub fn pixels(&self) -> &'a [u8] {
        &self.bytes[..self.raw_row_size]
    }

    /// Alignment filler. Its content is unspecified.
    pub fn padding(&self) -> &'a [u8] {
        &self.bytes[self.raw_row_size..]
    }
}

/// All scanlines of an image in on-disk order, in one contiguous buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanlineStore {
    data: Vec<u8>,
    rows: usize,
    geometry: ScanlineGeometry,
}

impl ScanlineStore {
    /// Number of stored scanlines.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn geometry(&self) -> ScanlineGeometry {
        self.geometry
    }

    /// Scanline `index` in file order.
    pub fn row(&self, index: usize) -> Option<Scanline<'_>> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.geometry.stride;
        let bytes = self.data.get(start..start + self.geometry.stride)?;
        Some(Scanline {
            bytes,
            raw_row_size: self.geometry.raw_row_size,
        })
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Scanline<'_>> + '_ {
        let raw_row_size = self.geometry.raw_row_size;
        self.data
            .chunks_exact(self.geometry.stride)
            .take(self.rows)
            .map(move |bytes| Scanline {
                bytes,
                raw_row_size,
            })
    }

    /// The raw stored rows back to back, `len() * stride` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Seek to the absolute `data_offset` and read `rows` scanlines of
/// `geometry.stride` bytes each.
pub(crate) fn read_scanlines(
    cursor: &mut Cursor<'_>,
    data_offset: u32,
    geometry: ScanlineGeometry,
    rows: usize,
) -> Result<ScanlineStore, BmpError> {
    cursor
        .set_position(data_offset as usize)
        .ok_or(BmpError::TruncatedPixelData { row: 0, rows })?;

    // A file this short cannot hold every row; report the first missing one
    // instead of allocating for data that is not there.
    let available = cursor.remaining();
    let total = match geometry.image_bytes(rows) {
        Some(total) if total <= available => total,
        _ => {
            return Err(BmpError::TruncatedPixelData {
                row: available / geometry.stride,
                rows,
            });
        }
    };

    let mut data = Vec::new();
    data.try_reserve_exact(total)
        .map_err(|_| BmpError::OutOfMemory { bytes: total })?;

    for row in 0..rows {
        let line = cursor
            .read_slice(geometry.stride)
            .ok_or(BmpError::TruncatedPixelData { row, rows })?;
        data.extend_from_slice(line);
    }
    trace!(
        "read {rows} scanlines of {} bytes from offset {data_offset}",
        geometry.stride
    );

    Ok(ScanlineStore {
        data,
        rows,
        geometry,
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn geometry() -> ScanlineGeometry {
        ScanlineGeometry::new(2, 24).unwrap()
    }

    #[test]
    fn reads_rows_from_absolute_offset() {
        let mut data = vec![0xAAu8; 5];
        data.extend(0u8..16);
        let mut cursor = Cursor::new(&data);
        let store = read_scanlines(&mut cursor, 5, geometry(), 2).unwrap();
        assert_eq!(store.len(), 2);
        let first = store.row(0).unwrap();
        assert_eq!(first.bytes(), &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(first.pixels(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(first.padding(), &[6, 7]);
        assert_eq!(store.row(1).unwrap().bytes(), &[8, 9, 10, 11, 12, 13, 14, 15]);
        assert!(store.row(2).is_none());
        assert_eq!(store.iter().count(), 2);
    }

    #[test]
    fn short_pixel_data_names_missing_row() {
        let data = [0u8; 12];
        let mut cursor = Cursor::new(&data);
        match read_scanlines(&mut cursor, 0, geometry(), 2) {
            Err(BmpError::TruncatedPixelData { row: 1, rows: 2 }) => {}
            other => panic!("expected TruncatedPixelData, got {other:?}"),
        }
    }

    #[test]
    fn offset_past_end_is_truncation() {
        let data = [0u8; 4];
        let mut cursor = Cursor::new(&data);
        assert!(matches!(
            read_scanlines(&mut cursor, 100, geometry(), 1),
            Err(BmpError::TruncatedPixelData { row: 0, .. })
        ));
    }
}
