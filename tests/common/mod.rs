//! In-memory BMP construction for tests.

#![allow(dead_code)]

/// Byte written into every padding slot, so tests can tell padding apart
/// from pixel data.
pub const PAD: u8 = 0xEE;

#[derive(Clone, Debug)]
pub struct BmpBuilder {
    pub width: i32,
    pub height: i32,
    pub bit_depth: u16,
    pub planes: u16,
    pub compression: u32,
    pub info_size: u32,
    pub colors_used: u32,
    pub palette: Vec<[u8; 4]>,
    /// Extra bytes between the palette and the pixel data.
    pub gap: usize,
    /// Unpadded rows in file order.
    pub rows: Vec<Vec<u8>>,
}

impl BmpBuilder {
    pub fn new(width: i32, height: i32, bit_depth: u16) -> Self {
        Self {
            width,
            height,
            bit_depth,
            planes: 1,
            compression: 0,
            info_size: 40,
            colors_used: 0,
            palette: Vec::new(),
            gap: 0,
            rows: Vec::new(),
        }
    }

    pub fn raw_row_size(&self) -> usize {
        (self.width.max(0) as usize * self.bit_depth as usize).div_ceil(8)
    }

    pub fn stride(&self) -> usize {
        (self.raw_row_size() + 3) & !3
    }

    /// Fill every row with a distinct byte pattern: row `r`, byte `i` is
    /// `r * 16 + i`.
    pub fn with_pattern_rows(mut self) -> Self {
        let raw = self.raw_row_size();
        self.rows = (0..self.height.unsigned_abs() as usize)
            .map(|r| (0..raw).map(|i| (r * 16 + i) as u8).collect())
            .collect();
        self
    }

    pub fn with_palette(mut self, entries: usize) -> Self {
        self.palette = (0..entries)
            .map(|i| [i as u8, (i * 2) as u8, (i * 3) as u8, 0])
            .collect();
        self
    }

    pub fn data_offset(&self) -> usize {
        14 + 40 + self.palette.len() * 4 + self.gap
    }

    pub fn build(&self) -> Vec<u8> {
        let stride = self.stride();
        let file_size = self.data_offset() + stride * self.rows.len();

        let mut data = Vec::with_capacity(file_size);
        data.extend_from_slice(b"BM");
        data.extend_from_slice(&(file_size as u32).to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&(self.data_offset() as u32).to_le_bytes());

        data.extend_from_slice(&self.info_size.to_le_bytes());
        data.extend_from_slice(&self.width.to_le_bytes());
        data.extend_from_slice(&self.height.to_le_bytes());
        data.extend_from_slice(&self.planes.to_le_bytes());
        data.extend_from_slice(&self.bit_depth.to_le_bytes());
        data.extend_from_slice(&self.compression.to_le_bytes());
        data.extend_from_slice(&((stride * self.rows.len()) as u32).to_le_bytes());
        data.extend_from_slice(&2835i32.to_le_bytes());
        data.extend_from_slice(&2835i32.to_le_bytes());
        data.extend_from_slice(&self.colors_used.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());

        for entry in &self.palette {
            data.extend_from_slice(entry);
        }
        data.resize(data.len() + self.gap, 0);

        for row in &self.rows {
            data.extend_from_slice(row);
            data.resize(data.len() + stride - row.len(), PAD);
        }
        data
    }
}
