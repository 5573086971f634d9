//! Bounds-checked little-endian reader over an in-memory BMP.
//!
//! Every read either yields the requested bytes in full or returns `None`
//! without advancing; callers turn `None` into the truncation error for
//! the section they are reading.

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Move to an absolute offset. Offsets past the end are rejected.
    pub(crate) fn set_position(&mut self, pos: usize) -> Option<()> {
        if pos > self.data.len() {
            return None;
        }
        self.pos = pos;
        Some(())
    }

    pub(crate) fn read_slice(&mut self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        let bytes = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(bytes)
    }

    pub(crate) fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_slice(N)?);
        Some(buf)
    }

    pub(crate) fn u16_le(&mut self) -> Option<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub(crate) fn u32_le(&mut self) -> Option<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub(crate) fn i32_le(&mut self) -> Option<i32> {
        self.read_array().map(i32::from_le_bytes)
    }
}
