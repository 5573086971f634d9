use crate::bmp::InfoHeader;
use crate::error::BmpError;

/// Resource limits for a decode.
///
/// All fields default to `None` (no limit). Limits are checked once the
/// headers are parsed, before the palette or any scanline is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the palette and scanline buffers combined.
    pub max_memory_bytes: Option<u64>,
}

fn ensure_within(what: &str, value: u64, limit: Option<u64>) -> Result<(), BmpError> {
    match limit {
        Some(max) if value > max => Err(BmpError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check the header dimensions and the bytes the decode will allocate.
    pub(crate) fn check(&self, info: &InfoHeader, buffer_bytes: usize) -> Result<(), BmpError> {
        let width = u64::from(info.width.unsigned_abs());
        let height = u64::from(info.abs_height());
        ensure_within("width", width, self.max_width)?;
        ensure_within("height", height, self.max_height)?;
        ensure_within("pixel count", width * height, self.max_pixels)?;
        ensure_within("allocation", buffer_bytes as u64, self.max_memory_bytes)
    }
}
