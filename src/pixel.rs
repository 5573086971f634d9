/// Pixel memory layout of a composed [`Surface`](crate::Surface).
///
/// The composer never converts pixels, so the layout is simply what the
/// file's bit depth stores.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// 1-bit palette indices, 8 pixels per byte, most significant bit first.
    Indexed1,
    /// 4-bit palette indices, 2 pixels per byte, high nibble first.
    Indexed4,
    /// 8-bit palette indices.
    Indexed8,
    /// 3 channels, 8-bit BGR.
    Bgr8,
    /// 4 channels, 8-bit BGRX (4th byte is unused for uncompressed files).
    Bgrx8,
}

impl PixelLayout {
    /// Layout stored by a file of the given bit depth, if supported.
    pub fn from_bit_depth(bit_depth: u16) -> Option<Self> {
        match bit_depth {
            1 => Some(Self::Indexed1),
            4 => Some(Self::Indexed4),
            8 => Some(Self::Indexed8),
            24 => Some(Self::Bgr8),
            32 => Some(Self::Bgrx8),
            _ => None,
        }
    }

    pub fn bits_per_pixel(&self) -> u16 {
        match self {
            Self::Indexed1 => 1,
            Self::Indexed4 => 4,
            Self::Indexed8 => 8,
            Self::Bgr8 => 24,
            Self::Bgrx8 => 32,
        }
    }

    /// Whether pixels are palette indices rather than colors.
    pub fn is_indexed(&self) -> bool {
        matches!(self, Self::Indexed1 | Self::Indexed4 | Self::Indexed8)
    }

    /// Whole bytes per pixel, `None` for sub-byte indexed layouts.
    pub fn bytes_per_pixel(&self) -> Option<usize> {
        match self {
            Self::Indexed1 | Self::Indexed4 => None,
            Self::Indexed8 => Some(1),
            Self::Bgr8 => Some(3),
            Self::Bgrx8 => Some(4),
        }
    }
}
