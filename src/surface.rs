use alloc::vec::Vec;

use crate::error::BmpError;
use crate::pixel::PixelLayout;

/// A top-down pixel buffer ready for presentation.
///
/// Row `y` (0 = top) occupies `pixels[y * pitch..(y + 1) * pitch]`. The
/// first `stride` bytes of each row are the stored scanline, alignment
/// padding included; any bytes from `stride` up to `pitch` are zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Destination row length in bytes.
    pub pitch: usize,
    /// Source scanline length in bytes.
    pub stride: usize,
    /// Bytes of actual pixel data at the start of each row.
    pub row_bytes: usize,
    pub layout: PixelLayout,
}

impl Surface {
    pub(crate) fn new(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        pitch: usize,
        stride: usize,
        row_bytes: usize,
        layout: PixelLayout,
    ) -> Self {
        Self {
            pixels,
            width,
            height,
            pitch,
            stride,
            row_bytes,
            layout,
        }
    }

    /// The whole buffer, `height * pitch` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Row `y` counted from the top, `pitch` bytes.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let start = y.checked_mul(self.pitch)?;
        self.pixels.get(start..start.checked_add(self.pitch)?)
    }

    /// Pixel bytes of row `y`, without padding.
    pub fn row_pixels(&self, y: usize) -> Option<&[u8]> {
        self.row(y).map(|r| &r[..self.row_bytes])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.pitch)
    }

    /// Unpadded RGB copy of a 24 or 32-bit surface.
    ///
    /// Returns [`BmpError::UnsupportedBitDepth`] for palette-indexed surfaces.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec_rgb8(&self) -> Result<imgref::ImgVec<rgb::RGB8>, BmpError> {
        let bpp = match self.layout {
            PixelLayout::Bgr8 => 3,
            PixelLayout::Bgrx8 => 4,
            other => return Err(BmpError::UnsupportedBitDepth(other.bits_per_pixel())),
        };
        let width = self.width as usize;
        let mut out = Vec::new();
        out.try_reserve_exact(width * self.height as usize)
            .map_err(|_| BmpError::OutOfMemory {
                bytes: width * self.height as usize * 3,
            })?;
        for row in self.rows() {
            out.extend(
                row.chunks_exact(bpp)
                    .take(width)
                    .map(|px| rgb::RGB8::new(px[2], px[1], px[0])),
            );
        }
        Ok(imgref::ImgVec::new(out, width, self.height as usize))
    }
}

/// The presentation collaborator: anything that can display a finished
/// [`Surface`].
///
/// Implementations decide which [`PixelLayout`]s they accept and report the
/// rest as [`BmpError::UnsupportedBitDepth`]. Failures of the display itself
/// are reported as [`BmpError::Presentation`].
pub trait Presenter {
    fn present(&mut self, surface: &Surface) -> Result<(), BmpError>;
}
