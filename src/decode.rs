use alloc::vec::Vec;

use crate::bmp::{
    self, FileHeader, InfoHeader, PaletteEntry, RowOrder, ScanlineGeometry, ScanlineStore,
};
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::summary::Summary;
use crate::surface::Surface;

/// A fully decoded BMP: both headers, the color table when the bit depth
/// has one, and every stored scanline in file order.
///
/// Immutable once built. Dropping it releases the palette and scanline
/// buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    file_header: FileHeader,
    info_header: InfoHeader,
    palette: Option<Vec<PaletteEntry>>,
    scanlines: ScanlineStore,
    layout: PixelLayout,
}

impl Bitmap {
    pub(crate) fn new(
        file_header: FileHeader,
        info_header: InfoHeader,
        palette: Option<Vec<PaletteEntry>>,
        scanlines: ScanlineStore,
        layout: PixelLayout,
    ) -> Self {
        Self {
            file_header,
            info_header,
            palette,
            scanlines,
            layout,
        }
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info_header
    }

    /// The color table, present exactly for 1, 4 and 8-bit images.
    pub fn palette(&self) -> Option<&[PaletteEntry]> {
        self.palette.as_deref()
    }

    /// Stored scanlines in file order (bottom-up unless the height is negative).
    pub fn scanlines(&self) -> &ScanlineStore {
        &self.scanlines
    }

    pub fn geometry(&self) -> ScanlineGeometry {
        self.scanlines.geometry()
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn width(&self) -> u32 {
        self.info_header.width.unsigned_abs()
    }

    /// Row count, regardless of storage order.
    pub fn height(&self) -> u32 {
        self.info_header.abs_height()
    }

    pub fn row_order(&self) -> RowOrder {
        self.info_header.row_order()
    }

    pub fn summary(&self) -> Summary<'_> {
        Summary::new(&self.file_header, &self.info_header)
    }

    /// Top-down surface whose pitch equals the scanline stride.
    pub fn compose(&self) -> Result<Surface, BmpError> {
        self.compose_with_pitch(self.geometry().stride)
    }

    /// Top-down surface with a caller-chosen row pitch (at least the stride).
    pub fn compose_with_pitch(&self, pitch: usize) -> Result<Surface, BmpError> {
        let needed = bmp::surface_len(pitch, self.height() as usize)?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(needed)
            .map_err(|_| BmpError::OutOfMemory { bytes: needed })?;
        pixels.resize(needed, 0);
        self.compose_into(&mut pixels, pitch)?;

        let geometry = self.geometry();
        Ok(Surface::new(
            pixels,
            self.width(),
            self.height(),
            pitch,
            geometry.stride,
            geometry.raw_row_size,
            self.layout,
        ))
    }

    /// Write the top-down image into a caller-owned buffer of at least
    /// `height * pitch` bytes, such as a locked streaming texture.
    pub fn compose_into(&self, dst: &mut [u8], pitch: usize) -> Result<(), BmpError> {
        bmp::compose_into(
            &self.scanlines,
            self.row_order(),
            self.height() as usize,
            dst,
            pitch,
        )
    }
}

/// Builder for a decode with optional limits and strictness.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    strict: bool,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            strict: false,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Reject files whose planes or file size fields are wrong instead of
    /// only logging them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn decode(self) -> Result<Bitmap, BmpError> {
        bmp::decode(self.data, self.limits, self.strict)
    }
}

/// Decode an in-memory BMP with default settings.
pub fn decode_bmp(data: &[u8]) -> Result<Bitmap, BmpError> {
    DecodeRequest::new(data).decode()
}

/// Parse the file and info headers without reading the palette or pixels.
pub fn read_headers(data: &[u8]) -> Result<bmp::BmpHeaders, BmpError> {
    bmp::probe(data)
}

/// Read everything from `reader` and decode it.
#[cfg(feature = "std")]
pub fn decode_reader<R: std::io::Read>(mut reader: R) -> Result<Bitmap, BmpError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(BmpError::Io)?;
    decode_bmp(&data)
}

/// Open, read and decode the file at `path`. The file is closed before
/// this returns, on success and on failure.
#[cfg(feature = "std")]
pub fn decode_file<P: AsRef<std::path::Path>>(path: P) -> Result<Bitmap, BmpError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| BmpError::FileNotFound {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("decoding {}", path.display());
    decode_reader(file)
}
