use alloc::string::String;

/// Errors from BMP decoding and surface composition.
///
/// Every failure is fatal to the decode that raised it; no partial
/// [`Bitmap`](crate::Bitmap) is ever returned alongside an error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[cfg(feature = "std")]
    #[error("cannot open {path}: {source}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "std")]
    #[error("read failed: {0}")]
    Io(#[source] std::io::Error),

    #[error("missing BM signature (found {found:02x?})")]
    InvalidSignature { found: [u8; 2] },

    #[error("unsupported info header size {0} (only 40 is supported)")]
    UnsupportedHeaderSize(u32),

    #[error("input ends inside the BMP headers")]
    TruncatedHeader,

    #[error("input ends inside the color palette ({needed} entries expected)")]
    TruncatedPalette { needed: usize },

    #[error("input ends inside scanline {row} of {rows}")]
    TruncatedPixelData { row: usize, rows: usize },

    #[error("failed to allocate {bytes} bytes")]
    OutOfMemory { bytes: usize },

    #[error("unsupported bit depth {0}")]
    UnsupportedBitDepth(u16),

    #[error("unsupported compression method {0}")]
    UnsupportedCompression(u32),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("surface incomplete: scanline {row} missing")]
    IncompleteSurface { row: usize },

    #[error("destination pitch {pitch} is smaller than the scanline stride {stride}")]
    PitchTooSmall { pitch: usize, stride: usize },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("presentation failed: {0}")]
    Presentation(String),
}

/// Fieldless classification of a [`BmpError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    FileNotFound,
    InvalidSignature,
    UnsupportedHeaderSize,
    TruncatedHeader,
    TruncatedPalette,
    TruncatedPixelData,
    OutOfMemory,
    UnsupportedBitDepth,
    UnsupportedCompression,
    InvalidDimensions,
    IncompleteSurface,
    PitchTooSmall,
    BufferTooSmall,
    InvalidHeader,
    LimitExceeded,
    Presentation,
    Io,
}

impl ErrorKind {
    /// Process exit status for this kind. Every kind has its own nonzero code.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::FileNotFound => 1,
            Self::InvalidSignature => 2,
            Self::UnsupportedHeaderSize => 3,
            Self::OutOfMemory => 4,
            Self::TruncatedPixelData => 5,
            Self::UnsupportedBitDepth => 6,
            Self::Presentation => 7,
            Self::TruncatedHeader => 8,
            Self::TruncatedPalette => 9,
            Self::InvalidDimensions => 10,
            Self::IncompleteSurface => 11,
            Self::UnsupportedCompression => 12,
            Self::LimitExceeded => 13,
            Self::PitchTooSmall => 14,
            Self::BufferTooSmall => 15,
            Self::InvalidHeader => 16,
            Self::Io => 17,
        }
    }
}

impl BmpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "std")]
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            #[cfg(feature = "std")]
            Self::Io(_) => ErrorKind::Io,
            Self::InvalidSignature { .. } => ErrorKind::InvalidSignature,
            Self::UnsupportedHeaderSize(_) => ErrorKind::UnsupportedHeaderSize,
            Self::TruncatedHeader => ErrorKind::TruncatedHeader,
            Self::TruncatedPalette { .. } => ErrorKind::TruncatedPalette,
            Self::TruncatedPixelData { .. } => ErrorKind::TruncatedPixelData,
            Self::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            Self::UnsupportedBitDepth(_) => ErrorKind::UnsupportedBitDepth,
            Self::UnsupportedCompression(_) => ErrorKind::UnsupportedCompression,
            Self::InvalidDimensions { .. } => ErrorKind::InvalidDimensions,
            Self::IncompleteSurface { .. } => ErrorKind::IncompleteSurface,
            Self::PitchTooSmall { .. } => ErrorKind::PitchTooSmall,
            Self::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
            Self::InvalidHeader(_) => ErrorKind::InvalidHeader,
            Self::LimitExceeded(_) => ErrorKind::LimitExceeded,
            Self::Presentation(_) => ErrorKind::Presentation,
        }
    }

    /// Shorthand for `self.kind().exit_code()`.
    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}
