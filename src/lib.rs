//! # zenbmp
//!
//! Decoder for uncompressed Windows BMP files that produces a top-down pixel
//! surface ready to hand to a display layer.
//!
//! ## Supported Files
//!
//! - 14-byte file header + 40-byte `BITMAPINFOHEADER`
//! - Uncompressed (`BI_RGB`) pixel data at 1, 4, 8, 24 and 32 bits per pixel
//! - Bottom-up (positive height) and top-down (negative height) row order
//! - Color table for 1, 4 and 8-bit images (`2^depth` entries unless
//!   `colors_used` says otherwise)
//!
//! ## Non-Goals
//!
//! - RLE4/RLE8/bitfield compression, OS/2 and V4/V5 headers
//! - Encoding
//! - Color management
//!
//! ## Decoding Model
//!
//! Decoding is a single pass over the input: file header, info header,
//! optional color table, then every scanline from the pixel data offset.
//! The result, a [`Bitmap`], keeps the scanlines exactly as stored
//! (alignment padding included) and in file order. [`Bitmap::compose`]
//! flips them into a top-down [`Surface`] without converting pixels; a
//! [`Presenter`] takes it from there.
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{decode_bmp, RowOrder};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let bitmap = decode_bmp(data)?;
//! println!("{}", bitmap.summary());
//!
//! let geometry = bitmap.geometry();
//! assert_eq!(geometry.stride % 4, 0);
//!
//! // Top-down rows, one stride apart
//! let surface = bitmap.compose()?;
//! let top = surface.row(0).unwrap();
//! # let _ = (top, RowOrder::BottomUp);
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bmp;

mod decode;
mod error;
mod limits;
mod pixel;
mod summary;
mod surface;

// Re-exports
pub use bmp::{
    BmpHeaders, FileHeader, InfoHeader, PaletteEntry, RowOrder, Scanline, ScanlineGeometry,
    ScanlineStore,
};
pub use decode::{Bitmap, DecodeRequest, decode_bmp, read_headers};
#[cfg(feature = "std")]
pub use decode::{decode_file, decode_reader};
pub use error::{BmpError, ErrorKind};
pub use limits::Limits;
pub use pixel::PixelLayout;
pub use summary::Summary;
pub use surface::{Presenter, Surface};
