use core::fmt;

use crate::bmp::{COMPRESSION_NONE, FileHeader, InfoHeader};

/// Human-readable report of the decoded header fields.
///
/// Reads nothing but the headers, so it can be produced from
/// [`read_headers`](crate::read_headers) as well as from a full decode.
#[derive(Clone, Copy, Debug)]
pub struct Summary<'a> {
    pub file: &'a FileHeader,
    pub info: &'a InfoHeader,
}

impl<'a> Summary<'a> {
    pub fn new(file: &'a FileHeader, info: &'a InfoHeader) -> Self {
        Self { file, info }
    }
}

fn compression_name(code: u32) -> &'static str {
    match code {
        COMPRESSION_NONE => "No Compression",
        1 => "RLE8",
        2 => "RLE4",
        3 => "Bitfields",
        _ => "Unknown",
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info;
        writeln!(f, "File Size: {} Bytes", self.file.file_size)?;
        writeln!(f, "Info header Size: {} Bytes", info.size)?;
        writeln!(f, "Width: {} Pixels", info.width)?;
        writeln!(f, "Height: {} Pixels", info.height)?;
        writeln!(
            f,
            "Horizontal Resolution: {} Pixels per Meter",
            info.h_pels_per_meter
        )?;
        writeln!(
            f,
            "Vertical Resolution: {} Pixels per Meter",
            info.v_pels_per_meter
        )?;
        writeln!(f, "Bit Depth (Bit Count): {} Bits", info.bit_depth)?;
        if info.has_palette() {
            writeln!(f, "Palette Entries: {}", info.palette_len())?;
        }
        writeln!(
            f,
            "Compression Method: {} ({})",
            info.compression,
            compression_name(info.compression)
        )?;
        writeln!(f, "------------------------")?;
        write!(f, "zenbmp version: {}", env!("CARGO_PKG_VERSION"))
    }
}
