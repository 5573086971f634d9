//! Shows a surface in the terminal using 24-bit ANSI colors, two image rows
//! per text line (upper half block).

use std::io::{self, BufWriter, Write};

use log::trace;
use zenbmp::{BmpError, PixelLayout, Presenter, Surface};

pub struct TerminalPresenter<W: Write> {
    out: W,
    max_columns: usize,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, max_columns: usize) -> Self {
        Self {
            out,
            max_columns: max_columns.max(1),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `[r, g, b]` of pixel `x` in a BGR or BGRX row.
fn pixel(row: &[u8], x: usize, bpp: usize) -> [u8; 3] {
    let px = &row[x * bpp..x * bpp + 3];
    [px[2], px[1], px[0]]
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, surface: &Surface) -> Result<(), BmpError> {
        let bpp = match surface.layout {
            PixelLayout::Bgr8 => 3,
            PixelLayout::Bgrx8 => 4,
            other => return Err(BmpError::UnsupportedBitDepth(other.bits_per_pixel())),
        };
        let width = surface.width as usize;
        let height = surface.height as usize;
        // Nearest-neighbour downscale so the image fits the terminal width.
        let step = width.div_ceil(self.max_columns).max(1);
        trace!("presenting {width}x{height} with step {step}");

        let mut out = BufWriter::new(&mut self.out);
        let mut draw = || -> io::Result<()> {
            for y in (0..height).step_by(step * 2) {
                let top = surface.row_pixels(y).unwrap_or_default();
                let bottom = surface.row_pixels(y + step).unwrap_or_default();
                for x in (0..width).step_by(step) {
                    let [r, g, b] = pixel(top, x, bpp);
                    write!(out, "\x1b[38;2;{r};{g};{b}m")?;
                    if bottom.is_empty() {
                        write!(out, "\x1b[49m")?;
                    } else {
                        let [r, g, b] = pixel(bottom, x, bpp);
                        write!(out, "\x1b[48;2;{r};{g};{b}m")?;
                    }
                    write!(out, "\u{2580}")?;
                }
                writeln!(out, "\x1b[0m")?;
            }
            out.flush()
        };
        draw().map_err(|e| BmpError::Presentation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bgr_bmp(width: u32, height: i32, pixels: &[u8]) -> Vec<u8> {
        let stride = (width as usize * 3 + 3) & !3;
        let rows = height.unsigned_abs() as usize;
        let mut data = Vec::new();
        data.extend_from_slice(b"BM");
        data.extend_from_slice(&((54 + stride * rows) as u32).to_le_bytes());
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&54u32.to_le_bytes());
        data.extend_from_slice(&40u32.to_le_bytes());
        data.extend_from_slice(&(width as i32).to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());
        data.extend_from_slice(&1u16.to_le_bytes());
        data.extend_from_slice(&24u16.to_le_bytes());
        data.extend_from_slice(&[0; 24]);
        for row in pixels.chunks_exact(width as usize * 3) {
            data.extend_from_slice(row);
            data.resize(data.len() + stride - row.len(), 0);
        }
        data
    }

    #[test]
    fn renders_one_line_per_two_rows() {
        // Top-down: red row above blue row.
        let data = bgr_bmp(1, -2, &[0, 0, 255, 255, 0, 0]);
        let surface = zenbmp::decode_bmp(&data).unwrap().compose().unwrap();
        let mut presenter = TerminalPresenter::new(Vec::new(), 80);
        presenter.present(&surface).unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(text, "\x1b[38;2;255;0;0m\x1b[48;2;0;0;255m\u{2580}\x1b[0m\n");
    }

    #[test]
    fn indexed_surfaces_are_rejected() {
        let mut data = bgr_bmp(1, 1, &[0, 0, 0]);
        data[28] = 8;
        let pixels = data.split_off(54);
        data.extend_from_slice(&[0u8; 1024]);
        data.extend_from_slice(&pixels);
        data[10..14].copy_from_slice(&1078u32.to_le_bytes());
        let surface = zenbmp::decode_bmp(&data).unwrap().compose().unwrap();
        let mut presenter = TerminalPresenter::new(Vec::new(), 80);
        assert!(matches!(
            presenter.present(&surface),
            Err(BmpError::UnsupportedBitDepth(8))
        ));
    }
}
