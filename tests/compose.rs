mod common;

use common::{BmpBuilder, PAD};
use zenbmp::*;

fn stored_row(bitmap: &Bitmap, i: usize) -> &[u8] {
    bitmap.scanlines().row(i).unwrap().bytes()
}

#[test]
fn bottom_up_rows_are_flipped() {
    let data = BmpBuilder::new(2, 2, 24).with_pattern_rows().build();
    let bitmap = decode_bmp(&data).unwrap();
    let surface = bitmap.compose().unwrap();

    assert_eq!(surface.pixels().len(), 16);
    assert_eq!(surface.pitch, 8);
    assert_eq!(surface.row(0).unwrap(), stored_row(&bitmap, 1));
    assert_eq!(surface.row(1).unwrap(), stored_row(&bitmap, 0));
    assert_eq!(surface.row_pixels(0).unwrap(), &[16, 17, 18, 19, 20, 21]);
    assert!(surface.row(2).is_none());
}

#[test]
fn top_down_rows_keep_their_order() {
    let data = BmpBuilder::new(3, -4, 8)
        .with_palette(256)
        .with_pattern_rows()
        .build();
    let bitmap = decode_bmp(&data).unwrap();
    let surface = bitmap.compose().unwrap();
    for y in 0..4 {
        assert_eq!(surface.row(y).unwrap(), stored_row(&bitmap, y));
    }
    assert_eq!(surface.layout, PixelLayout::Indexed8);
}

#[test]
fn output_row_maps_to_mirrored_stored_row() {
    for height in [1i32, 2, 3, 7, 16] {
        let bitmap = decode_bmp(&BmpBuilder::new(5, height, 24).with_pattern_rows().build())
            .unwrap();
        let surface = bitmap.compose().unwrap();
        let rows = height as usize;
        for y in 0..rows {
            assert_eq!(
                surface.row(y).unwrap(),
                stored_row(&bitmap, rows - 1 - y),
                "height {height}, row {y}"
            );
        }
    }
}

#[test]
fn padding_is_copied_verbatim() {
    let data = BmpBuilder::new(1, 1, 24).with_pattern_rows().build();
    let surface = decode_bmp(&data).unwrap().compose().unwrap();
    assert_eq!(surface.pixels(), &[0, 1, 2, PAD]);
}

#[test]
fn wider_pitch_zero_fills_row_tails() {
    let data = BmpBuilder::new(2, 3, 24).with_pattern_rows().build();
    let bitmap = decode_bmp(&data).unwrap();
    let surface = bitmap.compose_with_pitch(12).unwrap();

    assert_eq!(surface.pixels().len(), 36);
    assert_eq!(surface.stride, 8);
    for (y, row) in surface.rows().enumerate() {
        assert_eq!(&row[..8], stored_row(&bitmap, 2 - y));
        assert_eq!(&row[8..], &[0, 0, 0, 0]);
    }
}

#[test]
fn compose_into_caller_buffer() {
    let data = BmpBuilder::new(2, 2, 32).with_pattern_rows().build();
    let bitmap = decode_bmp(&data).unwrap();

    // Bytes past height * pitch are left alone.
    let mut dst = vec![0xAB; 8 * 2 + 3];
    bitmap.compose_into(&mut dst, 8).unwrap();
    assert_eq!(&dst[..8], stored_row(&bitmap, 1));
    assert_eq!(&dst[8..16], stored_row(&bitmap, 0));
    assert_eq!(&dst[16..], &[0xAB; 3]);
}

#[test]
fn pitch_smaller_than_stride_is_rejected() {
    let data = BmpBuilder::new(2, 2, 24).with_pattern_rows().build();
    let bitmap = decode_bmp(&data).unwrap();
    assert!(matches!(
        bitmap.compose_with_pitch(6),
        Err(BmpError::PitchTooSmall {
            pitch: 6,
            stride: 8
        })
    ));
}

#[test]
fn short_destination_is_rejected_untouched() {
    let data = BmpBuilder::new(2, 2, 24).with_pattern_rows().build();
    let bitmap = decode_bmp(&data).unwrap();
    let mut dst = vec![0x11; 15];
    match bitmap.compose_into(&mut dst, 8) {
        Err(BmpError::BufferTooSmall { needed, actual }) => {
            assert_eq!(needed, 16);
            assert_eq!(actual, 15);
        }
        other => panic!("expected BufferTooSmall, got {other:?}"),
    }
    assert!(dst.iter().all(|&b| b == 0x11));
}

#[test]
fn sub_byte_rows_are_not_expanded() {
    let mut b = BmpBuilder::new(10, 2, 1).with_palette(2);
    b.rows = vec![vec![0b1010_1010, 0b1100_0000], vec![0b0101_0101, 0b0100_0000]];
    let bitmap = decode_bmp(&b.build()).unwrap();
    let surface = bitmap.compose().unwrap();
    assert_eq!(surface.layout, PixelLayout::Indexed1);
    assert_eq!(surface.row_bytes, 2);
    assert_eq!(surface.row_pixels(0).unwrap(), &[0b0101_0101, 0b0100_0000]);
    assert_eq!(surface.row_pixels(1).unwrap(), &[0b1010_1010, 0b1100_0000]);
}

#[cfg(feature = "imgref")]
#[test]
fn imgvec_export_drops_padding_and_swizzles() {
    // One row, bottom-up: blue pixel then red pixel.
    let mut b = BmpBuilder::new(2, 1, 24);
    b.rows = vec![vec![255, 0, 0, 0, 0, 255]];
    let surface = decode_bmp(&b.build()).unwrap().compose().unwrap();
    let img = surface.to_imgvec_rgb8().unwrap();
    assert_eq!(img.width(), 2);
    assert_eq!(img.height(), 1);
    assert_eq!(img.buf(), &[rgb::RGB8::new(0, 0, 255), rgb::RGB8::new(255, 0, 0)]);
}
