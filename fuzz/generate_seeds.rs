#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, bpp: u16, palette: usize, pixels: &[u8]) -> Vec<u8> {
    let offset = 54 + palette * 4;
    let size = offset + pixels.len();
    let mut out = vec![0u8; 54];
    out[0] = b'B'; out[1] = b'M';
    out[2..6].copy_from_slice(&(size as u32).to_le_bytes()); // file size
    out[10..14].copy_from_slice(&(offset as u32).to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&bpp.to_le_bytes());
    out[34..38].copy_from_slice(&(pixels.len() as u32).to_le_bytes());
    for i in 0..palette {
        out.extend_from_slice(&[i as u8, i as u8, i as u8, 0]);
    }
    out.extend_from_slice(pixels);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1 24-bit, 3 + 1 padding
    fs::write(format!("{dir}/bgr_1x1.bmp"), bmp(1, 1, 24, 0, &[0xff, 0, 0, 0])).unwrap();

    // 2x2 32-bit top-down
    let bgrx = [0u8, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0, 0, 9, 9, 9, 0];
    fs::write(format!("{dir}/bgrx_2x-2.bmp"), bmp(2, -2, 32, 0, &bgrx)).unwrap();

    // Indexed 1, 4 and 8-bit, 3x2
    fs::write(format!("{dir}/idx1_3x2.bmp"), bmp(3, 2, 1, 2, &[0xa0, 0, 0, 0, 0x40, 0, 0, 0])).unwrap();
    fs::write(format!("{dir}/idx4_3x2.bmp"), bmp(3, 2, 4, 16, &[0x12, 0x30, 0, 0, 0xfe, 0xd0, 0, 0])).unwrap();
    fs::write(format!("{dir}/idx8_3x2.bmp"), bmp(3, 2, 8, 256, &[1, 2, 3, 0, 4, 5, 6, 0])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut short_rows = bmp(4, 4, 24, 0, &[0u8; 48]);
    short_rows.truncate(54 + 20);
    fs::write(format!("{dir}/short_rows.bmp"), short_rows).unwrap();

    println!("Generated seed corpus in {dir}/");
}
