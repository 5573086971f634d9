#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header parsing alone must never panic, even for compressed files
    let _ = zenbmp::read_headers(data);

    let limits = zenbmp::Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };
    let Ok(bitmap) = zenbmp::DecodeRequest::new(data).with_limits(&limits).decode() else {
        return;
    };

    // A decoded bitmap always composes into exactly height * stride bytes
    let surface = bitmap.compose().expect("compose of a decoded bitmap");
    assert_eq!(surface.pixels().len(), surface.height as usize * surface.stride);
    let _ = bitmap.summary().to_string();
});
