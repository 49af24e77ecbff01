#![no_main]

use libfuzzer_sys::fuzz_target;
use rle_codec::{decode_image, decode_tokens_strict};

fuzz_target!(|data: &str| {
    if let Ok(image) = decode_image(data) {
        assert_eq!(image.pixels.len(), image.width * image.height * 4);
    }

    // Unbounded: keep run counts small
    if data.split(|c: char| !c.is_ascii_digit()).any(|count| count.len() > 4) {
        return;
    }
    let _ = decode_tokens_strict(data);
});
