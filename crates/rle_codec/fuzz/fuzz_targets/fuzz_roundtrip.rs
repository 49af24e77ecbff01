#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rle_codec::{decode_image, decode_text, encode_image, encode_text, prepare_text, Format};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    pixels: Vec<u8>,
    text: String,
    numbers_allowed: bool,
}

fuzz_target!(|input: FuzzInput| {
    let format = Format::from_numbers_allowed(input.numbers_allowed);
    let text = prepare_text(&input.text, format);
    if !text.contains([',', ':']) {
        let encoded = encode_text(&text, format);
        assert_eq!(decode_text(&encoded, format), text);
    }

    // Skip invalid dimensions
    let width = (input.width as usize).max(1).min(64);
    let height = (input.height as usize).max(1).min(64);

    // Ensure we have enough pixels (RGBA = 4 bytes per pixel)
    let expected_size = width * height * 4;
    if input.pixels.len() < expected_size {
        return;
    }

    let pixels = &input.pixels[..expected_size];
    let envelope = encode_image(pixels, width, height).expect("valid raster should encode");
    let decoded = decode_image(&envelope).expect("own envelope should decode");

    assert_eq!(decoded.width, width);
    assert_eq!(decoded.height, height);
    assert_eq!(decoded.pixels, pixels);
});
