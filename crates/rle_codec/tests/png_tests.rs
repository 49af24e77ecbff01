use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use rle_codec::*;

fn checkerboard(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if (x / 4 + y / 4) % 2 == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

fn to_png(img: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("PNG encoding should work");
    bytes
}

#[test]
fn test_png_roundtrip_through_envelope() {
    let png = to_png(&checkerboard(24, 10));

    let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png)
        .expect("PNG decoding should work")
        .to_rgba8();
    let (width, height) = decoded.dimensions();
    let pixels = decoded.into_raw();

    let json = encode_image(&pixels, width as usize, height as usize).unwrap();
    let image = decode_image(&json).unwrap();
    assert_eq!((image.width, image.height), (24, 10));

    let rebuilt = RgbaImage::from_raw(image.width as u32, image.height as u32, image.pixels)
        .expect("buffer should match dimensions");
    assert_eq!(rebuilt, checkerboard(24, 10));

    // Re-encoding the rebuilt raster gives back a PNG with the same pixels
    let again = image::load_from_memory(&to_png(&rebuilt)).unwrap().to_rgba8();
    assert_eq!(again, checkerboard(24, 10));
}

#[test]
fn test_checkerboard_runs() {
    let img = checkerboard(8, 1);
    let json = encode_image(img.as_raw(), 8, 1).unwrap();
    let envelope = unwrap(&json).unwrap();
    assert_eq!(envelope.data, "4:255,255,255,255|4:0,0,0,0|");
}
