//! In-memory image fixtures encoded the way browsers send them.
#![allow(dead_code)]

use base64::Engine;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// Base64 of an encoded image.
pub fn encode_base64(image: DynamicImage, format: ImageFormat) -> String {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .expect("Failed to encode fixture image");
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Solid-color square PNG, base64-encoded.
pub fn solid_png(size: u32, rgb: [u8; 3]) -> String {
    encode_base64(
        RgbImage::from_pixel(size, size, Rgb(rgb)).into(),
        ImageFormat::Png,
    )
}

/// Solid-color square PNG with an alpha channel, base64-encoded.
pub fn rgba_png(size: u32, rgba: [u8; 4]) -> String {
    encode_base64(
        RgbaImage::from_pixel(size, size, Rgba(rgba)).into(),
        ImageFormat::Png,
    )
}

/// Solid-color JPEG as a `data:` URL, like `canvas.toDataURL("image/jpeg")`.
pub fn jpeg_data_url(size: u32, rgb: [u8; 3]) -> String {
    let encoded = encode_base64(
        RgbImage::from_pixel(size, size, Rgb(rgb)).into(),
        ImageFormat::Jpeg,
    );
    format!("data:image/jpeg;base64,{}", encoded)
}

/// Valid base64 that is not an image.
pub fn not_an_image() -> String {
    base64::engine::general_purpose::STANDARD.encode(b"GIF? no, just plain text")
}
