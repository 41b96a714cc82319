use std::io::Cursor;

use base64::Engine;
use image::{DynamicImage, ImageReader, Limits};

/// Largest accepted width or height, in pixels.
pub const MAX_IMAGE_DIMENSION: u32 = 8192;

/// Sample layout of a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Grayscale, alpha dropped.
    Luma,
    /// Every colour image is handed to classifiers as B,G,R, alpha dropped.
    Bgr,
}

impl ChannelOrder {
    pub fn channels(self) -> usize {
        match self {
            ChannelOrder::Luma => 1,
            ChannelOrder::Bgr => 3,
        }
    }
}

/// Decoded, normalized image with interleaved 8-bit samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Build a buffer from raw samples. Fails on a zero dimension or a sample
    /// count that does not match `width * height * channels`.
    pub fn new(
        width: u32,
        height: u32,
        order: ChannelOrder,
        data: Vec<u8>,
    ) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::ZeroDimension { width, height });
        }

        let expected = width as usize * height as usize * order.channels();
        if data.len() != expected {
            return Err(DecodeError::SampleCount {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            order,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.order
    }

    pub fn channels(&self) -> usize {
        self.order.channels()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Samples of the pixel at (`x`, `y`), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let channels = self.channels();
        let start = (y as usize * self.width as usize + x as usize) * channels;
        self.data.get(start..start + channels)
    }
}

/// Turns base64 request payloads into classifier-ready pixel buffers.
pub struct ImageCodec;

impl ImageCodec {
    /// Decode a base64 image (bare or `data:` URL) into a normalized buffer.
    pub fn decode(base64_text: &str) -> Result<PixelBuffer, DecodeError> {
        let payload = strip_data_url(base64_text.trim());
        if payload.is_empty() {
            return Err(DecodeError::Empty);
        }

        // Line-wrapped (MIME style) payloads are accepted.
        let compact: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = base64::engine::general_purpose::STANDARD.decode(compact)?;
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }

        let mut limits = Limits::default();
        limits.max_image_width = Some(MAX_IMAGE_DIMENSION);
        limits.max_image_height = Some(MAX_IMAGE_DIMENSION);

        let mut reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(image::ImageError::from)?;
        reader.limits(limits);

        normalize(reader.decode()?)
    }
}

/// Drop a `data:<mime>;base64,` header if present.
fn strip_data_url(text: &str) -> &str {
    if !text.starts_with("data:") {
        return text;
    }
    match text.split_once(',') {
        Some((header, body)) if header.ends_with(";base64") => body,
        _ => text,
    }
}

fn normalize(image: DynamicImage) -> Result<PixelBuffer, DecodeError> {
    let (width, height) = (image.width(), image.height());

    if !image.color().has_color() {
        return PixelBuffer::new(
            width,
            height,
            ChannelOrder::Luma,
            image.into_luma8().into_raw(),
        );
    }

    let mut data = image.into_rgb8().into_raw();
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    PixelBuffer::new(width, height, ChannelOrder::Bgr, data)
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("image payload is empty")]
    Empty,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("cannot identify image file: {0}")]
    Image(#[from] image::ImageError),

    #[error("image has zero dimension ({width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("pixel data has {actual} samples, expected {expected}")]
    SampleCount { expected: usize, actual: usize },
}
