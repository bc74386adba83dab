//! PNG image format support
//!
//! Palette, low-bit and 16-bit images are normalised to 8 bits per
//! channel by the `png` crate before conversion to BGRA.

use crate::decoder::ImageDecoder;
use crate::format::ImageFormat;
use crate::image::DecodedImage;
use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Transformations};
use std::io::{BufRead, Cursor, Seek};

/// PNG decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct PngDecoder;

impl ImageDecoder for PngDecoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::Png
    }

    fn decode(&self, data: &[u8]) -> IoResult<DecodedImage> {
        read_png(Cursor::new(data))
    }
}

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<DecodedImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }

    let width = output_info.width;
    let height = output_info.height;
    let data = &buf[..output_info.buffer_size()];

    match output_info.color_type {
        ColorType::Grayscale => DecodedImage::from_gray8(width, height, data),
        ColorType::GrayscaleAlpha => DecodedImage::from_gray_alpha8(width, height, data),
        ColorType::Rgb => DecodedImage::from_rgb8(width, height, data),
        ColorType::Rgba => DecodedImage::from_rgba8(width, height, data),
        ColorType::Indexed => Err(IoError::UnsupportedFormat(
            "PNG palette was not expanded".to_string(),
        )),
    }
}
