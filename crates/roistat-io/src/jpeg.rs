//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale, RGB and
//! CMYK images are converted to opaque BGRA.

use crate::decoder::ImageDecoder;
use crate::format::ImageFormat;
use crate::image::DecodedImage;
use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// JPEG decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegDecoder;

impl ImageDecoder for JpegDecoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::Jpeg
    }

    fn decode(&self, data: &[u8]) -> IoResult<DecodedImage> {
        read_jpeg(data)
    }
}

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<DecodedImage> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    match info.pixel_format {
        PixelFormat::L8 => DecodedImage::from_gray8(width, height, &pixels),
        PixelFormat::RGB24 => DecodedImage::from_rgb8(width, height, &pixels),
        PixelFormat::CMYK32 => {
            let rgb: Vec<u8> = pixels
                .chunks_exact(4)
                .flat_map(|p| cmyk_to_rgb(p[0], p[1], p[2], p[3]))
                .collect();
            DecodedImage::from_rgb8(width, height, &rgb)
        }
        other => Err(IoError::UnsupportedFormat(format!(
            "JPEG pixel format {:?} not supported",
            other
        ))),
    }
}

fn cmyk_to_rgb(c: u8, m: u8, y: u8, k: u8) -> [u8; 3] {
    let ink = |v: u8| ((255 - v as u32) * (255 - k as u32) / 255) as u8;
    [ink(c), ink(m), ink(y)]
}
