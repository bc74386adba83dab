//! Decoded images in the normalised BGRA layout

use crate::{IoError, IoResult};
use roistat_core::PixelBuffer;
use roistat_core::color::BYTES_PER_PIXEL;

/// An owned, tightly packed BGRA image (`stride == width * 4`).
///
/// This is what every decoder produces; [`DecodedImage::as_buffer`] lends
/// it to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl DecodedImage {
    /// Wrap packed BGRA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidData`] if the size does not match or a
    /// dimension is zero.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> IoResult<Self> {
        let expected = expected_len(width, height, BYTES_PER_PIXEL)?;
        if data.len() != expected {
            return Err(IoError::InvalidData(format!(
                "BGRA data is {} bytes, expected {} for {}x{}",
                data.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Convert interleaved RGBA bytes.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> IoResult<Self> {
        Self::convert(width, height, rgba, 4, |p| [p[2], p[1], p[0], p[3]])
    }

    /// Convert interleaved RGB bytes; alpha becomes 255.
    pub fn from_rgb8(width: u32, height: u32, rgb: &[u8]) -> IoResult<Self> {
        Self::convert(width, height, rgb, 3, |p| [p[2], p[1], p[0], 255])
    }

    /// Convert 8-bit grayscale; alpha becomes 255.
    pub fn from_gray8(width: u32, height: u32, gray: &[u8]) -> IoResult<Self> {
        Self::convert(width, height, gray, 1, |p| [p[0], p[0], p[0], 255])
    }

    /// Convert interleaved gray + alpha bytes.
    pub fn from_gray_alpha8(width: u32, height: u32, ga: &[u8]) -> IoResult<Self> {
        Self::convert(width, height, ga, 2, |p| [p[0], p[0], p[0], p[1]])
    }

    fn convert<F>(width: u32, height: u32, src: &[u8], channels: usize, f: F) -> IoResult<Self>
    where
        F: Fn(&[u8]) -> [u8; BYTES_PER_PIXEL],
    {
        let expected = expected_len(width, height, channels)?;
        if src.len() < expected {
            return Err(IoError::InvalidData(format!(
                "pixel data is {} bytes, expected {} for {}x{} with {} channels",
                src.len(),
                expected,
                width,
                height,
                channels
            )));
        }
        let data: Vec<u8> = src[..expected].chunks_exact(channels).flat_map(f).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row length in bytes
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// BGRA bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Take the BGRA bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a [`PixelBuffer`] for extraction.
    pub fn as_buffer(&self) -> IoResult<PixelBuffer<'_>> {
        Ok(PixelBuffer::new(
            &self.data,
            self.width,
            self.height,
            self.stride(),
        )?)
    }
}

fn expected_len(width: u32, height: u32, channels: usize) -> IoResult<usize> {
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "invalid image dimensions: {}x{}",
            width, height
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| {
            IoError::InvalidData(format!("image too large: {}x{}", width, height))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba8_swaps_red_blue() {
        let img = DecodedImage::from_rgba8(1, 1, &[10, 20, 30, 40]).unwrap();
        assert_eq!(img.data(), &[30, 20, 10, 40]);
    }

    #[test]
    fn test_from_rgb8_opaque() {
        let img = DecodedImage::from_rgb8(2, 1, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.data(), &[3, 2, 1, 255, 6, 5, 4, 255]);
    }

    #[test]
    fn test_from_gray() {
        let img = DecodedImage::from_gray8(1, 2, &[9, 8]).unwrap();
        assert_eq!(img.data(), &[9, 9, 9, 255, 8, 8, 8, 255]);
        let img = DecodedImage::from_gray_alpha8(1, 1, &[7, 100]).unwrap();
        assert_eq!(img.data(), &[7, 7, 7, 100]);
    }

    #[test]
    fn test_short_input_rejected() {
        assert!(DecodedImage::from_rgb8(2, 2, &[0; 11]).is_err());
        assert!(DecodedImage::new(1, 1, vec![0; 3]).is_err());
        assert!(DecodedImage::from_gray8(0, 1, &[]).is_err());
    }

    #[test]
    fn test_as_buffer() {
        let img = DecodedImage::from_gray8(3, 2, &[1, 2, 3, 4, 5, 6]).unwrap();
        let buf = img.as_buffer().unwrap();
        assert_eq!(buf.stride(), 12);
        assert_eq!(buf.pixel(2, 1).unwrap().g, 6);
    }
}
