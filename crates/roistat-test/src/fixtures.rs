//! Synthetic BGRA images for tests

use crate::error::TestResult;
use roistat_core::color::BYTES_PER_PIXEL;
use roistat_core::{Bgra, PixelBuffer};

/// Padding byte written after each row; never a legal sample in tests
/// that check padding is skipped.
pub const PAD_BYTE: u8 = 0xEE;

/// An owned BGRA image that lends out [`PixelBuffer`] views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

impl TestImage {
    /// Build an image pixel by pixel, with `padding` extra bytes per row.
    pub fn from_fn<F>(width: u32, height: u32, padding: usize, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Bgra,
    {
        let stride = width as usize * BYTES_PER_PIXEL + padding;
        let mut data = Vec::with_capacity(stride * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y).to_bytes());
            }
            data.resize(data.len() + padding, PAD_BYTE);
        }
        Self {
            data,
            width,
            height,
            stride,
        }
    }

    /// Every pixel the same colour.
    pub fn uniform(width: u32, height: u32, pixel: Bgra) -> Self {
        Self::from_fn(width, height, 0, |_, _| pixel)
    }

    /// Red rises with x, green with y, blue with x + y; alpha varies too so
    /// tests notice if it leaks into the samples.
    pub fn gradient(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, 0, |x, y| Bgra {
            r: (x % 256) as u8,
            g: (y % 256) as u8,
            b: ((x + y) % 256) as u8,
            a: ((x * 7 + y * 3) % 256) as u8,
        })
    }

    /// The same image with `padding` bytes appended to every row.
    pub fn with_padding(&self, padding: usize) -> Self {
        Self::from_fn(self.width, self.height, padding, |x, y| {
            let start = y as usize * self.stride + x as usize * BYTES_PER_PIXEL;
            Bgra::from_bytes(&self.data[start..start + BYTES_PER_PIXEL]).unwrap_or_default()
        })
    }

    /// Borrow as a validated [`PixelBuffer`].
    pub fn buffer(&self) -> TestResult<PixelBuffer<'_>> {
        Ok(PixelBuffer::new(
            &self.data,
            self.width,
            self.height,
            self.stride,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_layout() {
        let img = TestImage::from_fn(2, 1, 3, |x, _| Bgra::rgb(x as u8, 0, 0));
        assert_eq!(img.stride, 11);
        assert_eq!(
            img.data,
            vec![0, 0, 0, 255, 0, 0, 1, 255, PAD_BYTE, PAD_BYTE, PAD_BYTE]
        );
    }

    #[test]
    fn test_with_padding_keeps_pixels() {
        let img = TestImage::gradient(5, 4);
        let padded = img.with_padding(6);
        assert_eq!(padded.stride, 26);
        let a = img.buffer().unwrap();
        let b = padded.buffer().unwrap();
        for y in 0..4 {
            assert_eq!(a.row(y), b.row(y));
        }
    }
}
