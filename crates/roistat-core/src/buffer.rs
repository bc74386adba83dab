//! PixelBuffer - borrowed view over normalised BGRA pixel data
//!
//! The buffer is owned by whoever decoded the image; the core only reads
//! it. Rows are `stride` bytes apart and the stride may include padding.

use crate::color::{BYTES_PER_PIXEL, Bgra};
use crate::error::{Error, Result};

/// Immutable view of `height` rows of BGRA pixels.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: usize,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap raw BGRA bytes.
    ///
    /// The final row only needs its `width * 4` pixel bytes; trailing
    /// padding after the last pixel may be absent.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is zero
    /// - [`Error::InvalidStride`] if `stride < width * 4`
    /// - [`Error::BufferTooSmall`] if `data` cannot hold every row
    pub fn new(data: &'a [u8], width: u32, height: u32, stride: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let row_bytes = width as usize * BYTES_PER_PIXEL;
        if stride < row_bytes {
            return Err(Error::InvalidStride {
                stride,
                min: row_bytes,
            });
        }
        let required = (height as usize - 1)
            .checked_mul(stride)
            .and_then(|n| n.checked_add(row_bytes))
            .ok_or_else(|| Error::InvalidParameter("buffer geometry overflows".to_string()))?;
        if data.len() < required {
            return Err(Error::BufferTooSmall {
                len: data.len(),
                required,
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Wrap tightly packed BGRA bytes (`stride == width * 4`).
    pub fn packed(data: &'a [u8], width: u32, height: u32) -> Result<Self> {
        Self::new(data, width, height, width as usize * BYTES_PER_PIXEL)
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Distance between row starts in bytes
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The underlying bytes, padding included
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Pixel bytes of row `y`, without padding.
    pub fn row(&self, y: u32) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride;
        self.data
            .get(start..start + self.width as usize * BYTES_PER_PIXEL)
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Bgra> {
        if x >= self.width {
            return None;
        }
        let row = self.row(y)?;
        Bgra::from_bytes(&row[x as usize * BYTES_PER_PIXEL..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert_eq!(
            PixelBuffer::new(&[], 0, 1, 0).unwrap_err(),
            Error::InvalidDimension {
                width: 0,
                height: 1
            }
        );
    }

    #[test]
    fn test_new_rejects_short_stride() {
        let data = [0u8; 32];
        assert_eq!(
            PixelBuffer::new(&data, 2, 2, 7).unwrap_err(),
            Error::InvalidStride { stride: 7, min: 8 }
        );
    }

    #[test]
    fn test_new_rejects_short_data() {
        let data = [0u8; 15];
        assert_eq!(
            PixelBuffer::packed(&data, 2, 2).unwrap_err(),
            Error::BufferTooSmall {
                len: 15,
                required: 16
            }
        );
    }

    #[test]
    fn test_last_row_padding_optional() {
        // 2x2 with 12-byte stride: 12 + 8 bytes suffice
        let data = [0u8; 20];
        let buf = PixelBuffer::new(&data, 2, 2, 12).unwrap();
        assert_eq!(buf.row(1).unwrap().len(), 8);
    }

    #[test]
    fn test_pixel_access_with_padding() {
        #[rustfmt::skip]
        let data = [
            1, 2, 3, 255,  4, 5, 6, 255,  0xEE, 0xEE,
            7, 8, 9, 255,  10, 11, 12, 255, 0xEE, 0xEE,
        ];
        let buf = PixelBuffer::new(&data, 2, 2, 10).unwrap();
        assert_eq!(buf.pixel(1, 1), Some(Bgra { b: 10, g: 11, r: 12, a: 255 }));
        assert_eq!(buf.pixel(0, 1).unwrap().r, 9);
        assert!(buf.pixel(2, 0).is_none());
        assert!(buf.pixel(0, 2).is_none());
        assert!(buf.row(2).is_none());
    }
}
