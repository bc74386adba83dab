//! Pixel extraction
//!
//! De-interleaves the colour channels of a rectangular region into three
//! flat sample sequences, one entry per pixel in row-major order. Alpha is
//! dropped.

use crate::buffer::PixelBuffer;
use crate::color::{BLUE, BYTES_PER_PIXEL, Bgra, Channel, GREEN, RED};
use crate::error::{Error, Result};
use crate::region::Region;

/// Per-channel samples taken from a region.
///
/// The three sequences always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelSamples {
    red: Vec<u8>,
    green: Vec<u8>,
    blue: Vec<u8>,
}

impl ChannelSamples {
    /// Create empty sample sequences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty sample sequences with room for `capacity` pixels.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            red: Vec::with_capacity(capacity),
            green: Vec::with_capacity(capacity),
            blue: Vec::with_capacity(capacity),
        }
    }

    /// Build from existing per-channel sequences.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelLengthMismatch`] if the lengths differ.
    pub fn from_channels(red: Vec<u8>, green: Vec<u8>, blue: Vec<u8>) -> Result<Self> {
        if red.len() != green.len() || red.len() != blue.len() {
            return Err(Error::ChannelLengthMismatch {
                red: red.len(),
                green: green.len(),
                blue: blue.len(),
            });
        }
        Ok(Self { red, green, blue })
    }

    /// Append one pixel's colour channels.
    #[inline]
    pub fn push(&mut self, pixel: Bgra) {
        self.red.push(pixel.r);
        self.green.push(pixel.g);
        self.blue.push(pixel.b);
    }

    /// Number of pixels sampled
    #[inline]
    pub fn len(&self) -> usize {
        self.red.len()
    }

    /// Check if no pixels were sampled
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.red.is_empty()
    }

    pub fn red(&self) -> &[u8] {
        &self.red
    }

    pub fn green(&self) -> &[u8] {
        &self.green
    }

    pub fn blue(&self) -> &[u8] {
        &self.blue
    }

    /// Samples of one channel.
    pub fn channel(&self, channel: Channel) -> &[u8] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Split into `(red, green, blue)`.
    pub fn into_channels(self) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        (self.red, self.green, self.blue)
    }
}

/// Extract the colour samples of `region` from `buffer`.
///
/// Rows are visited top to bottom and pixels left to right. For each pixel
/// byte 2 goes to red, byte 1 to green, byte 0 to blue; byte 3 (alpha) is
/// ignored.
///
/// # Errors
///
/// - [`Error::InvalidRegion`] if the region width or height is not positive
/// - [`Error::OutOfBounds`] if the region is not fully inside the buffer
///
/// Nothing outside the buffer is ever read.
///
/// # Examples
///
/// ```
/// use roistat_core::{PixelBuffer, Region, extract};
///
/// // 2x1 image: one blue pixel, one red pixel
/// let data = [255, 0, 0, 255, 0, 0, 255, 255];
/// let buf = PixelBuffer::packed(&data, 2, 1).unwrap();
/// let samples = extract(&buf, Region::new(0, 0, 2, 1)).unwrap();
/// assert_eq!(samples.red(), &[0, 255]);
/// assert_eq!(samples.blue(), &[255, 0]);
/// ```
pub fn extract(buffer: &PixelBuffer<'_>, region: Region) -> Result<ChannelSamples> {
    region.validate(buffer.width(), buffer.height())?;

    // validate() guarantees non-negative origin and positive size
    let (x0, y0) = (region.x as usize, region.y as usize);
    let (w, h) = (region.w as usize, region.h as usize);
    let stride = buffer.stride();
    let data = buffer.data();

    let mut samples = ChannelSamples::with_capacity(w * h);
    for r in 0..h {
        let base = (y0 + r) * stride + x0 * BYTES_PER_PIXEL;
        let row = &data[base..base + w * BYTES_PER_PIXEL];
        for px in row.chunks_exact(BYTES_PER_PIXEL) {
            samples.red.push(px[RED]);
            samples.green.push(px[GREEN]);
            samples.blue.push(px[BLUE]);
        }
    }

    tracing::trace!(
        x = region.x,
        y = region.y,
        w = region.w,
        h = region.h,
        samples = samples.len(),
        "extracted region samples"
    );
    Ok(samples)
}

impl PixelBuffer<'_> {
    /// Extract the colour samples of `region`.
    ///
    /// See [`extract`].
    pub fn extract(&self, region: Region) -> Result<ChannelSamples> {
        extract(self, region)
    }
}
