//! Colour channel layout of normalised pixel buffers.
//!
//! # Pixel format
//!
//! Every pixel is 4 bytes in memory order blue, green, red, alpha. Alpha is
//! carried through the layout but never contributes to statistics.

/// Bytes per pixel in a normalised buffer
pub const BYTES_PER_PIXEL: usize = 4;

/// Blue channel byte offset
pub const BLUE: usize = 0;
/// Green channel byte offset
pub const GREEN: usize = 1;
/// Red channel byte offset
pub const RED: usize = 2;
/// Alpha channel byte offset
pub const ALPHA: usize = 3;

/// Colour channel that statistics are computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All statistic channels in display order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Byte offset of this channel within a pixel.
    #[inline]
    pub const fn byte_offset(self) -> usize {
        match self {
            Channel::Red => RED,
            Channel::Green => GREEN,
            Channel::Blue => BLUE,
        }
    }

    /// Single-letter label ("R", "G", "B").
    pub const fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

/// One pixel, named by channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bgra {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra {
    /// Opaque pixel from red, green and blue.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, a: 255 }
    }

    /// Read a pixel from the first 4 bytes of `bytes`.
    ///
    /// Returns `None` if fewer than 4 bytes are available.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [b, g, r, a, ..] => Some(Self {
                b: *b,
                g: *g,
                r: *r,
                a: *a,
            }),
            _ => None,
        }
    }

    /// Pixel in memory order.
    #[inline]
    pub const fn to_bytes(self) -> [u8; BYTES_PER_PIXEL] {
        [self.b, self.g, self.r, self.a]
    }

    /// Value of one colour channel.
    #[inline]
    pub const fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }
}
