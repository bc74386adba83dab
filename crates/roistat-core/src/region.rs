//! Region - rectangular pixel selection
//!
//! A [`Region`] is an integer rectangle in image pixel coordinates. It is
//! built freely (negative or oversized values are representable) and checked
//! against a buffer with [`Region::validate`] on every extraction. The core
//! never clamps on the caller's behalf; [`Region::clamp_to`] is provided for
//! the selection layer that sits in front of it.

use crate::error::{Error, Result};

/// A rectangle region in pixel coordinates
///
/// This is a simple Copy type since it's small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Region {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Region {
    /// Create a region without validation
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Region covering a whole `width` x `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            w: i32::try_from(width).unwrap_or(i32::MAX),
            h: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    /// Create a region from two corner points
    ///
    /// Extents wider than `i32::MAX` saturate.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let span = |a: i32, b: i32| i32::try_from(a.abs_diff(b)).unwrap_or(i32::MAX);
        Self {
            x: x1.min(x2),
            y: y1.min(y2),
            w: span(x1, x2),
            h: span(y1, y2),
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    /// Number of pixels covered (zero for degenerate regions)
    #[inline]
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.w as u64 * self.h as u64
        }
    }

    /// Check if the region covers no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a point is inside the region
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && (x as i64) < self.right() && y >= self.y && (y as i64) < self.bottom()
    }

    /// Check that the region lies fully inside a `width` x `height` buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRegion`] if width or height is not positive. This
    ///   is checked first.
    /// - [`Error::OutOfBounds`] if the origin is negative or the far edge
    ///   passes the buffer edge.
    pub fn validate(&self, width: u32, height: u32) -> Result<()> {
        if self.w <= 0 || self.h <= 0 {
            return Err(Error::InvalidRegion {
                width: self.w,
                height: self.h,
            });
        }
        if self.x < 0
            || self.y < 0
            || self.right() > width as i64
            || self.bottom() > height as i64
        {
            return Err(Error::OutOfBounds {
                region: *self,
                width,
                height,
            });
        }
        Ok(())
    }

    /// Clamp the region so it fits a `width` x `height` image.
    ///
    /// The origin is pulled into `[0, dim - 1]`, each side is raised to at
    /// least one pixel and then shrunk so the far edge stays inside the
    /// image. The result always satisfies [`Region::validate`].
    ///
    /// Returns `None` for a zero-sized image, which has no valid region.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Region> {
        if width == 0 || height == 0 {
            return None;
        }
        let (x, w) = clamp_axis(self.x, self.w, width);
        let (y, h) = clamp_axis(self.y, self.h, height);
        Some(Region { x, y, w, h })
    }
}

fn clamp_axis(start: i32, len: i32, dim: u32) -> (i32, i32) {
    let dim = dim.min(i32::MAX as u32) as i32;
    let start = start.clamp(0, dim - 1);
    let len = len.max(1).min(dim - start);
    (start, len)
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X={}, Y={}, W={}, H={}", self.x, self.y, self.w, self.h)
    }
}
