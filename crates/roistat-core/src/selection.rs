//! Pointer selection mapping
//!
//! Turns a rubber-band drag made in display coordinates into a pixel
//! [`Region`]. Nothing here knows about a windowing toolkit: callers feed
//! press/move/release positions to a [`RubberBand`] and map the finished
//! rectangle with [`region_from_selection`].

use crate::error::{Error, Result};
use crate::region::Region;

/// A position in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl DisplayRect {
    /// Rectangle spanned by two corner points, in either order.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: (a.x - b.x).abs(),
            h: (a.y - b.y).abs(),
        }
    }
}

/// Mapping between display and image pixel coordinates.
///
/// A pixel at `(px, py)` is drawn at `(px * scale + offset_x,
/// py * scale + offset_y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    /// Image drawn unscaled at the display origin.
    pub const fn identity() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Create a transform for a given zoom and pan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `scale` is not a positive
    /// finite number or an offset is not finite.
    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "view scale must be positive and finite, got {scale}"
            )));
        }
        if !offset_x.is_finite() || !offset_y.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "view offset must be finite, got ({offset_x}, {offset_y})"
            )));
        }
        Ok(Self {
            scale,
            offset_x,
            offset_y,
        })
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Display position to (fractional) pixel position.
    pub fn to_pixel(&self, p: Point) -> Point {
        Point {
            x: (p.x - self.offset_x) / self.scale,
            y: (p.y - self.offset_y) / self.scale,
        }
    }

    /// Display rectangle to (fractional) pixel rectangle.
    pub fn rect_to_pixel(&self, r: DisplayRect) -> DisplayRect {
        let origin = self.to_pixel(Point::new(r.x, r.y));
        DisplayRect {
            x: origin.x,
            y: origin.y,
            w: r.w / self.scale,
            h: r.h / self.scale,
        }
    }
}

/// Map a finished display selection to a pixel region inside the image.
///
/// Origin and size are floored, then the region is clamped with
/// [`Region::clamp_to`], so a selection that only grazes the image still
/// yields at least one pixel.
///
/// Returns `None` for a zero-sized image.
pub fn region_from_selection(
    rect: DisplayRect,
    view: &ViewTransform,
    image_width: u32,
    image_height: u32,
) -> Option<Region> {
    let px = view.rect_to_pixel(rect);
    // float-to-int casts saturate and map NaN to 0
    let region = Region::new(
        px.x.floor() as i32,
        px.y.floor() as i32,
        px.w.floor() as i32,
        px.h.floor() as i32,
    );
    region.clamp_to(image_width, image_height)
}

/// Press/drag/release tracker for a rubber-band selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubberBand {
    anchor: Option<Point>,
    current: DisplayRect,
}

impl RubberBand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag at `p`. Any drag in progress is discarded.
    pub fn begin(&mut self, p: Point) -> DisplayRect {
        self.anchor = Some(p);
        self.current = DisplayRect::from_points(p, p);
        self.current
    }

    /// Move the free corner to `p`; `None` if no drag is active.
    pub fn update(&mut self, p: Point) -> Option<DisplayRect> {
        let anchor = self.anchor?;
        self.current = DisplayRect::from_points(anchor, p);
        Some(self.current)
    }

    /// End the drag at `p` and return the final rectangle.
    pub fn finish(&mut self, p: Point) -> Option<DisplayRect> {
        let rect = self.update(p)?;
        self.anchor = None;
        Some(rect)
    }

    /// Abandon the drag in progress.
    pub fn cancel(&mut self) {
        self.anchor = None;
        self.current = DisplayRect::default();
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Rectangle as of the last event.
    pub fn current(&self) -> DisplayRect {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_any_order() {
        let r = DisplayRect::from_points(Point::new(10.0, 2.0), Point::new(4.0, 8.0));
        assert_eq!(
            r,
            DisplayRect {
                x: 4.0,
                y: 2.0,
                w: 6.0,
                h: 6.0
            }
        );
    }

    #[test]
    fn test_view_transform_rejects_bad_scale() {
        assert!(ViewTransform::new(0.0, 0.0, 0.0).is_err());
        assert!(ViewTransform::new(-2.0, 0.0, 0.0).is_err());
        assert!(ViewTransform::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(ViewTransform::new(1.0, f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_to_pixel_with_zoom_and_pan() {
        let view = ViewTransform::new(2.0, 10.0, 20.0).unwrap();
        assert_eq!(view.to_pixel(Point::new(30.0, 40.0)), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_region_identity_floors() {
        let rect = DisplayRect {
            x: 2.7,
            y: 3.2,
            w: 4.9,
            h: 1.1,
        };
        let region = region_from_selection(rect, &ViewTransform::identity(), 100, 100).unwrap();
        assert_eq!(region, Region::new(2, 3, 4, 1));
    }

    #[test]
    fn test_region_zoomed() {
        let view = ViewTransform::new(4.0, 0.0, 0.0).unwrap();
        let rect = DisplayRect {
            x: 8.0,
            y: 4.0,
            w: 16.0,
            h: 8.0,
        };
        let region = region_from_selection(rect, &view, 100, 100).unwrap();
        assert_eq!(region, Region::new(2, 1, 4, 2));
    }

    #[test]
    fn test_region_clamped_to_image() {
        let rect = DisplayRect {
            x: -5.0,
            y: 90.0,
            w: 200.0,
            h: 50.0,
        };
        let region = region_from_selection(rect, &ViewTransform::identity(), 64, 100).unwrap();
        assert_eq!(region, Region::new(0, 90, 64, 10));
        assert!(region.validate(64, 100).is_ok());
    }

    #[test]
    fn test_click_without_drag_selects_one_pixel() {
        let mut band = RubberBand::new();
        band.begin(Point::new(5.5, 6.5));
        let rect = band.finish(Point::new(5.5, 6.5)).unwrap();
        let region = region_from_selection(rect, &ViewTransform::identity(), 10, 10).unwrap();
        assert_eq!(region, Region::new(5, 6, 1, 1));
    }

    #[test]
    fn test_rubber_band_lifecycle() {
        let mut band = RubberBand::new();
        assert!(!band.is_active());
        assert!(band.update(Point::new(1.0, 1.0)).is_none());

        band.begin(Point::new(10.0, 10.0));
        assert!(band.is_active());
        let r = band.update(Point::new(4.0, 12.0)).unwrap();
        assert_eq!((r.x, r.y, r.w, r.h), (4.0, 10.0, 6.0, 2.0));

        let done = band.finish(Point::new(14.0, 0.0)).unwrap();
        assert_eq!((done.x, done.y, done.w, done.h), (10.0, 0.0, 4.0, 10.0));
        assert!(!band.is_active());
        assert!(band.finish(Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_rubber_band_cancel() {
        let mut band = RubberBand::new();
        band.begin(Point::new(1.0, 1.0));
        band.cancel();
        assert!(!band.is_active());
        assert_eq!(band.current(), DisplayRect::default());
    }
}
