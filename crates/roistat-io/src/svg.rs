//! SVG rasterisation
//!
//! Renders the document at its intrinsic size onto a transparent canvas.
//! A document without a usable size is drawn at 800x600.

use crate::decoder::ImageDecoder;
use crate::format::ImageFormat;
use crate::image::DecodedImage;
use crate::{IoError, IoResult};
use resvg::{tiny_skia, usvg};

/// Canvas size used when the document has no usable size
pub const FALLBACK_SIZE: (u32, u32) = (800, 600);

/// SVG renderer backed by resvg
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgDecoder;

impl ImageDecoder for SvgDecoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::Svg
    }

    fn decode(&self, data: &[u8]) -> IoResult<DecodedImage> {
        read_svg(data)
    }
}

/// Pixel size for a document of `width` x `height` user units.
///
/// Fractional sizes are truncated; each side is at least 1.
fn canvas_size(width: f32, height: f32) -> (u32, u32) {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return FALLBACK_SIZE;
    }
    let side = |v: f32| (v as u32).max(1);
    (side(width), side(height))
}

/// Render an SVG document held in memory.
pub fn read_svg(data: &[u8]) -> IoResult<DecodedImage> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &options)
        .map_err(|e| IoError::DecodeError(format!("SVG parse error: {}", e)))?;

    let size = tree.size();
    let (width, height) = canvas_size(size.width(), size.height());

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        IoError::InvalidData(format!("SVG canvas too large: {}x{}", width, height))
    })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied RGBA
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.blue(), c.green(), c.red(), c.alpha()]
        })
        .collect();
    DecodedImage::new(width, height, data)
}
