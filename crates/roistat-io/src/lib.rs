//! roistat-io - Image decoding for roistat
//!
//! Decodes raster image files into the normalised BGRA layout that
//! [`roistat_core`] reads. Formats are enabled with cargo features:
//!
//! | feature      | format |
//! |--------------|--------|
//! | `bmp`        | Windows Bitmap (uncompressed) |
//! | `png-format` | PNG |
//! | `jpeg`       | baseline/progressive JPEG |
//! | `gif-format` | GIF (first frame) |
//! | `svg`        | SVG, rasterised with resvg |
//!
//! Any other renderer implementing [`ImageDecoder`] can be passed to
//! [`read_image_with`].

pub mod decoder;
mod error;
pub mod format;
mod image;

#[cfg(feature = "bmp")]
pub mod bmp;
#[cfg(feature = "gif-format")]
pub mod gif;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "svg")]
pub mod svg;

pub use decoder::{ImageDecoder, builtin_decoder};
pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use image::DecodedImage;

use std::path::Path;

/// Read an image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<DecodedImage> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "read image file");
    read_image_mem(&data)
}

/// Decode an image held in memory, choosing the decoder by magic number.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for unknown data or a format whose cargo
/// feature is disabled; otherwise whatever the decoder reports.
pub fn read_image_mem(data: &[u8]) -> IoResult<DecodedImage> {
    let format = detect_format_from_bytes(data)?;
    match builtin_decoder(format) {
        Some(decoder) => read_image_with(decoder, data),
        None => Err(match format {
            ImageFormat::Svg => IoError::UnsupportedFormat(
                "SVG support not enabled; pass a renderer to read_image_with".to_string(),
            ),
            ImageFormat::Unknown => {
                IoError::UnsupportedFormat("unrecognised image data".to_string())
            }
            other => IoError::UnsupportedFormat(format!("{:?} support not enabled", other)),
        }),
    }
}

/// Decode with a specific decoder, e.g. an application-supplied renderer.
pub fn read_image_with(decoder: &dyn ImageDecoder, data: &[u8]) -> IoResult<DecodedImage> {
    let image = decoder.decode(data)?;
    tracing::debug!(
        format = ?decoder.format(),
        width = image.width(),
        height = image.height(),
        "decoded image"
    );
    Ok(image)
}
