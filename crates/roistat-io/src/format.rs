//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Bmp,
    Png,
    Jpeg,
    Gif,
    /// Scalable vector graphics; needs a vector renderer to decode
    Svg,
    Unknown,
}

impl ImageFormat {
    /// Usual file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Bmp => "bmp",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Svg => "svg",
            ImageFormat::Unknown => "",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "bmp" => ImageFormat::Bmp,
            "png" => ImageFormat::Png,
            "jpg" | "jpeg" => ImageFormat::Jpeg,
            "gif" => ImageFormat::Gif,
            "svg" => ImageFormat::Svg,
            _ => ImageFormat::Unknown,
        }
    }
}

/// Magic numbers for image format detection
mod magic {
    /// BMP: "BM"
    pub const BMP: &[u8] = b"BM";

    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// GIF87a
    pub const GIF87A: &[u8] = b"GIF87a";

    /// GIF89a
    pub const GIF89A: &[u8] = b"GIF89a";

    /// UTF-8 byte order mark
    pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

    /// SVG documents start with an XML declaration or the root element
    pub const XML_DECL: &[u8] = b"<?xml";
    pub const SVG_ROOT: &[u8] = b"<svg";
}

/// Number of header bytes read by [`detect_format`]
const HEADER_LEN: usize = 64;

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let file = File::open(path).map_err(IoError::Io)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64)
        .read_to_end(&mut header)
        .map_err(IoError::Io)?;
    detect_format_from_bytes(&header)
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.starts_with(magic::BMP) {
        return Ok(ImageFormat::Bmp);
    }
    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }
    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }
    if data.starts_with(magic::GIF87A) || data.starts_with(magic::GIF89A) {
        return Ok(ImageFormat::Gif);
    }

    // SVG is text: skip a BOM and leading whitespace
    let text = data.strip_prefix(magic::UTF8_BOM).unwrap_or(data);
    let start = text
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(text.len());
    let text = &text[start..];
    if text.starts_with(magic::XML_DECL) || text.starts_with(magic::SVG_ROOT) {
        return Ok(ImageFormat::Svg);
    }

    Ok(ImageFormat::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_raster_formats() {
        assert_eq!(
            detect_format_from_bytes(b"BM\0\0\0\0").unwrap(),
            ImageFormat::Bmp
        );
        assert_eq!(
            detect_format_from_bytes(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            detect_format_from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            detect_format_from_bytes(b"GIF89a...").unwrap(),
            ImageFormat::Gif
        );
    }

    #[test]
    fn test_detect_svg() {
        assert_eq!(
            detect_format_from_bytes(b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap(),
            ImageFormat::Svg
        );
        assert_eq!(
            detect_format_from_bytes(b"\xEF\xBB\xBF  \n<?xml version=\"1.0\"?>").unwrap(),
            ImageFormat::Svg
        );
    }

    #[test]
    fn test_detect_unknown_and_short() {
        assert_eq!(
            detect_format_from_bytes(b"hello world").unwrap(),
            ImageFormat::Unknown
        );
        assert!(detect_format_from_bytes(b"B").is_err());
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(ImageFormat::from_extension("JPEG"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("svg"), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_extension("tif"), ImageFormat::Unknown);
    }
}
