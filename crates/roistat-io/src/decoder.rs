//! Pluggable decoder capability
//!
//! Anything that turns encoded bytes into a normalised [`DecodedImage`]
//! can feed the statistics core. The formats compiled into this crate
//! implement [`ImageDecoder`]; another renderer can be supplied by the
//! application through [`crate::read_image_with`].

use crate::format::ImageFormat;
use crate::image::DecodedImage;
use crate::IoResult;

/// Decodes one image format into BGRA pixels.
pub trait ImageDecoder {
    /// The format this decoder handles
    fn format(&self) -> ImageFormat;

    /// Decode a complete encoded image.
    fn decode(&self, data: &[u8]) -> IoResult<DecodedImage>;
}

/// The decoder compiled in for `format`, if any.
pub fn builtin_decoder(format: ImageFormat) -> Option<&'static dyn ImageDecoder> {
    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => Some(&crate::bmp::BmpDecoder),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => Some(&crate::png::PngDecoder),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => Some(&crate::jpeg::JpegDecoder),
        #[cfg(feature = "gif-format")]
        ImageFormat::Gif => Some(&crate::gif::GifDecoder),
        #[cfg(feature = "svg")]
        ImageFormat::Svg => Some(&crate::svg::SvgDecoder),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_decoder_for_unknown() {
        assert!(builtin_decoder(ImageFormat::Unknown).is_none());
    }

    #[cfg(feature = "svg")]
    #[test]
    fn test_builtin_svg_renderer() {
        let dec = builtin_decoder(ImageFormat::Svg).unwrap();
        assert_eq!(dec.format(), ImageFormat::Svg);
    }

    #[cfg(feature = "png-format")]
    #[test]
    fn test_builtin_reports_its_format() {
        let dec = builtin_decoder(ImageFormat::Png).unwrap();
        assert_eq!(dec.format(), ImageFormat::Png);
    }
}
