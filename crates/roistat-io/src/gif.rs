//! GIF image format support
//!
//! Only the first frame is decoded. It is composed onto a transparent
//! canvas the size of the logical screen.

use crate::decoder::ImageDecoder;
use crate::format::ImageFormat;
use crate::image::DecodedImage;
use crate::{IoError, IoResult};
use gif::{ColorOutput, DecodeOptions};
use std::io::Read;

/// GIF decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct GifDecoder;

impl ImageDecoder for GifDecoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::Gif
    }

    fn decode(&self, data: &[u8]) -> IoResult<DecodedImage> {
        read_gif(data)
    }
}

/// Read the first frame of a GIF image
pub fn read_gif<R: Read>(reader: R) -> IoResult<DecodedImage> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::RGBA);

    let mut decoder = options
        .read_info(reader)
        .map_err(|e| IoError::DecodeError(format!("GIF decode error: {}", e)))?;

    let screen_w = decoder.width() as usize;
    let screen_h = decoder.height() as usize;

    let frame = decoder
        .read_next_frame()
        .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
        .ok_or_else(|| IoError::InvalidData("no frames in GIF".to_string()))?;

    let (left, top) = (frame.left as usize, frame.top as usize);
    let (fw, fh) = (frame.width as usize, frame.height as usize);
    if frame.buffer.len() < fw * fh * 4 {
        return Err(IoError::InvalidData("truncated GIF frame".to_string()));
    }

    let mut canvas = vec![0u8; screen_w * screen_h * 4];
    // Parts of the frame outside the logical screen are dropped
    for row in 0..fh.min(screen_h.saturating_sub(top)) {
        let cols = fw.min(screen_w.saturating_sub(left));
        let src = &frame.buffer[row * fw * 4..(row * fw + cols) * 4];
        let dst_start = ((top + row) * screen_w + left) * 4;
        canvas[dst_start..dst_start + cols * 4].copy_from_slice(src);
    }

    DecodedImage::from_rgba8(screen_w as u32, screen_h as u32, &canvas)
}
