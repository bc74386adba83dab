//! BMP image format support
//!
//! Reads uncompressed Windows Bitmap files: 1, 4 and 8-bit palette
//! images and 24/32-bit direct colour, stored bottom-up or top-down.

use crate::decoder::ImageDecoder;
use crate::format::ImageFormat;
use crate::image::DecodedImage;
use crate::{IoError, IoResult};
use std::io::{Cursor, Read};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// BI_RGB
const COMPRESSION_NONE: u32 = 0;
/// BI_BITFIELDS
const COMPRESSION_BITFIELDS: u32 = 3;

/// Largest image accepted, in pixels (1 GiB of BGRA)
const MAX_PIXELS: u64 = 1 << 28;

/// BMP decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct BmpDecoder;

impl ImageDecoder for BmpDecoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::Bmp
    }

    fn decode(&self, data: &[u8]) -> IoResult<DecodedImage> {
        read_bmp(Cursor::new(data))
    }
}

fn le_u16(b: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

fn le_u32(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

fn skip<R: Read>(reader: &mut R, n: usize) -> IoResult<()> {
    let copied = std::io::copy(&mut reader.take(n as u64), &mut std::io::sink())?;
    if copied < n as u64 {
        return Err(IoError::InvalidData("unexpected end of BMP".to_string()));
    }
    Ok(())
}

/// Read a BMP image
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<DecodedImage> {
    // Read file header (14 bytes)
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header).map_err(IoError::Io)?;

    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }
    let pixel_offset = le_u32(&file_header, 10) as usize;

    // Read info header (minimum 40 bytes)
    let mut info_header = [0u8; BMP_INFO_HEADER_SIZE as usize];
    reader.read_exact(&mut info_header).map_err(IoError::Io)?;

    let header_size = le_u32(&info_header, 0);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = le_u32(&info_header, 4) as i32;
    let height = le_u32(&info_header, 8) as i32;

    let planes = le_u16(&info_header, 12);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = le_u16(&info_header, 14);
    let compression = le_u32(&info_header, 16);
    let colors_used = le_u32(&info_header, 32) as usize;

    // Only uncompressed data; bitfields are accepted for 32-bit BGRA
    let bitfields = match (compression, bits_per_pixel) {
        (COMPRESSION_NONE, _) => false,
        (COMPRESSION_BITFIELDS, 32) => true,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported BMP compression: {}",
                compression
            )));
        }
    };
    if !matches!(bits_per_pixel, 1 | 4 | 8 | 24 | 32) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            bits_per_pixel
        )));
    }

    if width <= 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "invalid BMP dimensions: {}x{}",
            width, height
        )));
    }
    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();

    // Skip the rest of an extended info header
    skip(&mut reader, header_size as usize - BMP_INFO_HEADER_SIZE as usize)?;
    let mut consumed = BMP_FILE_HEADER_SIZE + header_size as usize;

    // Palette entries are B, G, R, reserved
    let palette = if bits_per_pixel <= 8 {
        let max_colors = 1usize << bits_per_pixel;
        let num_colors = if colors_used == 0 {
            max_colors
        } else {
            colors_used.min(max_colors)
        };
        let mut palette = vec![0u8; num_colors * 4];
        reader.read_exact(&mut palette).map_err(IoError::Io)?;
        consumed += palette.len();
        palette
    } else {
        Vec::new()
    };

    if pixel_offset > consumed {
        skip(&mut reader, pixel_offset - consumed)?;
    }

    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(IoError::InvalidData(format!(
            "BMP too large: {}x{}",
            width, height
        )));
    }

    // BMP rows are 4-byte aligned
    let row_stride = (width as usize)
        .checked_mul(bits_per_pixel as usize)
        .map(|bits| bits.div_ceil(32) * 4)
        .ok_or_else(|| IoError::InvalidData("BMP too large".to_string()))?;
    let out_stride = width as usize * 4;
    let mut row_buffer = vec![0u8; row_stride];

    // Rows are appended as they arrive so truncated data fails before
    // the whole image is allocated.
    let mut data = Vec::new();
    for _ in 0..height {
        reader.read_exact(&mut row_buffer).map_err(IoError::Io)?;
        data.reserve(out_stride);

        for x in 0..width as usize {
            let bgra = match bits_per_pixel {
                1 | 4 | 8 => {
                    let bpp = bits_per_pixel as usize;
                    let bit = x * bpp;
                    let shift = 8 - bpp - (bit % 8);
                    let index = (row_buffer[bit / 8] >> shift) as usize & ((1 << bpp) - 1);
                    let entry = palette.get(index * 4..index * 4 + 3).ok_or_else(|| {
                        IoError::InvalidData(format!("palette index {} out of range", index))
                    })?;
                    [entry[0], entry[1], entry[2], 255]
                }
                24 => {
                    let i = x * 3;
                    [row_buffer[i], row_buffer[i + 1], row_buffer[i + 2], 255]
                }
                _ => {
                    let i = x * 4;
                    let a = if bitfields { row_buffer[i + 3] } else { 255 };
                    [row_buffer[i], row_buffer[i + 1], row_buffer[i + 2], a]
                }
            };
            data.extend_from_slice(&bgra);
        }
    }

    if !top_down {
        data = data.rchunks_exact(out_stride).flatten().copied().collect();
    }

    DecodedImage::new(width, height, data)
}
