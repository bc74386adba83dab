//! roistat - colour statistics over rectangular image regions
//!
//! Select a rectangle of a decoded image and get the mean, population
//! variance, standard deviation and median of its red, green and blue
//! channels.
//!
//! # Overview
//!
//! - [`io`] decodes BMP, PNG, JPEG and GIF files into BGRA pixels
//! - the core types ([`PixelBuffer`], [`Region`], [`RgbStats`]) are
//!   re-exported at the top level
//! - [`selection`] maps a display-space drag to a pixel region
//!
//! # Example
//!
//! ```
//! use roistat::{Region, region_stats};
//! use roistat::io::DecodedImage;
//!
//! let image = DecodedImage::from_rgb8(2, 1, &[10, 0, 0, 20, 0, 0]).unwrap();
//! let stats = region_stats(&image.as_buffer().unwrap(), Region::new(0, 0, 2, 1)).unwrap();
//! assert_eq!(stats.red.mean, 15.0);
//! assert_eq!(stats.red.median, 15.0);
//! assert_eq!(stats.red.variance, 25.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use roistat_core::*;

// Re-export the decoding crate as a module to avoid name conflicts
pub use roistat_io as io;
