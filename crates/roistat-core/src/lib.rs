//! roistat Core - region colour statistics
//!
//! This crate provides the pure, I/O-free part of roistat:
//!
//! - [`PixelBuffer`] - Borrowed view over BGRA pixel data with a row stride
//! - [`Region`] - Rectangular pixel selection
//! - [`extract`] / [`ChannelSamples`] - Per-channel sample extraction
//! - [`compute_stats`] / [`RgbStats`] - Mean, population variance,
//!   standard deviation and median per channel
//! - [`selection`] - Mapping a display-space drag to a pixel [`Region`]
//!
//! Every function is a synchronous computation over caller-owned input and
//! returns freshly allocated output, so calls may run concurrently from any
//! number of threads.
//!
//! # Example
//!
//! ```
//! use roistat_core::{PixelBuffer, Region, region_stats};
//!
//! // 2x2 opaque image, every pixel rgb(30, 60, 90)
//! let data = [90u8, 60, 30, 255].repeat(4);
//! let buf = PixelBuffer::packed(&data, 2, 2).unwrap();
//! let stats = region_stats(&buf, Region::new(0, 0, 2, 2)).unwrap();
//! assert_eq!(stats.red.mean, 30.0);
//! assert_eq!(stats.blue.median, 90.0);
//! assert_eq!(stats.green.variance, 0.0);
//! ```

pub mod buffer;
pub mod color;
pub mod error;
pub mod extract;
pub mod region;
pub mod selection;
pub mod stats;

pub use buffer::PixelBuffer;
pub use color::{Bgra, Channel};
pub use error::{Error, Result};
pub use extract::{ChannelSamples, extract};
pub use region::Region;
pub use selection::{DisplayRect, Point, RubberBand, ViewTransform, region_from_selection};
pub use stats::{ChannelStats, Moments, RgbStats, StatsReport, compute_stats, region_stats};
