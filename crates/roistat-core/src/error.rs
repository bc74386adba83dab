//! Error types for roistat-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Every variant is a deterministic precondition violation: the core does
//! no I/O, so nothing here is transient or worth retrying.

use crate::region::Region;
use thiserror::Error;

/// roistat-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Region width or height is zero or negative
    #[error("invalid region: width and height must be positive, got {width}x{height}")]
    InvalidRegion { width: i32, height: i32 },

    /// Region extends beyond the buffer
    #[error(
        "region ({}, {}, {}x{}) out of bounds for {}x{} buffer",
        .region.x, .region.y, .region.w, .region.h, .width, .height
    )]
    OutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },

    /// Buffer has a zero dimension
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Row stride shorter than one row of pixels
    #[error("stride {stride} is smaller than the minimum row length {min}")]
    InvalidStride { stride: usize, min: usize },

    /// Pixel data shorter than the declared geometry requires
    #[error("pixel data too small: {len} bytes, need at least {required}")]
    BufferTooSmall { len: usize, required: usize },

    /// Per-channel sample sequences differ in length
    #[error("channel length mismatch: red={red}, green={green}, blue={blue}")]
    ChannelLengthMismatch {
        red: usize,
        green: usize,
        blue: usize,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for roistat-core operations
pub type Result<T> = std::result::Result<T, Error>;
