//! Raster image I/O for carrier buffers.
//!
//! Decodes an image file into a flat RGBA pixel buffer (4 bytes per pixel,
//! row-major) and encodes such a buffer back to disk. Output is always PNG:
//! any lossy format would destroy the low bits the codec writes.
//!
//! Everything above this crate works on [`Raster`] and never sees the file
//! format.

pub mod error;
pub mod png;
pub mod raster;

pub use error::{ImageError, Result};
pub use png::PngCodec;
pub use raster::{Raster, RasterCodec, BYTES_PER_PIXEL};
