use std::path::Path;

use crate::error::{ImageError, Result};

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A decoded image: flat RGBA channel values, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Raster {
    /// Wrap a pixel buffer, checking it holds exactly `width * height` pixels.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = (width as u64) * (height as u64) * (BYTES_PER_PIXEL as u64);
        if pixels.len() as u64 != expected {
            return Err(ImageError::Dimensions {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / BYTES_PER_PIXEL
    }

    /// Borrow the RGBA channel values.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutably borrow the RGBA channel values.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the raster and return its channel values.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.pixels.len())
            .finish()
    }
}

/// Reads and writes carrier images on disk.
pub trait RasterCodec {
    /// Decode the image at `path` into an RGBA raster.
    fn decode(&self, path: &Path) -> Result<Raster>;

    /// Encode `raster` to `path`, replacing any existing file.
    fn encode(&self, path: &Path, raster: &Raster) -> Result<()>;
}
