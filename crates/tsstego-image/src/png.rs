use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader, RgbaImage};
use tracing::{debug, warn};

use crate::error::{ImageError, Result};
use crate::raster::{Raster, RasterCodec};

/// Lossless carrier I/O backed by the `image` crate.
///
/// Decodes PNG and BMP input, converting any color type to RGBA8.
/// Always encodes PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl PngCodec {
    pub fn new() -> Self {
        Self
    }

    /// Decode an in-memory image.
    pub fn decode_bytes(&self, data: &[u8]) -> Result<Raster> {
        let img = image::load_from_memory(data)?;
        into_raster(img.to_rgba8())
    }

    /// Encode a raster as PNG bytes.
    pub fn encode_bytes(&self, raster: &Raster) -> Result<Vec<u8>> {
        let img = to_image(raster)?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }
}

impl RasterCodec for PngCodec {
    fn decode(&self, path: &Path) -> Result<Raster> {
        let open_error = |source: std::io::Error| ImageError::Open {
            path: path.to_path_buf(),
            source,
        };
        // Sniff the format from the file header so the extension doesn't matter.
        let img = ImageReader::open(path)
            .and_then(ImageReader::with_guessed_format)
            .map_err(open_error)?
            .decode()
            .map_err(|err| match err {
                image::ImageError::IoError(source) => open_error(source),
                source => ImageError::Decode {
                    path: path.to_path_buf(),
                    source,
                },
            })?;

        let raster = into_raster(img.to_rgba8())?;
        debug!(
            ?path,
            width = raster.width(),
            height = raster.height(),
            "decoded carrier image"
        );
        Ok(raster)
    }

    fn encode(&self, path: &Path, raster: &Raster) -> Result<()> {
        if !has_png_extension(path) {
            warn!(?path, "output is written as PNG regardless of its extension");
        }

        let img = to_image(raster)?;
        img.save_with_format(path, ImageFormat::Png)
            .map_err(|source| ImageError::Encode {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            ?path,
            width = raster.width(),
            height = raster.height(),
            "encoded carrier image"
        );
        Ok(())
    }
}

fn into_raster(img: RgbaImage) -> Result<Raster> {
    let (width, height) = img.dimensions();
    Raster::new(img.into_raw(), width, height)
}

fn to_image(raster: &Raster) -> Result<RgbaImage> {
    let (width, height) = (raster.width(), raster.height());
    RgbaImage::from_raw(width, height, raster.pixels().to_vec()).ok_or(ImageError::Dimensions {
        width,
        height,
        len: raster.pixels().len(),
    })
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}
