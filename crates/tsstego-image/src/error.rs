use std::path::PathBuf;

/// Errors that can occur while reading or writing carrier images.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The image file could not be opened or read.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file contents are not a supported image.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The image could not be written.
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The pixel buffer does not match the stated dimensions.
    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    Dimensions { width: u32, height: u32, len: usize },

    /// An in-memory image could not be decoded or encoded.
    #[error("image format error: {0}")]
    Format(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ImageError>;
