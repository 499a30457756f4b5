use std::path::PathBuf;

/// Errors that can occur in an encode or decode pipeline.
#[derive(Debug, thiserror::Error)]
pub enum StegoError {
    /// The payload file could not be read.
    #[error("failed to read payload {}: {source}", path.display())]
    ReadPayload {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The recovered payload could not be written.
    #[error("failed to write payload {}: {source}", path.display())]
    WritePayload {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Framing or bit packing failed.
    #[error("codec error: {0}")]
    Codec(#[from] tsstego_codec::CodecError),

    /// A carrier image could not be read or written.
    #[error("image error: {0}")]
    Image(#[from] tsstego_image::ImageError),

    /// The cipher could not be set up.
    #[error("cipher error: {0}")]
    Cipher(#[from] tsstego_cipher::CipherError),
}

pub type Result<T> = std::result::Result<T, StegoError>;
