//! Hide files in the low bits of PNG images.
//!
//! tsstego frames a payload with a 4-byte length prefix, optionally encrypts
//! it, and packs it into the red, green and blue low bits of an RGBA carrier.
//!
//! # Crate Structure
//!
//! - [`codec`]: Framing and bit packing (the core)
//! - [`image`]: Carrier image decode/encode
//! - [`cipher`]: Payload encryption
//! - [`encode`], [`decode`], [`capacity`]: File-to-file pipelines

pub mod error;
pub mod pipeline;

pub use error::{Result, StegoError};
pub use pipeline::{
    capacity, conceal, decode, encode, reveal, CapacityReport, DecodeJob, DecodeReport, EncodeJob,
    EncodeReport,
};

/// Re-export codec types.
pub mod codec {
    pub use tsstego_codec::*;
}

/// Re-export image types.
pub mod image {
    pub use tsstego_image::*;
}

/// Re-export cipher types.
pub mod cipher {
    pub use tsstego_cipher::*;
}
