//! Payload encryption applied before framing and after unpacking.
//!
//! The codec treats ciphertext as an opaque payload. AES-128 in CFB-128 mode
//! keeps ciphertext the same length as plaintext, so nothing here needs
//! padding and the frame length prefix stays exact.
//!
//! The IV is fixed and a built-in default key is used when the caller supplies
//! none. This obscures payloads from casual inspection; it is not a security
//! boundary.

pub mod cipher;
pub mod config;
pub mod error;

pub use cipher::{Aes128Cfb, Cipher};
pub use config::{CipherConfig, DEFAULT_IV, DEFAULT_KEY, KEY_SIZE};
pub use error::{CipherError, Result};
