use tracing::warn;

use crate::error::{CipherError, Result};

/// AES-128 key size in bytes.
pub const KEY_SIZE: usize = 16;

/// Key used when the caller supplies no password. Publicly known.
pub const DEFAULT_KEY: &str = "tsStego-default!";

/// Fixed initialization vector shared by every encode and decode.
pub const DEFAULT_IV: [u8; KEY_SIZE] = *b"o3Fc3WlpA3BdiZbx";

/// Key material for the payload cipher.
#[derive(Clone, PartialEq, Eq)]
pub struct CipherConfig {
    /// Key string. Its UTF-8 bytes are cut or zero-padded to [`KEY_SIZE`].
    pub key: String,
    /// Initialization vector.
    pub iv: [u8; KEY_SIZE],
}

impl CipherConfig {
    /// Config with an explicit key and the fixed IV.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Returns true if this config uses the built-in default key.
    pub fn is_default_key(&self) -> bool {
        self.key == DEFAULT_KEY
    }

    /// Expand the key string into raw AES key bytes.
    ///
    /// Only the first [`KEY_SIZE`] bytes are used; shorter keys are
    /// zero-padded.
    pub fn key_bytes(&self) -> Result<[u8; KEY_SIZE]> {
        let raw = self.key.as_bytes();
        if raw.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        if raw.len() > KEY_SIZE {
            warn!(
                len = raw.len(),
                used = KEY_SIZE,
                "cipher key is longer than an AES-128 key, extra bytes ignored"
            );
        }

        let used = raw.len().min(KEY_SIZE);
        let mut key = [0u8; KEY_SIZE];
        key[..used].copy_from_slice(&raw[..used]);
        Ok(key)
    }
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            iv: DEFAULT_IV,
        }
    }
}

// Keep keys out of logs.
impl std::fmt::Debug for CipherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherConfig")
            .field("key", &"<redacted>")
            .field("default_key", &self.is_default_key())
            .finish()
    }
}
