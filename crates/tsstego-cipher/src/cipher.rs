use aes::cipher::{AsyncStreamCipher, KeyIvInit};
use tracing::debug;

use crate::config::CipherConfig;
use crate::error::Result;

type Aes128CfbEnc = cfb_mode::Encryptor<aes::Aes128>;
type Aes128CfbDec = cfb_mode::Decryptor<aes::Aes128>;

/// A length-preserving payload cipher.
pub trait Cipher {
    /// Encrypt `plaintext`. The output has the same length as the input.
    fn encrypt(&self, plaintext: &[u8]) -> Vec<u8>;

    /// Decrypt `ciphertext`. The output has the same length as the input.
    ///
    /// A wrong key produces garbage rather than an error.
    fn decrypt(&self, ciphertext: &[u8]) -> Vec<u8>;
}

/// AES-128 in CFB-128 mode.
pub struct Aes128Cfb {
    key: [u8; 16],
    iv: [u8; 16],
}

impl Aes128Cfb {
    /// Build the cipher from a key config.
    pub fn new(config: &CipherConfig) -> Result<Self> {
        let key = config.key_bytes()?;
        debug!(default_key = config.is_default_key(), "initialized AES-128-CFB cipher");
        Ok(Self { key, iv: config.iv })
    }
}

impl Cipher for Aes128Cfb {
    fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut buf = plaintext.to_vec();
        Aes128CfbEnc::new(&self.key.into(), &self.iv.into()).encrypt(&mut buf);
        buf
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Vec<u8> {
        let mut buf = ciphertext.to_vec();
        Aes128CfbDec::new(&self.key.into(), &self.iv.into()).decrypt(&mut buf);
        buf
    }
}

impl std::fmt::Debug for Aes128Cfb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aes128Cfb").finish_non_exhaustive()
    }
}
