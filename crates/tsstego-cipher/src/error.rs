/// Errors that can occur while preparing the payload cipher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// The key string is empty.
    #[error("cipher key must not be empty")]
    EmptyKey,
}

pub type Result<T> = std::result::Result<T, CipherError>;
