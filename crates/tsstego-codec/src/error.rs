/// Errors that can occur while packing or unpacking a frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The carrier has fewer channels than the frame needs.
    #[error("carrier too small ({available} channels, frame needs {required})")]
    Capacity { required: usize, available: usize },

    /// The XOR reference does not cover the channels the frame occupies.
    #[error("reference carrier too small ({available} channels, need {required})")]
    ReferenceTooSmall { required: usize, available: usize },

    /// The carrier ran out before the declared frame length was recovered.
    #[error("carrier truncated (recovered {recovered} of {expected} frame bytes)")]
    TruncatedCarrier { expected: usize, recovered: usize },

    /// The payload does not fit the 32-bit length prefix.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
