use std::fmt;
use std::io;

use tsstego::cipher::CipherError;
use tsstego::codec::CodecError;
use tsstego::image::ImageError;
use tsstego::StegoError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn codec_error(context: &str, err: CodecError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

pub fn image_error(context: &str, err: ImageError) -> CliError {
    match err {
        ImageError::Open { path, source } => {
            io_error(&format!("{context}: {}", path.display()), source)
        }
        ImageError::Encode { .. } => CliError::new(FAILURE, format!("{context}: {err}")),
        other => CliError::new(DATA_INVALID, format!("{context}: {other}")),
    }
}

pub fn cipher_error(context: &str, err: CipherError) -> CliError {
    CliError::new(USAGE, format!("{context}: {err}"))
}

pub fn stego_error(context: &str, err: StegoError) -> CliError {
    match err {
        StegoError::ReadPayload { path, source } | StegoError::WritePayload { path, source } => {
            io_error(&format!("{context}: {}", path.display()), source)
        }
        StegoError::Codec(err) => codec_error(context, err),
        StegoError::Image(err) => image_error(context, err),
        StegoError::Cipher(err) => cipher_error(context, err),
    }
}
