use clap::{Args, Subcommand};
use std::path::PathBuf;

use tracing::warn;
use tsstego::cipher::CipherConfig;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod capacity;
pub mod decode;
pub mod encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Hide a file inside a carrier image.
    Encode(EncodeArgs),
    /// Recover a hidden file from an encoded image.
    Decode(DecodeArgs),
    /// Report how many payload bytes an image can hold.
    Capacity(CapacityArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Capacity(args) => capacity::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// XOR bits into the carrier instead of overwriting them. Decoding then
    /// needs the unmodified carrier image as a reference.
    #[arg(long)]
    pub xor: bool,
    /// Embed the payload without encrypting it.
    #[arg(long)]
    pub plain: bool,
    /// File to hide.
    pub payload: PathBuf,
    /// Carrier image (PNG or BMP). Not modified.
    pub carrier: PathBuf,
    /// Encoded image to write (always PNG).
    pub output: PathBuf,
    /// Encryption password, at most 16 bytes. A built-in key is used when omitted.
    #[arg(env = "TSSTEGO_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Decode XOR-mode data against this unmodified carrier image.
    #[arg(long, value_name = "REFERENCE_IMAGE")]
    pub xor: Option<PathBuf>,
    /// The payload was embedded without encryption.
    #[arg(long)]
    pub plain: bool,
    /// Encoded image to read.
    pub image: PathBuf,
    /// File to write the recovered payload to.
    pub output: PathBuf,
    /// Decryption password. Must match the one used to encode.
    #[arg(env = "TSSTEGO_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Image to inspect.
    pub image: PathBuf,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Resolve the cipher setting shared by encode and decode.
pub fn cipher_config(plain: bool, password: Option<String>) -> Option<CipherConfig> {
    if plain {
        if password.is_some() {
            warn!("--plain given, ignoring password");
        }
        return None;
    }

    match password {
        Some(password) => Some(CipherConfig::with_key(password)),
        None => {
            warn!("no password given, using the built-in default key");
            Some(CipherConfig::default())
        }
    }
}
