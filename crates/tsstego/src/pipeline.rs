//! File-to-file encode and decode pipelines.
//!
//! Encode: read payload, encrypt, frame and pack into the carrier, write PNG.
//! Decode: read image (and reference), unpack, decrypt, write payload.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use tsstego_cipher::{Aes128Cfb, Cipher, CipherConfig};
use tsstego_codec::{capacity as payload_capacity, embed, extract, Mode};
use tsstego_image::{Raster, RasterCodec};

use crate::error::{Result, StegoError};

/// Everything needed to hide one file in one carrier image.
#[derive(Debug, Clone)]
pub struct EncodeJob {
    /// File whose bytes are hidden.
    pub payload: PathBuf,
    /// Carrier image. Left untouched; in XOR mode it is the decode reference.
    pub carrier: PathBuf,
    /// Where the encoded image is written.
    pub output: PathBuf,
    /// How packed bits combine with the carrier.
    pub mode: Mode,
    /// Encrypt the payload first. `None` embeds it as is.
    pub cipher: Option<CipherConfig>,
}

/// Everything needed to recover one file from an encoded image.
#[derive(Debug, Clone)]
pub struct DecodeJob {
    /// Encoded image.
    pub image: PathBuf,
    /// Unmodified carrier, required for XOR-mode data.
    pub reference: Option<PathBuf>,
    /// Where the recovered payload is written.
    pub output: PathBuf,
    /// Decrypt the recovered payload. Must match the encode-side setting.
    pub cipher: Option<CipherConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeReport {
    pub payload_len: usize,
    pub channels_used: usize,
    pub capacity: usize,
    pub width: u32,
    pub height: u32,
    pub mode: Mode,
    pub encrypted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    pub payload_len: usize,
    pub xor: bool,
    pub encrypted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    pub pixels: usize,
    pub max_payload: usize,
}

/// Hide `payload` in `carrier` in place. Returns channels consumed.
pub fn conceal(
    payload: &[u8],
    carrier: &mut Raster,
    mode: Mode,
    cipher: Option<&CipherConfig>,
) -> Result<usize> {
    let body = match cipher {
        Some(config) => Aes128Cfb::new(config)?.encrypt(payload),
        None => payload.to_vec(),
    };
    Ok(embed(&body, carrier.pixels_mut(), mode)?)
}

/// Recover a payload hidden by [`conceal`].
///
/// Supply the original carrier as `reference` for XOR-mode data. A wrong
/// reference or key produces garbage, not an error.
pub fn reveal(
    image: &Raster,
    reference: Option<&Raster>,
    cipher: Option<&CipherConfig>,
) -> Result<Vec<u8>> {
    let body = extract(image.pixels(), reference.map(Raster::pixels))?;
    Ok(match cipher {
        Some(config) => Aes128Cfb::new(config)?.decrypt(&body),
        None => body.to_vec(),
    })
}

/// Run an encode job end to end.
pub fn encode<C: RasterCodec>(codec: &C, job: &EncodeJob) -> Result<EncodeReport> {
    let payload = read_payload(&job.payload)?;
    let mut raster = codec.decode(&job.carrier)?;
    let capacity = payload_capacity(raster.pixels().len());

    let channels_used = conceal(&payload, &mut raster, job.mode, job.cipher.as_ref())?;
    codec.encode(&job.output, &raster)?;

    info!(
        payload = ?job.payload,
        output = ?job.output,
        bytes = payload.len(),
        capacity,
        mode = ?job.mode,
        "payload encoded"
    );

    Ok(EncodeReport {
        payload_len: payload.len(),
        channels_used,
        capacity,
        width: raster.width(),
        height: raster.height(),
        mode: job.mode,
        encrypted: job.cipher.is_some(),
    })
}

/// Run a decode job end to end.
pub fn decode<C: RasterCodec>(codec: &C, job: &DecodeJob) -> Result<DecodeReport> {
    let image = codec.decode(&job.image)?;
    let reference = job
        .reference
        .as_deref()
        .map(|path| codec.decode(path))
        .transpose()?;

    if let Some(reference) = &reference {
        if (reference.width(), reference.height()) != (image.width(), image.height()) {
            warn!(
                image = ?job.image,
                reference = ?job.reference,
                "reference dimensions differ from the encoded image"
            );
        }
    }

    let payload = reveal(&image, reference.as_ref(), job.cipher.as_ref())?;
    std::fs::write(&job.output, &payload).map_err(|source| StegoError::WritePayload {
        path: job.output.clone(),
        source,
    })?;

    info!(
        image = ?job.image,
        output = ?job.output,
        bytes = payload.len(),
        "payload decoded"
    );

    Ok(DecodeReport {
        payload_len: payload.len(),
        xor: reference.is_some(),
        encrypted: job.cipher.is_some(),
    })
}

/// Report how much payload an image can carry.
pub fn capacity<C: RasterCodec>(codec: &C, path: &Path) -> Result<CapacityReport> {
    let raster = codec.decode(path)?;
    Ok(CapacityReport {
        width: raster.width(),
        height: raster.height(),
        pixels: raster.pixel_count(),
        max_payload: payload_capacity(raster.pixels().len()),
    })
}

fn read_payload(path: &Path) -> Result<Vec<u8>> {
    let payload = std::fs::read(path).map_err(|source| StegoError::ReadPayload {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(?path, len = payload.len(), "read payload file");
    Ok(payload)
}
