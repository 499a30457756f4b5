use bytes::{BufMut, Bytes, BytesMut};

use crate::channel::CHANNELS_PER_PIXEL;
use crate::error::{CodecError, Result};
use crate::packer::pack;
use crate::unpacker::unpack;

/// Frame header: payload length (4 bytes, little-endian).
pub const HEADER_SIZE: usize = 4;

/// Largest payload the 32-bit length prefix can describe.
pub const MAX_PAYLOAD: usize = u32::MAX as usize;

/// How packed bits are combined with the carrier's channel values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Replace the data-carrying low bits; the high bits are preserved.
    #[default]
    Overwrite,
    /// XOR the bits into the low bits. Decoding needs the original carrier.
    Xor,
}

impl Mode {
    /// Combine right-aligned `bits` into `channel` under `mask`.
    pub fn apply(self, channel: u8, bits: u8, mask: u8) -> u8 {
        match self {
            Mode::Overwrite => (channel & !mask) | (bits & mask),
            Mode::Xor => channel ^ (bits & mask),
        }
    }

    pub fn is_xor(self) -> bool {
        matches!(self, Mode::Xor)
    }
}

/// Encode a payload length as the frame's little-endian prefix.
pub fn length_prefix(len: usize) -> Result<[u8; HEADER_SIZE]> {
    let len = u32::try_from(len).map_err(|_| CodecError::PayloadTooLarge {
        size: len,
        max: MAX_PAYLOAD,
    })?;
    Ok(len.to_le_bytes())
}

/// Frame a payload into `dst`.
///
/// Wire format:
/// ```text
/// ┌─────────────┬──────────────────┐
/// │ Length      │ Payload          │
/// │ (4B LE u32) │ (Length bytes)   │
/// └─────────────┴──────────────────┘
/// ```
///
/// There is no terminator; the prefix alone delimits the payload.
pub fn frame(payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    let prefix = length_prefix(payload.len())?;
    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_slice(&prefix);
    dst.put_slice(payload);
    Ok(())
}

/// Frame a payload into a fresh buffer.
pub fn frame_bytes(payload: &[u8]) -> Result<Bytes> {
    let mut dst = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    frame(payload, &mut dst)?;
    Ok(dst.freeze())
}

/// Reinterpret a frame header as the payload length. Any 4 bytes are valid.
pub fn parse_length(header: [u8; HEADER_SIZE]) -> u32 {
    u32::from_le_bytes(header)
}

/// Carrier channels needed to hold the frame of a `payload_len`-byte payload.
pub fn required_channels(payload_len: usize) -> usize {
    HEADER_SIZE
        .saturating_add(payload_len)
        .saturating_mul(CHANNELS_PER_PIXEL)
}

/// Largest payload a carrier of `carrier_len` channels can hold.
pub fn capacity(carrier_len: usize) -> usize {
    (carrier_len / CHANNELS_PER_PIXEL)
        .saturating_sub(HEADER_SIZE)
        .min(MAX_PAYLOAD)
}

/// Frame `payload` and pack it into `carrier`. Returns channels consumed.
pub fn embed(payload: &[u8], carrier: &mut [u8], mode: Mode) -> Result<usize> {
    let required = required_channels(payload.len());
    if carrier.len() < required {
        return Err(CodecError::Capacity {
            required,
            available: carrier.len(),
        });
    }
    let framed = frame_bytes(payload)?;
    pack(&framed, carrier, mode)
}

/// Recover the payload from a packed carrier.
///
/// Pass the original carrier as `reference` to decode XOR-mode data. The
/// reference is not validated beyond its length; a wrong one yields garbage.
pub fn extract(carrier: &[u8], reference: Option<&[u8]>) -> Result<Bytes> {
    unpack(carrier, reference)
}
