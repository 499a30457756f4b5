use tracing::debug;

use crate::channel::{split, BLUE, BLUE_MASK, CHANNELS_PER_PIXEL, GREEN, GREEN_MASK, RED, RED_MASK};
use crate::codec::Mode;
use crate::error::{CodecError, Result};

/// Writes frame bytes into a carrier, one byte per pixel.
///
/// Bytes land in consecutive pixels starting at the first. Alpha is skipped
/// but still consumed, so each byte costs four channels.
pub struct Packer<'a> {
    carrier: &'a mut [u8],
    mode: Mode,
    pixel: usize,
}

impl<'a> Packer<'a> {
    /// Create a packer positioned at the first pixel of `carrier`.
    pub fn new(carrier: &'a mut [u8], mode: Mode) -> Self {
        Self {
            carrier,
            mode,
            pixel: 0,
        }
    }

    /// Pack `bytes` at the current position.
    ///
    /// Capacity is checked before anything is written: on error the carrier is
    /// left exactly as it was.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        let required = self
            .pixel
            .saturating_add(bytes.len())
            .saturating_mul(CHANNELS_PER_PIXEL);
        if required > self.carrier.len() {
            return Err(CodecError::Capacity {
                required,
                available: self.carrier.len(),
            });
        }

        for &byte in bytes {
            self.write_byte(byte);
        }
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) {
        let base = self.pixel * CHANNELS_PER_PIXEL;
        let [red, green, blue] = split(byte);
        let px = &mut self.carrier[base..base + CHANNELS_PER_PIXEL];

        px[RED] = self.mode.apply(px[RED], red, RED_MASK);
        px[GREEN] = self.mode.apply(px[GREEN], green, GREEN_MASK);
        px[BLUE] = self.mode.apply(px[BLUE], blue, BLUE_MASK);

        self.pixel += 1;
    }

    /// Bytes that still fit after the current position.
    pub fn remaining(&self) -> usize {
        (self.carrier.len() / CHANNELS_PER_PIXEL).saturating_sub(self.pixel)
    }

    /// Channels consumed so far.
    pub fn position(&self) -> usize {
        self.pixel * CHANNELS_PER_PIXEL
    }

    /// The packing mode in use.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Consume the packer and return the carrier.
    pub fn into_inner(self) -> &'a mut [u8] {
        self.carrier
    }
}

/// Pack an already framed byte sequence into `carrier` in place.
///
/// Returns the number of channels consumed (`4 * frame.len()`).
pub fn pack(frame: &[u8], carrier: &mut [u8], mode: Mode) -> Result<usize> {
    let mut packer = Packer::new(carrier, mode);
    packer.write_all(frame)?;
    debug!(
        frame_len = frame.len(),
        channels = packer.position(),
        ?mode,
        "packed frame into carrier"
    );
    Ok(packer.position())
}
