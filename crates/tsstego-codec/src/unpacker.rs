use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::channel::{join, BLUE, CHANNELS_PER_PIXEL, GREEN, RED};
use crate::codec::{parse_length, HEADER_SIZE};
use crate::error::{CodecError, Result};

/// Reads frame bytes back out of a packed carrier, one byte per pixel.
///
/// With a reference, every channel is XORed against the reference channel at
/// the same index before its bits are taken. The reference must be the
/// carrier as it was before XOR packing; any other buffer decodes to garbage.
pub struct Unpacker<'a> {
    carrier: &'a [u8],
    reference: Option<&'a [u8]>,
    pixel: usize,
}

impl<'a> Unpacker<'a> {
    /// Create an unpacker for overwrite-mode data.
    pub fn new(carrier: &'a [u8]) -> Self {
        Self::with_reference(carrier, None)
    }

    /// Create an unpacker, decoding XOR-mode data when `reference` is given.
    pub fn with_reference(carrier: &'a [u8], reference: Option<&'a [u8]>) -> Self {
        Self {
            carrier,
            reference,
            pixel: 0,
        }
    }

    /// Read the next complete frame and return its payload.
    ///
    /// Stops as soon as the declared number of payload bytes is recovered;
    /// trailing carrier data is never read.
    pub fn read_frame(&mut self) -> Result<Bytes> {
        let len = self.read_header()? as usize;
        let mut payload = BytesMut::with_capacity(len.min(self.available()));
        self.read_into(len, &mut payload)?;
        Ok(payload.freeze())
    }

    /// Read the 4-byte length prefix at the current position.
    pub fn read_header(&mut self) -> Result<u32> {
        let mut header = BytesMut::with_capacity(HEADER_SIZE);
        self.read_into(HEADER_SIZE, &mut header)?;

        let mut prefix = [0u8; HEADER_SIZE];
        prefix.copy_from_slice(&header);
        Ok(parse_length(prefix))
    }

    /// Read exactly `n` bytes into `dst`.
    ///
    /// The reference and the carrier are both checked against the span the
    /// read covers before any byte is decoded.
    pub fn read_into(&mut self, n: usize, dst: &mut BytesMut) -> Result<()> {
        let end = self.pixel.saturating_add(n);
        let required = end.saturating_mul(CHANNELS_PER_PIXEL);

        if let Some(reference) = self.reference {
            if reference.len() < required {
                return Err(CodecError::ReferenceTooSmall {
                    required,
                    available: reference.len(),
                });
            }
        }

        if self.carrier.len() < required {
            return Err(CodecError::TruncatedCarrier {
                expected: end,
                recovered: self.carrier.len() / CHANNELS_PER_PIXEL,
            });
        }

        dst.reserve(n);
        for _ in 0..n {
            dst.put_u8(self.read_byte());
        }
        Ok(())
    }

    fn read_byte(&mut self) -> u8 {
        let base = self.pixel * CHANNELS_PER_PIXEL;
        let px = &self.carrier[base..base + CHANNELS_PER_PIXEL];

        let bits = match self.reference {
            Some(reference) => {
                let rx = &reference[base..base + CHANNELS_PER_PIXEL];
                [px[RED] ^ rx[RED], px[GREEN] ^ rx[GREEN], px[BLUE] ^ rx[BLUE]]
            }
            None => [px[RED], px[GREEN], px[BLUE]],
        };

        self.pixel += 1;
        join(bits)
    }

    /// Whole bytes still readable from the carrier.
    pub fn available(&self) -> usize {
        (self.carrier.len() / CHANNELS_PER_PIXEL).saturating_sub(self.pixel)
    }

    /// Channels consumed so far.
    pub fn position(&self) -> usize {
        self.pixel * CHANNELS_PER_PIXEL
    }

    /// Returns true if XOR-mode decoding is active.
    pub fn is_xor(&self) -> bool {
        self.reference.is_some()
    }
}

/// Unpack a frame from `carrier` and return its payload, prefix removed.
///
/// Supplying `reference` selects XOR-mode decoding.
pub fn unpack(carrier: &[u8], reference: Option<&[u8]>) -> Result<Bytes> {
    let mut unpacker = Unpacker::with_reference(carrier, reference);
    let payload = unpacker.read_frame()?;
    debug!(
        payload_len = payload.len(),
        channels = unpacker.position(),
        xor = unpacker.is_xor(),
        "unpacked frame from carrier"
    );
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{frame_bytes, Mode};
    use crate::packer::pack;

    fn packed(payload: &[u8], carrier_len: usize, mode: Mode) -> (Vec<u8>, Vec<u8>) {
        let original: Vec<u8> = (0..carrier_len).map(|i| (i * 53 + 7) as u8).collect();
        let mut carrier = original.clone();
        pack(&frame_bytes(payload).unwrap(), &mut carrier, mode).unwrap();
        (original, carrier)
    }

    #[test]
    fn unpacks_hi_from_hand_built_carrier() {
        #[rustfmt::skip]
        let carrier = [
            0, 0, 2, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            2, 1, 0, 0,
            3, 1, 1, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ];
        let payload = unpack(&carrier, None).unwrap();
        assert_eq!(payload.as_ref(), b"Hi");
    }

    #[test]
    fn stops_at_declared_length() {
        let (_, mut carrier) = packed(b"abc", 64, Mode::Overwrite);
        // Garbage after the frame must not leak into the payload.
        for c in &mut carrier[28..] {
            *c = 0xFF;
        }
        assert_eq!(unpack(&carrier, None).unwrap().as_ref(), b"abc");
    }

    #[test]
    fn empty_payload_reads_header_only() {
        let (_, carrier) = packed(b"", 16, Mode::Overwrite);
        let mut unpacker = Unpacker::new(&carrier);
        let payload = unpacker.read_frame().unwrap();
        assert!(payload.is_empty());
        assert_eq!(unpacker.position(), 16);
    }

    #[test]
    fn header_shorter_than_carrier_is_truncated() {
        let err = unpack(&[0u8; 15], None).unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedCarrier {
                expected: 4,
                recovered: 3
            }
        );
    }

    #[test]
    fn payload_past_carrier_end_is_truncated() {
        let (_, carrier) = packed(b"hello", 36, Mode::Overwrite);
        let err = unpack(&carrier[..32], None).unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedCarrier {
                expected: 9,
                recovered: 8
            }
        );
    }

    #[test]
    fn partial_trailing_pixel_does_not_count() {
        let (_, carrier) = packed(b"hello", 36, Mode::Overwrite);
        let err = unpack(&carrier[..35], None).unwrap_err();
        assert!(matches!(err, CodecError::TruncatedCarrier { .. }));
    }

    #[test]
    fn xor_roundtrip_with_reference() {
        let (original, carrier) = packed(b"xor me", 64, Mode::Xor);
        let payload = unpack(&carrier, Some(&original)).unwrap();
        assert_eq!(payload.as_ref(), b"xor me");
    }

    #[test]
    fn xor_reference_shorter_than_header_fails() {
        let (original, carrier) = packed(b"x", 64, Mode::Xor);
        let err = unpack(&carrier, Some(&original[..12])).unwrap_err();
        assert_eq!(
            err,
            CodecError::ReferenceTooSmall {
                required: 16,
                available: 12
            }
        );
    }

    #[test]
    fn xor_reference_shorter_than_frame_fails() {
        let (original, carrier) = packed(b"four", 64, Mode::Xor);
        let err = unpack(&carrier, Some(&original[..24])).unwrap_err();
        assert_eq!(
            err,
            CodecError::ReferenceTooSmall {
                required: 32,
                available: 24
            }
        );
    }

    #[test]
    fn reference_checked_before_carrier() {
        let (original, carrier) = packed(b"four", 32, Mode::Xor);
        let err = unpack(&carrier[..20], Some(&original[..20])).unwrap_err();
        assert!(matches!(err, CodecError::ReferenceTooSmall { .. }));
    }

    #[test]
    fn xor_data_without_reference_reads_inverted_header() {
        // XOR over saturated channels inverts every data bit, so the header
        // 04 00 00 00 reads back as FB FF FF FF.
        let mut carrier = vec![0xFF; 64];
        pack(&frame_bytes(&[0u8; 4]).unwrap(), &mut carrier, Mode::Xor).unwrap();

        let err = unpack(&carrier, None).unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedCarrier {
                expected: HEADER_SIZE + 0xFFFF_FFFB,
                recovered: 16,
            }
        );
    }

    #[test]
    fn sequential_reads_advance_cursor() {
        let carrier = {
            let mut c = vec![0u8; 16];
            pack(&[1, 2, 3, 4], &mut c, Mode::Overwrite).unwrap();
            c
        };
        let mut unpacker = Unpacker::new(&carrier);
        let mut dst = BytesMut::new();
        unpacker.read_into(1, &mut dst).unwrap();
        unpacker.read_into(2, &mut dst).unwrap();
        assert_eq!(dst.as_ref(), &[1, 2, 3]);
        assert_eq!(unpacker.available(), 1);
    }
}
