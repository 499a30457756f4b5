//! Length-prefixed LSB bit packing for RGBA pixel buffers.
//!
//! This is the core of tsstego. Every payload is framed with:
//! - A 4-byte little-endian payload length
//! - The payload bytes themselves, with no terminator
//!
//! Each frame byte is then spread over the low bits of one pixel:
//! 3 bits into Red, 2 into Green, 3 into Blue. Alpha is never touched.
//!
//! Two packing modes exist. [`Mode::Overwrite`] replaces the low bits and can
//! be decoded from the packed image alone. [`Mode::Xor`] XORs the bits into the
//! carrier and can only be decoded with the original, unmodified carrier as a
//! reference. Decoding XOR data without the right reference yields garbage, not
//! an error: nothing in the packed image identifies which mode produced it.

pub mod channel;
pub mod codec;
pub mod error;
pub mod packer;
pub mod unpacker;

pub use channel::{ALPHA, BLUE, CHANNELS_PER_PIXEL, GREEN, RED};
pub use codec::{
    capacity, embed, extract, frame, frame_bytes, parse_length, required_channels, Mode,
    HEADER_SIZE, MAX_PAYLOAD,
};
pub use error::{CodecError, Result};
pub use packer::{pack, Packer};
pub use unpacker::{unpack, Unpacker};
