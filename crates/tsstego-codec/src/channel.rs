//! Pixel channel layout and the per-byte bit split.
//!
//! Pixels are 4 channels in the fixed order Red, Green, Blue, Alpha.
//! A frame byte is split MSB-first across the low bits of one pixel:
//!
//! ```text
//!  bit   7 6 5 | 4 3 | 2 1 0
//!        Red   | Grn | Blue
//! ```
//!
//! Green carries the fewest bits because the eye is most sensitive to it.

/// Channels per RGBA pixel. Also the channels consumed per frame byte.
pub const CHANNELS_PER_PIXEL: usize = 4;

/// Position of the red channel within a pixel.
pub const RED: usize = 0;

/// Position of the green channel within a pixel.
pub const GREEN: usize = 1;

/// Position of the blue channel within a pixel.
pub const BLUE: usize = 2;

/// Position of the alpha channel within a pixel. Never written.
pub const ALPHA: usize = 3;

/// Low bits of red that carry frame data (byte bits 7-5).
pub const RED_MASK: u8 = 0b111;

/// Low bits of green that carry frame data (byte bits 4-3).
pub const GREEN_MASK: u8 = 0b011;

/// Low bits of blue that carry frame data (byte bits 2-0).
pub const BLUE_MASK: u8 = 0b111;

const RED_SHIFT: u32 = 5;
const GREEN_SHIFT: u32 = 3;

/// Mask of the data-carrying bits for a channel position, `0` for alpha.
pub fn mask(position: usize) -> u8 {
    match position {
        RED => RED_MASK,
        GREEN => GREEN_MASK,
        BLUE => BLUE_MASK,
        _ => 0,
    }
}

/// Splits a byte into right-aligned `[red, green, blue]` bit groups.
pub fn split(byte: u8) -> [u8; 3] {
    [
        (byte >> RED_SHIFT) & RED_MASK,
        (byte >> GREEN_SHIFT) & GREEN_MASK,
        byte & BLUE_MASK,
    ]
}

/// Reassembles a byte from the low bits of `[red, green, blue]`.
///
/// High bits of each input are ignored.
pub fn join(bits: [u8; 3]) -> u8 {
    ((bits[0] & RED_MASK) << RED_SHIFT)
        | ((bits[1] & GREEN_MASK) << GREEN_SHIFT)
        | (bits[2] & BLUE_MASK)
}

/// Returns a human-readable name for a channel position.
pub fn channel_name(position: usize) -> &'static str {
    match position % CHANNELS_PER_PIXEL {
        RED => "RED",
        GREEN => "GREEN",
        BLUE => "BLUE",
        _ => "ALPHA",
    }
}
