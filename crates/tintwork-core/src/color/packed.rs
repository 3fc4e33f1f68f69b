//! Packed 32-bit color layouts.
//!
//! Four 8-bit components, highest byte first:
//! ```text
//!   bits 31..24  23..16  15..8   7..0
//!   ARGB  alpha   red     green   blue
//!   AHSB  alpha   hue     sat     bright
//! ```

use super::clamp_unit;

/// Quantize a unit float to the nearest 8-bit step.
#[inline]
pub fn quantize(value: f32) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

/// Pack four unit-range components into one word, first argument in the high byte.
pub fn pack(c0: f32, c1: f32, c2: f32, c3: f32) -> u32 {
    u32::from_be_bytes([quantize(c0), quantize(c1), quantize(c2), quantize(c3)])
}

/// Split a packed word into four unit-range components, high byte first.
pub fn unpack(packed: u32) -> [f32; 4] {
    packed.to_be_bytes().map(|byte| f32::from(byte) / 255.0)
}
