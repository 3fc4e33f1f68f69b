//! Color channels as independent scalar axes for blending and curves.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Color;

/// One of the four ARGB components.
///
/// The discriminant is the channel's ordinal: alpha first, then red, green
/// and blue, matching the packed ARGB layout from high byte to low byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Channel {
    /// Opacity.
    Alpha = 0,
    /// Red primary.
    Red = 1,
    /// Green primary.
    Green = 2,
    /// Blue primary.
    Blue = 3,
}

impl Channel {
    /// Number of channels a [`Color`] carries.
    pub const COUNT: usize = 4;

    /// Every channel in ordinal order.
    pub const ALL: [Channel; Self::COUNT] = [Self::Alpha, Self::Red, Self::Green, Self::Blue];

    /// The RGB channels, in ordinal order.
    pub const RGB: [Channel; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Position of this channel in per-channel arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alpha => "Alpha",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
        }
    }

    /// The pure color associated with this channel.
    ///
    /// `Red` yields opaque pure red and so on; `Alpha` yields opaque black.
    pub fn pure_color(self) -> Color {
        match self {
            Self::Alpha => Color::from_argb(0xFF00_0000),
            Self::Red => Color::from_argb(0xFFFF_0000),
            Self::Green => Color::from_argb(0xFF00_FF00),
            Self::Blue => Color::from_argb(0xFF00_00FF),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
