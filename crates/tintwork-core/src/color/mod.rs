//! Color value type shared by blending, curves and clustering.
//!
//! A [`Color`] stores alpha, red, green and blue as unit-range floats. The
//! packed ARGB/AHSB words are derived views; nothing in the curve or cluster
//! code depends on their bit layout.

mod channel;
pub mod packed;

pub use channel::Channel;

use palette::{FromColor, Hsv, Srgb};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::TintError;

/// Clamp into `[0, 1]`, mapping NaN to `0.0`.
#[inline]
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        // `+ 0.0` folds -0.0 into +0.0.
        value.clamp(0.0, 1.0) + 0.0
    }
}

/// An immutable ARGB color with components in `[0, 1]`.
///
/// Equality, ordering and hashing follow the packed ARGB word, so two colors
/// that quantize to the same 8-bit components compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color {
    alpha: f32,
    red: f32,
    green: f32,
    blue: f32,
}

impl Color {
    /// Opaque color from red, green and blue.
    pub fn from_rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::from_rgba(red, green, blue, 1.0)
    }

    /// Color from red, green, blue and alpha. Components are clamped into `[0, 1]`.
    pub fn from_rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            alpha: clamp_unit(alpha),
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
        }
    }

    /// Color from 8-bit components.
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::from_argb(u32::from_be_bytes([alpha, red, green, blue]))
    }

    /// Decode a packed `0xAARRGGBB` word.
    pub fn from_argb(argb: u32) -> Self {
        let [alpha, red, green, blue] = packed::unpack(argb);
        Self { alpha, red, green, blue }
    }

    /// Color from hue, saturation and brightness, all in `[0, 1]`.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        let hsv = Hsv::new(
            clamp_unit(hue) * 360.0,
            clamp_unit(saturation),
            clamp_unit(brightness),
        );
        let rgb: Srgb = Srgb::from_color(hsv);
        Self::from_rgba(rgb.red, rgb.green, rgb.blue, alpha)
    }

    /// Opaque color from a `[r, g, b, ..]` slice; extra elements are ignored.
    pub fn from_rgb_slice(components: &[f32]) -> Result<Self, TintError> {
        match components {
            [red, green, blue, ..] => Ok(Self::from_rgb(*red, *green, *blue)),
            _ => Err(TintError::ComponentCount {
                format: "RGB",
                expected: 3,
                actual: components.len(),
            }),
        }
    }

    /// Color from an `[a, r, g, b, ..]` slice; extra elements are ignored.
    pub fn from_argb_slice(components: &[f32]) -> Result<Self, TintError> {
        match components {
            [alpha, red, green, blue, ..] => Ok(Self::from_rgba(*red, *green, *blue, *alpha)),
            _ => Err(TintError::ComponentCount {
                format: "ARGB",
                expected: 4,
                actual: components.len(),
            }),
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn red(&self) -> f32 {
        self.red
    }

    pub fn green(&self) -> f32 {
        self.green
    }

    pub fn blue(&self) -> f32 {
        self.blue
    }

    /// Component for `channel`.
    pub fn component(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Alpha => self.alpha,
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Components as `[alpha, red, green, blue]`, indexable by [`Channel::index`].
    pub fn rgb_components(&self) -> [f32; 4] {
        [self.alpha, self.red, self.green, self.blue]
    }

    fn hsv(&self) -> Hsv {
        Hsv::from_color(Srgb::new(self.red, self.green, self.blue))
    }

    /// Hue as a fraction of a full turn, in `[0, 1)`. Grays report `0.0`.
    pub fn hue(&self) -> f32 {
        self.hsv().hue.into_positive_degrees() / 360.0
    }

    pub fn saturation(&self) -> f32 {
        self.hsv().saturation
    }

    pub fn brightness(&self) -> f32 {
        self.hsv().value
    }

    /// Components as `[alpha, hue, saturation, brightness]`.
    pub fn hsb_components(&self) -> [f32; 4] {
        let hsv = self.hsv();
        [
            self.alpha,
            hsv.hue.into_positive_degrees() / 360.0,
            hsv.saturation,
            hsv.value,
        ]
    }

    /// Packed `0xAARRGGBB` word.
    pub fn argb(&self) -> u32 {
        packed::pack(self.alpha, self.red, self.green, self.blue)
    }

    /// Packed `0xAAHHSSBB` word.
    pub fn ahsb(&self) -> u32 {
        let [alpha, hue, saturation, brightness] = self.hsb_components();
        packed::pack(alpha, hue, saturation, brightness)
    }

    /// Straight-line distance across all four components.
    pub fn euclidean_distance(&self, other: &Color) -> f32 {
        self.rgb_components()
            .iter()
            .zip(other.rgb_components())
            .map(|(a, b)| (b - a) * (b - a))
            .sum::<f32>()
            .sqrt()
    }
}

impl From<[f32; 4]> for Color {
    /// Build from `[alpha, red, green, blue]`.
    fn from(argb: [f32; 4]) -> Self {
        let [alpha, red, green, blue] = argb;
        Self::from_rgba(red, green, blue, alpha)
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.rgb_components()
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.argb() == other.argb()
    }
}

impl Eq for Color {}

impl PartialOrd for Color {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Color {
    fn cmp(&self, other: &Self) -> Ordering {
        self.argb().cmp(&other.argb())
    }
}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.argb().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.red, self.green, self.blue)
    }
}
