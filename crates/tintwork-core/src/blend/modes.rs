//! Arithmetic blend modes.
//!
//! `a` is the top component, `b` the bottom:
//! ```text
//!   Multiply     a × b
//!   Screen       1 − (1 − a)(1 − b)
//!   Overlay      b < 0.5 ? 2ab : 1 − 2(1 − a)(1 − b)
//!   Darken       min(a, b)
//!   Lighten      max(a, b)
//!   Difference   |a − b|
//!   PlusLighter  a + b
//!   PlusDarker   a + b − 1
//!   Divide       b / a
//! ```
//! The alpha channel is never blended; it always yields the bottom value.

use serde::{Deserialize, Serialize};

use super::BlendAlgorithm;
use crate::color::Channel;

/// Common arithmetic blend modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlendType {
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    Difference,
    PlusLighter,
    PlusDarker,
    /// Divides the bottom by the top. A zero top yields infinity, which
    /// [`BlendAlgorithm::blend_colors`] clamps to `1.0`.
    Divide,
}

impl BlendType {
    /// Every mode, in declaration order.
    pub const ALL: [BlendType; 9] = [
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::Darken,
        Self::Lighten,
        Self::Difference,
        Self::PlusLighter,
        Self::PlusDarker,
        Self::Divide,
    ];

    fn apply(self, a: f32, b: f32) -> f32 {
        match self {
            Self::Multiply => a * b,
            Self::Screen => 1.0 - (1.0 - a) * (1.0 - b),
            Self::Overlay => {
                if b < 0.5 {
                    2.0 * a * b
                } else {
                    1.0 - 2.0 * (1.0 - a) * (1.0 - b)
                }
            }
            Self::Darken => a.min(b),
            Self::Lighten => a.max(b),
            Self::Difference => (a - b).abs(),
            Self::PlusLighter => a + b,
            Self::PlusDarker => a + b - 1.0,
            Self::Divide => b / a,
        }
    }
}

impl BlendAlgorithm for BlendType {
    fn blend(&self, channel: Channel, top: f32, bottom: f32) -> f32 {
        match channel {
            Channel::Alpha => bottom,
            _ => self.apply(top, bottom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    const EPSILON: f32 = 1e-5;

    fn check(mode: BlendType, a: f32, b: f32, expected: f32) {
        let got = mode.blend(Channel::Red, a, b);
        assert!(
            (got - expected).abs() < EPSILON,
            "{mode:?}({a}, {b}) = {got}, expected {expected}"
        );
    }

    #[test]
    fn test_mode_formulas() {
        check(BlendType::Multiply, 0.5, 0.4, 0.2);
        check(BlendType::Screen, 0.5, 0.4, 0.7);
        check(BlendType::Overlay, 0.5, 0.4, 0.4);
        check(BlendType::Overlay, 0.5, 0.6, 0.6);
        check(BlendType::Overlay, 0.2, 0.8, 0.68);
        check(BlendType::Darken, 0.3, 0.7, 0.3);
        check(BlendType::Lighten, 0.3, 0.7, 0.7);
        check(BlendType::Difference, 0.3, 0.7, 0.4);
        check(BlendType::Difference, 0.7, 0.3, 0.4);
        check(BlendType::PlusLighter, 0.3, 0.5, 0.8);
        check(BlendType::PlusDarker, 0.7, 0.5, 0.2);
        check(BlendType::Divide, 0.5, 0.25, 0.5);
    }

    #[test]
    fn test_alpha_channel_passes_bottom_through() {
        for mode in BlendType::ALL {
            assert_eq!(mode.blend(Channel::Alpha, 0.1, 0.9), 0.9, "{mode:?}");
        }
    }

    #[test]
    fn test_multiply_white_is_identity() {
        let white = Color::from_rgb(1.0, 1.0, 1.0);
        let base = Color::from_rgba(0.2, 0.4, 0.6, 0.7);
        assert_eq!(BlendType::Multiply.blend_colors(white, base), base);
    }

    #[test]
    fn test_divide_by_zero_top_clamps() {
        let black = Color::from_rgb(0.0, 0.0, 0.0);
        let base = Color::from_rgb(0.5, 0.5, 0.5);
        let out = BlendType::Divide.blend_colors(black, base);
        assert_eq!(out.red(), 1.0);
    }
}
