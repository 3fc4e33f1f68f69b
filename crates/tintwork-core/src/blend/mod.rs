//! Blend capability: per-channel algorithms and whole-color compositing.
//!
//! Anything that maps `(channel, top, bottom)` to a component implements
//! [`BlendAlgorithm`]: the arithmetic [`BlendType`] modes, plain closures, and
//! curve-based [`ColorGraph`](crate::curves::ColorGraph)s all substitute for
//! one another.
//!
//! # Whole-color blending
//! ```text
//!   v   = blend(channel, top[c], bottom[c])
//!   out = clamp(bottom[c] + (v − bottom[c]) × top.alpha)      c ∈ {R, G, B}
//!   out.alpha = bottom.alpha
//! ```

pub mod modes;

pub use modes::BlendType;

use crate::color::{Channel, Color, clamp_unit};

/// A per-channel blending algorithm.
pub trait BlendAlgorithm {
    /// Blend the `top` and `bottom` components of a single channel.
    fn blend(&self, channel: Channel, top: f32, bottom: f32) -> f32;

    /// Blend two whole colors, using the top color's alpha as opacity.
    ///
    /// The result keeps the bottom color's alpha.
    fn blend_colors(&self, top: Color, bottom: Color) -> Color {
        let mut out = bottom.rgb_components();
        for channel in Channel::RGB {
            let t = top.component(channel);
            let b = bottom.component(channel);
            let blended = self.blend(channel, t, b);
            out[channel.index()] = clamp_unit(b + (blended - b) * top.alpha());
        }
        Color::from(out)
    }
}

impl<F> BlendAlgorithm for F
where
    F: Fn(Channel, f32, f32) -> f32,
{
    fn blend(&self, channel: Channel, top: f32, bottom: f32) -> f32 {
        self(channel, top, bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_closure_is_an_algorithm() {
        let take_top = |_: Channel, top: f32, _: f32| top;
        let top = Color::from_rgb(0.2, 0.4, 0.6);
        let bottom = Color::from_rgb(0.9, 0.9, 0.9);
        let out = take_top.blend_colors(top, bottom);
        assert!((out.red() - 0.2).abs() < EPSILON);
        assert!((out.green() - 0.4).abs() < EPSILON);
        assert!((out.blue() - 0.6).abs() < EPSILON);
    }

    #[test]
    fn test_transparent_top_leaves_bottom_unchanged() {
        let take_top = |_: Channel, top: f32, _: f32| top;
        let top = Color::from_rgba(0.0, 0.0, 0.0, 0.0);
        let bottom = Color::from_rgba(0.3, 0.6, 0.9, 0.5);
        assert_eq!(take_top.blend_colors(top, bottom), bottom);
    }

    #[test]
    fn test_half_alpha_top_mixes_halfway() {
        let take_top = |_: Channel, top: f32, _: f32| top;
        let top = Color::from_rgba(1.0, 1.0, 1.0, 0.5);
        let bottom = Color::from_rgba(0.0, 0.0, 0.0, 0.8);
        let out = take_top.blend_colors(top, bottom);
        assert!((out.red() - 0.5).abs() < EPSILON);
        assert!((out.alpha() - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_result_is_clamped() {
        let overshoot = |_: Channel, _: f32, _: f32| 5.0;
        let out = overshoot.blend_colors(Color::from_rgb(0.5, 0.5, 0.5), Color::from_rgb(0.5, 0.5, 0.5));
        assert_eq!(out.red(), 1.0);
    }
}
