//! Incrementally aggregated cluster of similar colors.
//!
//! Aggregates cover the RGB components only; alpha is neither summed nor
//! bounded.
//!
//! # Similarity
//! For each component `v` with cloud statistics `mean`, `min`, `max`:
//! ```text
//!   |mean − v| < ε   and   min − v < ε/2   and   v − max < ε/2
//! ```
//! The mean test is a symmetric band; the min/max tests only limit how far a
//! new sample may stretch the current range.

use glam::Vec3;
use std::cmp::Ordering;

use crate::color::Color;

/// A growing set of color samples with running sum, mean, min and max.
#[derive(Debug, Clone)]
pub struct PixelCloud {
    samples: Vec<Color>,
    sum: Vec3,
    mean: Vec3,
    min: Vec3,
    max: Vec3,
}

#[inline]
fn rgb(color: &Color) -> Vec3 {
    Vec3::new(color.red(), color.green(), color.blue())
}

fn opaque(v: Vec3) -> Color {
    Color::from_rgb(v.x, v.y, v.z)
}

impl Default for PixelCloud {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
            sum: Vec3::ZERO,
            mean: Vec3::ZERO,
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }
}

impl PixelCloud {
    /// Empty cloud.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every sample.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Add a sample without checking similarity. O(1) amortized.
    pub fn add(&mut self, color: Color) {
        let v = rgb(&color);
        self.samples.push(color);

        self.sum += v;
        self.min = self.min.min(v);
        self.max = self.max.max(v);
        // Rounding in the division can land an ulp outside the extremes.
        self.mean = (self.sum / self.samples.len() as f32).clamp(self.min, self.max);
    }

    /// Whether `(r, g, b)` is close enough to join this cloud. Empty clouds
    /// accept anything.
    pub fn is_similar(&self, r: f32, g: f32, b: f32, epsilon: f32) -> bool {
        if self.is_empty() {
            return true;
        }

        let v = Vec3::new(r, g, b);
        let band = Vec3::splat(epsilon);
        let half = Vec3::splat(epsilon * 0.5);

        (self.mean - v).abs().cmplt(band).all()
            && (self.min - v).cmplt(half).all()
            && (v - self.max).cmplt(half).all()
    }

    /// [`is_similar`](Self::is_similar) on a color's RGB components.
    pub fn is_similar_color(&self, color: &Color, epsilon: f32) -> bool {
        self.is_similar(color.red(), color.green(), color.blue(), epsilon)
    }

    /// Per-component minimum as an opaque color; `None` when empty.
    pub fn min(&self) -> Option<Color> {
        (!self.is_empty()).then(|| opaque(self.min))
    }

    /// Per-component mean as an opaque color; `None` when empty.
    pub fn mean(&self) -> Option<Color> {
        (!self.is_empty()).then(|| opaque(self.mean))
    }

    /// Per-component maximum as an opaque color; `None` when empty.
    pub fn max(&self) -> Option<Color> {
        (!self.is_empty()).then(|| opaque(self.max))
    }

    /// Samples in insertion order.
    pub fn samples(&self) -> &[Color] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Order by sample count alone.
    pub fn cmp_size(&self, other: &PixelCloud) -> Ordering {
        self.len().cmp(&other.len())
    }
}
