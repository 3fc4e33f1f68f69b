//! Greedy single-pass color clustering.
//!
//! # Algorithm
//! ```text
//!   for pixel in input order:
//!       skip if alpha < 0.01
//!       add to the first existing cloud that is_similar(pixel, ε)
//!       otherwise start a new cloud with it
//! ```
//! Clouds are tested in creation order, so the result is reproducible for a
//! given input order. Matching is first-fit, not nearest-fit.
//!
//! # Complexity
//! O(n × k) for n pixels and k clouds formed; one pass, no pairwise distances.

use image::{Rgba, RgbaImage};

use super::cloud::PixelCloud;
use super::config::ScanConfig;
use crate::color::Color;
use crate::error::TintError;

/// Pixels with alpha below this never join a cloud.
pub const VISIBLE_ALPHA: f32 = 0.01;

/// Groups pixels into clouds of similar color.
///
/// Holds nothing but the similarity epsilon; every scan starts from scratch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScanner {
    epsilon: f32,
}

/// Scanner with [`DEFAULT_EPSILON`](super::config::DEFAULT_EPSILON). See
/// [`PixelScanner::from_env`] for the environment-driven variant.
impl Default for PixelScanner {
    fn default() -> Self {
        Self::from_config(&ScanConfig::default())
    }
}

impl PixelScanner {
    pub fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.epsilon)
    }

    /// Scanner configured through [`ScanConfig::from_env`].
    pub fn from_env() -> Self {
        Self::from_config(&ScanConfig::from_env())
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Cluster packed `0xAARRGGBB` pixels.
    pub fn scan(&self, pixels: &[u32]) -> Vec<PixelCloud> {
        self.scan_colors(pixels.iter().copied().map(Color::from_argb))
    }

    /// Cluster a big-endian ARGB byte stream (`A, R, G, B, A, R, …`).
    pub fn scan_argb_bytes(&self, bytes: &[u8]) -> Result<Vec<PixelCloud>, TintError> {
        let pixels: &[[u8; 4]] =
            bytemuck::try_cast_slice(bytes).map_err(|_| TintError::PixelBufferLength(bytes.len()))?;
        Ok(self.scan_colors(
            pixels
                .iter()
                .map(|&[a, r, g, b]| Color::from_rgba8(r, g, b, a)),
        ))
    }

    /// Cluster the pixels of an in-memory RGBA image in row-major order.
    pub fn scan_image(&self, image: &RgbaImage) -> Vec<PixelCloud> {
        self.scan_colors(
            image
                .pixels()
                .map(|&Rgba([r, g, b, a])| Color::from_rgba8(r, g, b, a)),
        )
    }

    /// Cluster colors in iteration order.
    pub fn scan_colors(&self, colors: impl IntoIterator<Item = Color>) -> Vec<PixelCloud> {
        let mut clouds: Vec<PixelCloud> = Vec::new();
        let mut total = 0usize;
        let mut skipped = 0usize;

        for color in colors {
            total += 1;
            if color.alpha() < VISIBLE_ALPHA {
                skipped += 1;
                continue;
            }

            match clouds
                .iter_mut()
                .find(|cloud| cloud.is_similar_color(&color, self.epsilon))
            {
                Some(cloud) => cloud.add(color),
                None => {
                    let mut cloud = PixelCloud::new();
                    cloud.add(color);
                    clouds.push(cloud);
                }
            }
        }

        tracing::debug!(
            pixels = total,
            skipped,
            clouds = clouds.len(),
            epsilon = self.epsilon,
            "pixel scan complete"
        );
        clouds
    }
}
