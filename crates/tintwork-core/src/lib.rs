//! Tintwork Core: curve-based color remapping and pixel clustering.
//!
//! This crate contains the blend capability, weighted exponential color
//! curves, and the greedy single-pass color clustering scanner. No I/O, GPU or
//! framework dependencies.

pub mod blend;
pub mod cluster;
pub mod color;
pub mod curves;
pub mod error;

// Re-exports for convenience.
pub use blend::{BlendAlgorithm, BlendType};
pub use cluster::{PixelCloud, PixelScanner, ScanConfig};
pub use color::{Channel, Color};
pub use curves::{ColorCurve, ColorGraph, ExponentialFunction, GraphSynthesizer, Point};
pub use error::TintError;
