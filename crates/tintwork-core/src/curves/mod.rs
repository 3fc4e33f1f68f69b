//! Curve-based color remapping: exponential segment fits, weighted
//! single-channel curves, and per-channel graphs.

pub mod curve;
pub mod exponential;
pub mod graph;

pub use curve::{ColorCurve, Point};
pub use exponential::ExponentialFunction;
pub use graph::{ColorGraph, GraphSynthesizer};
