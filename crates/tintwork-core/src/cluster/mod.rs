//! Pixel clustering: incremental color clouds and the single-pass scanner.

pub mod cloud;
pub mod config;
pub mod scanner;

pub use cloud::PixelCloud;
pub use config::ScanConfig;
pub use scanner::PixelScanner;
