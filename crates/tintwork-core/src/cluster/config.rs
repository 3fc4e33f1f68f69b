//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// Similarity epsilon used when nothing else is configured.
pub const DEFAULT_EPSILON: f32 = 0.05;

/// Environment variable overriding [`DEFAULT_EPSILON`].
pub const EPSILON_ENV: &str = "TINTWORK_SCAN_EPSILON";

/// Settings for a [`PixelScanner`](super::PixelScanner).
///
/// Missing fields deserialize to their defaults. [`ScanConfig::default`] never
/// looks at the environment; use [`ScanConfig::from_env`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Tolerance for folding a pixel into an existing cloud.
    pub epsilon: f32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl ScanConfig {
    /// Defaults, with `epsilon` taken from [`EPSILON_ENV`] when it holds a
    /// positive finite number.
    pub fn from_env() -> Self {
        Self::with_epsilon_override(std::env::var(EPSILON_ENV).ok().as_deref())
    }

    fn with_epsilon_override(raw: Option<&str>) -> Self {
        let epsilon = raw
            .and_then(|s| s.trim().parse::<f32>().ok())
            .filter(|e| e.is_finite() && *e > 0.0)
            .unwrap_or(DEFAULT_EPSILON);
        Self { epsilon }
    }
}
