//! Two-point exponential fit used for curve segments.
//!
//! # Formula
//! ```text
//!   slope     = (y2 − y1) / (x2^e − x1^e)
//!   intercept = y1 − slope × x1^e
//!   y(x)      = slope × x^e + intercept
//! ```
//! With `e = 1` this is ordinary linear interpolation through both points.

/// An immutable function `y = slope · x^e + intercept` passing through two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFunction {
    exponent: f32,
    slope: f32,
    intercept: f32,
}

impl ExponentialFunction {
    /// Fit through `(x1, y1)` and `(x2, y2)` with exponent `exponent`.
    ///
    /// Callers must ensure `x1^e != x2^e`; otherwise the slope is not finite
    /// and every evaluation yields NaN or infinity.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, exponent: f32) -> Self {
        let xe1 = x1.powf(exponent);
        let xe2 = x2.powf(exponent);
        let slope = (y2 - y1) / (xe2 - xe1);
        Self {
            exponent,
            slope,
            intercept: y1 - slope * xe1,
        }
    }

    /// Straight line through both points.
    pub fn linear(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(x1, y1, x2, y2, 1.0)
    }

    /// Evaluate at `x`.
    #[inline]
    pub fn evaluate(&self, x: f32) -> f32 {
        self.slope * x.powf(self.exponent) + self.intercept
    }

    /// Power applied to `x`.
    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    /// Scale applied to `x^exponent`.
    pub fn slope(&self) -> f32 {
        self.slope
    }

    /// Constant offset.
    pub fn intercept(&self) -> f32 {
        self.intercept
    }
}
