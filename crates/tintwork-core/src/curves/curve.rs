//! Weighted control-point curve for a single channel.
//!
//! Between neighboring control points the curve follows an
//! [`ExponentialFunction`] whose exponent is the ratio of the two weights, so
//! values gravitate towards heavier points.
//!
//! ```text
//!   y ▲                      (1,1)
//!     │              ●───────·        segment of the last point ends at (1,1)
//!     │         ●───╯                 segment p → next: e = p.weight / next.weight
//!     │    ●───╯
//!     │ ╭─╯                           base: (0,0) → first, e = 1 / first.weight
//!     ·─┴──────────────────────▶ x
//!   (0,0)
//! ```
//!
//! # Caching
//! Each control point lazily fits and memoizes the function for the segment
//! to its right; the base function below the lowest point has its own slot.
//! A mutation at `x` only changes the segment ending at `x`, so it clears the
//! slot of the greatest point strictly below `x`, or the base slot when there
//! is none.
//!
//! # Complexity
//! - Evaluate: O(log N) lookup + O(1) evaluation once the segment is fitted
//! - Insert/remove: O(log N)

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::OnceLock;

use super::exponential::ExponentialFunction;
use crate::color::clamp_unit;

/// A control point of a [`ColorCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Input position in `[0, 1]`; unique within a curve.
    pub x: f32,
    /// Output value in `[0, 1]`.
    pub value: f32,
    /// Pull of this point on its neighboring segments. Always positive.
    pub weight: f32,
}

/// Map key for an `x` in `[0, 1]`.
///
/// Non-negative floats order the same as their bit patterns, which gives a
/// total order without a float wrapper type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Key(u32);

impl Key {
    /// `x` must already be clamped into `[0, 1]`.
    fn new(x: f32) -> Self {
        // Adding zero folds -0.0 into +0.0.
        Self((x + 0.0).to_bits())
    }
}

#[derive(Debug, Clone)]
struct Knot {
    point: Point,
    /// Function for the segment from this point to the next one.
    segment: OnceLock<ExponentialFunction>,
}

impl Knot {
    fn new(point: Point) -> Self {
        Self {
            point,
            segment: OnceLock::new(),
        }
    }
}

/// A single-channel curve built from weighted control points.
///
/// A curve without points is the identity: `at(x) == x`.
#[derive(Debug, Clone, Default)]
pub struct ColorCurve {
    knots: BTreeMap<Key, Knot>,
    base: OnceLock<ExponentialFunction>,
}

impl ColorCurve {
    /// Identity curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point with the default weight of `1.0`.
    pub fn add_point(&mut self, x: f32, y: f32) {
        self.add_weighted_point(x, y, 1.0);
    }

    /// Add a weighted point, replacing any point already at `x`.
    ///
    /// `x` and `y` are clamped into `[0, 1]`. Heavier points pull the curve
    /// towards themselves. A weight that is not a positive finite number is
    /// replaced by `1.0`.
    pub fn add_weighted_point(&mut self, x: f32, y: f32, weight: f32) {
        let weight = if weight.is_finite() && weight > 0.0 {
            weight
        } else {
            tracing::warn!(weight, "curve point weight must be positive and finite, using 1.0");
            1.0
        };

        let x = clamp_unit(x);
        let key = Key::new(x);
        self.invalidate_below(key);
        self.knots.insert(
            key,
            Knot::new(Point {
                x,
                value: clamp_unit(y),
                weight,
            }),
        );
    }

    /// Remove every point, returning to the identity curve.
    pub fn clear(&mut self) {
        self.knots.clear();
        self.base.take();
    }

    /// Remove every point with `start <= x <= end`.
    pub fn clear_range(&mut self, start: f32, end: f32) {
        self.knots.retain(|_, knot| knot.point.x < start || knot.point.x > end);
        self.invalidate_below(Key::new(clamp_unit(start)));
    }

    /// Clear the cached function of the segment that ends at `key`.
    fn invalidate_below(&mut self, key: Key) {
        match self.knots.range_mut(..key).next_back() {
            Some((_, knot)) => {
                knot.segment.take();
            }
            None => {
                self.base.take();
            }
        }
    }

    /// Curve value at `x`, with both `x` and the result clamped into `[0, 1]`.
    pub fn at(&self, x: f32) -> f32 {
        let x = clamp_unit(x);
        let key = Key::new(x);

        let function = match self.knots.range(..key).next_back() {
            Some((&lower, knot)) => knot.segment.get_or_init(|| self.fit_segment(lower, knot.point)),
            None => {
                // Landing exactly on the lowest point; for a point at x = 0 the
                // base function would span zero width.
                if let Some(knot) = self.knots.get(&key) {
                    return knot.point.value;
                }
                self.base.get_or_init(|| self.fit_base())
            }
        };

        clamp_unit(function.evaluate(x))
    }

    fn fit_base(&self) -> ExponentialFunction {
        match self.knots.values().next() {
            Some(first) => {
                tracing::trace!(x = first.point.x, "fitting base curve segment");
                ExponentialFunction::new(
                    0.0,
                    0.0,
                    first.point.x,
                    first.point.value,
                    1.0 / first.point.weight,
                )
            }
            None => ExponentialFunction::linear(0.0, 0.0, 1.0, 1.0),
        }
    }

    fn fit_segment(&self, key: Key, point: Point) -> ExponentialFunction {
        tracing::trace!(x = point.x, "fitting curve segment");
        let (x2, y2, w2) = self
            .knots
            .range((Excluded(key), Unbounded))
            .next()
            .map(|(_, next)| (next.point.x, next.point.value, next.point.weight))
            .unwrap_or((1.0, 1.0, 1.0));
        ExponentialFunction::new(point.x, point.value, x2, y2, point.weight / w2)
    }

    /// Move `value` towards the curve: `value + (at(value) − value) × strength`.
    ///
    /// `strength` is not clamped; values outside `[0, 1]` extrapolate.
    pub fn blend(&self, strength: f32, value: f32) -> f32 {
        value + (self.at(value) - value) * strength
    }

    /// Copy of this curve with point positions rescaled so the lowest sits at
    /// `x = 0` and the highest at `x = 1`. Values and weights are kept.
    ///
    /// A single point moves to `x = 0`.
    pub fn normalize(&self) -> ColorCurve {
        let (Some(first), Some(last)) = (self.knots.values().next(), self.knots.values().next_back())
        else {
            return ColorCurve::new();
        };

        let min = first.point.x;
        let span = last.point.x - min;

        let mut normalized = ColorCurve::new();
        for point in self.points() {
            let x = if span > 0.0 { (point.x - min) / span } else { 0.0 };
            normalized.knots.insert(Key::new(x), Knot::new(Point { x, ..point }));
        }
        normalized
    }

    /// Control points in ascending `x` order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.knots.values().map(|knot| knot.point)
    }

    /// The control point stored at exactly `x` (after clamping), if any.
    pub fn point_at(&self, x: f32) -> Option<Point> {
        self.knots.get(&Key::new(clamp_unit(x))).map(|knot| knot.point)
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// True for the identity curve.
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    #[cfg(test)]
    fn fitted_segments(&self) -> usize {
        usize::from(self.base.get().is_some())
            + self
                .knots
                .values()
                .filter(|knot| knot.segment.get().is_some())
                .count()
    }
}
