//! Per-channel curve set usable wherever a [`BlendAlgorithm`] is expected.

use super::curve::ColorCurve;
use crate::blend::BlendAlgorithm;
use crate::cluster::PixelCloud;
use crate::color::Channel;
use crate::error::TintError;

/// One [`ColorCurve`] per ARGB channel.
///
/// As a [`BlendAlgorithm`], `top` is the blend strength and `bottom` the
/// component being remapped, so a graph can stand in for any arithmetic mode.
/// New graphs are identity graphs: blending with them changes nothing.
#[derive(Debug, Clone, Default)]
pub struct ColorGraph {
    curves: [ColorCurve; Channel::COUNT],
}

/// Builds a [`ColorGraph`] from clustered pixel data.
///
/// How cluster statistics translate into control points is up to the
/// implementor; the graph only provides the seam.
pub trait GraphSynthesizer {
    fn synthesize(&self, clouds: &[PixelCloud]) -> ColorGraph;
}

impl ColorGraph {
    /// Graph of identity curves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph from exactly one curve per channel, in [`Channel::ALL`] order.
    pub fn from_curves(curves: Vec<ColorCurve>) -> Result<Self, TintError> {
        let curves: [ColorCurve; Channel::COUNT] =
            curves.try_into().map_err(|rejected: Vec<ColorCurve>| TintError::CurveCount {
                expected: Channel::COUNT,
                actual: rejected.len(),
            })?;
        Ok(Self { curves })
    }

    /// Graph from channel-keyed curves. Every channel must be present; a
    /// channel given twice keeps its last curve.
    pub fn from_channel_curves(
        curves: impl IntoIterator<Item = (Channel, ColorCurve)>,
    ) -> Result<Self, TintError> {
        let mut slots: [Option<ColorCurve>; Channel::COUNT] = Default::default();
        for (channel, curve) in curves {
            slots[channel.index()] = Some(curve);
        }

        let mut graph = Self::new();
        for channel in Channel::ALL {
            graph.curves[channel.index()] = slots[channel.index()]
                .take()
                .ok_or(TintError::MissingCurve(channel))?;
        }
        Ok(graph)
    }

    /// Graph produced by `synthesizer` from scanned clusters.
    pub fn from_clouds<S: GraphSynthesizer + ?Sized>(clouds: &[PixelCloud], synthesizer: &S) -> Self {
        synthesizer.synthesize(clouds)
    }

    pub fn curve(&self, channel: Channel) -> &ColorCurve {
        &self.curves[channel.index()]
    }

    pub fn curve_mut(&mut self, channel: Channel) -> &mut ColorCurve {
        &mut self.curves[channel.index()]
    }

    /// All curves, indexed by [`Channel::index`].
    pub fn curves(&self) -> &[ColorCurve; Channel::COUNT] {
        &self.curves
    }

    /// Replace the curve for `channel`, returning the previous one.
    pub fn set_curve(&mut self, channel: Channel, curve: ColorCurve) -> ColorCurve {
        tracing::trace!(%channel, points = curve.len(), "replacing channel curve");
        std::mem::replace(&mut self.curves[channel.index()], curve)
    }

    /// Reset every curve to the identity.
    pub fn reset(&mut self) {
        tracing::trace!("resetting color graph");
        for curve in &mut self.curves {
            curve.clear();
        }
    }

    /// Copy with every curve normalized independently.
    pub fn normalize(&self) -> ColorGraph {
        Self {
            curves: std::array::from_fn(|i| self.curves[i].normalize()),
        }
    }
}

impl TryFrom<Vec<ColorCurve>> for ColorGraph {
    type Error = TintError;

    fn try_from(curves: Vec<ColorCurve>) -> Result<Self, Self::Error> {
        Self::from_curves(curves)
    }
}

impl BlendAlgorithm for ColorGraph {
    /// Apply the channel's curve to `bottom` with strength `top`.
    fn blend(&self, channel: Channel, top: f32, bottom: f32) -> f32 {
        self.curves[channel.index()].blend(top, bottom)
    }
}
