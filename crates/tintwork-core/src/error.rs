use crate::color::Channel;

/// Errors raised by graph construction and color/pixel boundary conversions.
///
/// Every variant describes an argument the caller should not have passed;
/// curve evaluation and clustering themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TintError {
    #[error("invalid argument: expected {expected} channel curves, got {actual}")]
    CurveCount { expected: usize, actual: usize },
    #[error("invalid argument: no curve supplied for the {0} channel")]
    MissingCurve(Channel),
    #[error("invalid argument: {format} needs {expected} components, got {actual}")]
    ComponentCount {
        format: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid argument: ARGB buffer length {0} is not a multiple of 4")]
    PixelBufferLength(usize),
}
