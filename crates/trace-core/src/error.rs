use thiserror::Error;

/// Rejected tuning parameters.
///
/// The effects themselves never fail at runtime; this only guards against
/// configurations that would divide by zero or invert a range.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be a positive duration")]
    ZeroDuration { name: &'static str },
    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("spark radius range is inverted: min {min} > max {max}")]
    InvertedRadius { min: f32, max: f32 },
    #[error("{name} must lie in (0, 1], got {value}")]
    FractionOutOfRange { name: &'static str, value: f32 },
}
