//! Error types for moment validation and position computation.

use thiserror::Error;

/// Errors from the ephemeris engine.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Calendar fields or UTC offset out of range.
    #[error("invalid moment: {0}")]
    InvalidMoment(String),
    /// Latitude or longitude out of range or non-finite.
    #[error("invalid location: {0}")]
    InvalidLocation(String),
    /// Moment arithmetic left chrono's representable range.
    #[error("time out of range: {0}")]
    OutOfRange(String),
}
