//! Error types for chart construction.

use phala_ephemeris::EphemerisError;
use thiserror::Error;

/// Errors from chart construction, normalization and timelines.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    /// Timeline duration/resolution non-positive or too many samples.
    #[error("invalid timeline window: {0}")]
    InvalidWindow(String),
    /// Chart text was not valid JSON.
    #[error("malformed chart json: {0}")]
    Json(#[from] serde_json::Error),
}
