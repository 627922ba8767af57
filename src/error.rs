//! Error types shared by all image operations.
//!
//! Operations fail closed: on error no output buffer is produced. All
//! operations are pure and deterministic, so callers never retry; the same
//! input reproduces the same failure.

use thiserror::Error;

/// Failure modes for raster operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The buffer has zero rows or zero columns.
    #[error("invalid dimensions: buffer must be at least 1x1")]
    InvalidDimensions,

    /// The buffer has a channel count other than 1 (grayscale) or 3 (RGB).
    #[error("unsupported channel count {0}: expected 1 or 3")]
    UnsupportedChannelCount(usize),

    /// A resize or chart target smaller than 1x1.
    #[error("invalid target size {width}x{height}: both dimensions must be >= 1")]
    InvalidTargetSize { width: usize, height: usize },

    /// A scalar parameter is outside its documented range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The plotting backend failed while rendering a histogram chart.
    #[error("chart rendering failed: {0}")]
    ChartRender(String),
}
