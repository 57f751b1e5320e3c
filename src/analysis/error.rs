//! Analysis error types.

use thiserror::Error;

/// Errors that can occur while building or analyzing a sample series.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Not enough test stages to derive thresholds.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A row failed boundary validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An edit targeted a stage that does not exist.
    #[error("Index out of range: {index} (series has {len} stages)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
