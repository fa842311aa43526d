//! Detector error types.

use thiserror::Error;

/// Result type for detector operations.
pub type DetectResult<T> = Result<T, DetectError>;

/// Errors surfaced by an analysis run.
///
/// A failure aborts the in-flight run: the progress timer is dropped and
/// no partial violation list is returned.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reserved for a real detection backend; the simulator never raises it.
    #[error("Detection failed: {0}")]
    DetectionFailure(String),

    #[error("Analysis cancelled")]
    Cancelled,

    #[error("Frame rendering failed: {0}")]
    Frame(#[from] tscope_frames::FrameError),
}

impl DetectError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a detection failure error.
    pub fn detection_failure(message: impl Into<String>) -> Self {
        Self::DetectionFailure(message.into())
    }
}
