//! Session error types.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No video selected")]
    NoVideoSelected,

    #[error("Invalid file type: {0}")]
    InvalidInput(String),

    #[error("An analysis is already running")]
    AnalysisInProgress,

    #[error("Detector error: {0}")]
    Detect(#[from] tscope_detect::DetectError),
}

impl SessionError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
