//! Error types for frame rendering.

use thiserror::Error;

/// Result type for frame rendering operations.
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors that can occur while producing a placeholder frame.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Invalid canvas geometry: {0}")]
    InvalidGeometry(String),
}

impl FrameError {
    /// Create an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry(message.into())
    }
}
