//! Uploaded video source descriptors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum assumed duration when estimating from file size (seconds).
pub const MIN_ESTIMATED_DURATION_SECS: f64 = 30.0;

/// Maximum assumed duration when estimating from file size (seconds).
pub const MAX_ESTIMATED_DURATION_SECS: f64 = 300.0;

/// Assumed seconds of footage per megabyte of file size.
const SECS_PER_MEGABYTE: f64 = 30.0;

/// Descriptor for an uploaded video file.
///
/// Only metadata is carried; the analyzer never reads the video bytes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoSource {
    /// Original file name
    pub file_name: String,

    /// MIME content type reported by the upload
    pub content_type: String,

    /// File size in bytes
    pub size_bytes: u64,

    /// Real duration in seconds, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
}

impl VideoSource {
    /// Create a new video source descriptor.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size_bytes,
            duration_secs: None,
        }
    }

    /// Attach a known duration.
    pub fn with_duration(mut self, duration_secs: f64) -> Self {
        self.duration_secs = Some(duration_secs);
        self
    }

    /// Whether the upload claims to be a video.
    pub fn is_video(&self) -> bool {
        self.content_type.starts_with("video/")
    }

    /// Duration used to place fabricated timestamps.
    ///
    /// Falls back to a rough file-size heuristic (30 s of footage per MB,
    /// clamped to [30, 300] seconds) when the real duration is unknown.
    pub fn estimated_duration_secs(&self) -> f64 {
        if let Some(duration) = self.duration_secs {
            return duration;
        }

        let megabytes = self.size_bytes as f64 / (1024.0 * 1024.0);
        (megabytes * SECS_PER_MEGABYTE)
            .max(MIN_ESTIMATED_DURATION_SECS)
            .min(MAX_ESTIMATED_DURATION_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_video() {
        assert!(VideoSource::new("dashcam.mp4", "video/mp4", 1024).is_video());
        assert!(!VideoSource::new("notes.txt", "text/plain", 1024).is_video());
    }

    #[test]
    fn test_known_duration_wins() {
        let source = VideoSource::new("clip.mp4", "video/mp4", 50 * 1024 * 1024)
            .with_duration(42.0);
        assert_eq!(source.estimated_duration_secs(), 42.0);
    }

    #[test]
    fn test_estimate_clamped_low() {
        // Tiny file still assumed to be at least 30 seconds
        let source = VideoSource::new("clip.mp4", "video/mp4", 100 * 1024);
        assert_eq!(source.estimated_duration_secs(), MIN_ESTIMATED_DURATION_SECS);
    }

    #[test]
    fn test_estimate_clamped_high() {
        // Huge file capped at 5 minutes
        let source = VideoSource::new("clip.mp4", "video/mp4", 1024 * 1024 * 1024);
        assert_eq!(source.estimated_duration_secs(), MAX_ESTIMATED_DURATION_SECS);
    }

    #[test]
    fn test_estimate_scales_with_size() {
        // 2 MB -> 60 seconds
        let source = VideoSource::new("clip.mp4", "video/mp4", 2 * 1024 * 1024);
        assert!((source.estimated_duration_secs() - 60.0).abs() < 0.001);
    }
}
