//! Shared data models for the TrafficScope analysis engine.
//!
//! This crate provides Serde-serializable types for:
//! - Violation records and violation types
//! - Uploaded video source descriptors
//! - Analysis run identifiers and summaries
//! - Timestamp formatting

pub mod analysis;
pub mod timestamp;
pub mod video;
pub mod violation;

// Re-export common types
pub use analysis::{AnalysisId, ViolationStats};
pub use timestamp::format_timestamp;
pub use video::VideoSource;
pub use violation::{Violation, ViolationId, ViolationType};
