//! Simulated traffic-violation detector.
//!
//! This crate provides:
//! - A timer-driven mock analysis run with monotonic progress reporting
//! - Weighted violation-type sampling and plate fabrication
//! - Cancellation support via tokio
//!
//! There is no real video processing here: the detector is a random-data
//! generator behind the same contract a real backend would implement.

pub mod cancel;
pub mod config;
pub mod detector;
pub mod error;
pub mod plate;
pub mod progress;
pub mod table;

pub use cancel::{cancel_pair, CancelHandle, CancelToken};
pub use config::DetectorConfig;
pub use detector::ViolationDetector;
pub use error::{DetectError, DetectResult};
pub use plate::{generate_plate, matches_any_template, PlateTemplate};
pub use progress::{noop_callback, ProgressCallback, ProgressReporter};
pub use table::{TypeSampler, ViolationProfile, VIOLATION_TABLE};
