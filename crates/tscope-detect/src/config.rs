//! Detector configuration.

use std::time::Duration;

/// Detector configuration.
///
/// Defaults reproduce the demo behavior: a 3-5 second simulated analysis
/// reporting progress every 100 ms, yielding 1-4 violations with
/// confidences in [0.6, 1.0].
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Minimum violations fabricated per run
    pub min_violations: usize,
    /// Maximum violations fabricated per run
    pub max_violations: usize,
    /// Confidence floor
    pub confidence_floor: f64,
    /// Confidence ceiling
    pub confidence_ceiling: f64,
    /// Minimum simulated processing time
    pub min_processing_time: Duration,
    /// Maximum simulated processing time
    pub max_processing_time: Duration,
    /// Progress tick interval
    pub tick_interval: Duration,
    /// Progress cap while the run is in flight (snapped to 100 at completion)
    pub progress_cap: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_violations: 1,
            max_violations: 4,
            confidence_floor: 0.6,
            confidence_ceiling: 1.0,
            min_processing_time: Duration::from_secs(3),
            max_processing_time: Duration::from_secs(5),
            tick_interval: Duration::from_millis(100),
            progress_cap: 90.0,
        }
    }
}

impl DetectorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_violations: std::env::var("DETECTOR_MIN_VIOLATIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_violations),
            max_violations: std::env::var("DETECTOR_MAX_VIOLATIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_violations),
            confidence_floor: std::env::var("DETECTOR_CONFIDENCE_FLOOR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.confidence_floor),
            confidence_ceiling: std::env::var("DETECTOR_CONFIDENCE_CEILING")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.confidence_ceiling),
            min_processing_time: Duration::from_millis(
                std::env::var("DETECTOR_MIN_PROCESSING_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.min_processing_time.as_millis() as u64),
            ),
            max_processing_time: Duration::from_millis(
                std::env::var("DETECTOR_MAX_PROCESSING_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.max_processing_time.as_millis() as u64),
            ),
            tick_interval: Duration::from_millis(
                std::env::var("DETECTOR_TICK_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.tick_interval.as_millis() as u64),
            ),
            progress_cap: defaults.progress_cap,
        }
    }

    /// Clamp pathological settings to usable values.
    ///
    /// Ensures max bounds are not below min bounds and the confidence
    /// range stays inside [0, 1].
    pub fn normalized(mut self) -> Self {
        self.max_violations = self.max_violations.max(self.min_violations);
        self.confidence_floor = self.confidence_floor.clamp(0.0, 1.0);
        self.confidence_ceiling = self.confidence_ceiling.clamp(self.confidence_floor, 1.0);
        self.max_processing_time = self.max_processing_time.max(self.min_processing_time);
        if self.tick_interval.is_zero() {
            self.tick_interval = Duration::from_millis(100);
        }
        self.progress_cap = self.progress_cap.clamp(0.0, 100.0);
        self
    }
}
