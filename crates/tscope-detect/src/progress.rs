//! Progress reporting for analysis runs.
//!
//! Callers observe progress through a plain numeric callback; the
//! reporter enforces the delivery contract so callbacks never have to
//! defend against regressions or duplicate terminal values.

use std::sync::Arc;

/// Progress callback type.
///
/// Receives percentages from 0 toward 100. Values are monotonically
/// non-decreasing within a run and terminate at exactly 100.
pub type ProgressCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// A callback that discards progress, for callers that do not observe it.
pub fn noop_callback() -> ProgressCallback {
    Arc::new(|_| {})
}

/// Enforces the progress delivery contract for one run.
///
/// - values are clamped to the in-flight cap
/// - values never decrease
/// - the terminal 100 is delivered exactly once
/// - nothing is delivered after the terminal value
pub struct ProgressReporter {
    callback: ProgressCallback,
    cap: f32,
    last: f32,
    finished: bool,
}

impl ProgressReporter {
    /// Create a reporter with the given in-flight cap.
    pub fn new(callback: ProgressCallback, cap: f32) -> Self {
        Self {
            callback,
            cap: cap.clamp(0.0, 100.0),
            last: 0.0,
            finished: false,
        }
    }

    /// Report an in-flight value.
    pub fn report(&mut self, percent: f32) {
        if self.finished {
            return;
        }
        let value = percent.min(self.cap).max(self.last);
        self.last = value;
        (self.callback)(value);
    }

    /// Deliver the terminal 100. Idempotent; later reports are dropped.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.last = 100.0;
        (self.callback)(100.0);
    }

    /// Last value delivered.
    pub fn last(&self) -> f32 {
        self.last
    }

    /// Whether the terminal value has been delivered.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
