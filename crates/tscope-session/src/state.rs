//! Screen state owned by the session controller.

use tscope_models::{VideoSource, Violation};

/// The state the results screen renders from.
///
/// Mutated only through the transition methods below; observers receive
/// cloned snapshots, never shared references.
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    /// Currently loaded video, if any
    pub video: Option<VideoSource>,

    /// Whether an analysis run is in flight
    pub analyzing: bool,

    /// Violations from the most recent completed run
    pub violations: Vec<Violation>,
}

impl ScreenState {
    /// Store a freshly uploaded video and drop stale results.
    pub fn load_video(&mut self, source: VideoSource) {
        self.video = Some(source);
        self.violations.clear();
    }

    /// Mark an analysis as started. Prior results stay visible until the
    /// run completes or a new video is loaded.
    pub fn begin_analysis(&mut self) {
        self.analyzing = true;
    }

    /// Store a completed run's results.
    pub fn complete_analysis(&mut self, violations: Vec<Violation>) {
        self.analyzing = false;
        self.violations = violations;
    }

    /// Record that the run ended without results.
    pub fn abort_analysis(&mut self) {
        self.analyzing = false;
    }
}
