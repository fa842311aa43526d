//! The analysis session controller.

use std::sync::Arc;

use tokio::sync::{watch, Mutex, RwLock};
use tracing::{info, warn};

use tscope_detect::{cancel_pair, CancelHandle, ProgressCallback, ViolationDetector};
use tscope_models::{AnalysisId, VideoSource, Violation, ViolationStats};

use crate::error::{SessionError, SessionResult};
use crate::state::ScreenState;

/// Top-level controller for the upload-and-analyze screen.
///
/// Owns the screen state and the detector; the UI shell drives it and
/// renders from snapshots. Progress is published on a watch channel so
/// observers can follow the in-flight run without holding the state lock.
pub struct AnalysisSession {
    detector: ViolationDetector,
    state: RwLock<ScreenState>,
    progress: watch::Sender<f32>,
    /// Retained so the channel always has a receiver; without it
    /// `progress.send` no-ops (and never updates the stored value) whenever
    /// no external observer happens to be subscribed.
    _progress_keepalive: watch::Receiver<f32>,
    current_run: Mutex<Option<CancelHandle>>,
}

impl AnalysisSession {
    /// Create a session around a detector.
    pub fn new(detector: ViolationDetector) -> Self {
        let (progress, progress_keepalive) = watch::channel(0.0);
        Self {
            detector,
            state: RwLock::new(ScreenState::default()),
            progress,
            _progress_keepalive: progress_keepalive,
            current_run: Mutex::new(None),
        }
    }

    /// Register an uploaded file.
    ///
    /// Non-video MIME types are rejected here, before the detector is ever
    /// invoked. A successful upload drops results from earlier runs.
    pub async fn load_video(&self, source: VideoSource) -> SessionResult<()> {
        if !source.is_video() {
            warn!(
                file = %source.file_name,
                content_type = %source.content_type,
                "Rejected non-video upload"
            );
            return Err(SessionError::invalid_input(source.content_type));
        }

        info!(file = %source.file_name, size_bytes = source.size_bytes, "Video loaded");
        self.state.write().await.load_video(source);
        let _ = self.progress.send(0.0);
        Ok(())
    }

    /// Run the analysis on the loaded video.
    ///
    /// Returns the sorted violation batch; the same batch is also stored in
    /// the screen state. Only one run may be active at a time.
    pub async fn analyze(&self) -> SessionResult<Vec<Violation>> {
        let source = {
            let mut state = self.state.write().await;
            if state.analyzing {
                return Err(SessionError::AnalysisInProgress);
            }
            let source = state.video.clone().ok_or(SessionError::NoVideoSelected)?;
            state.begin_analysis();
            source
        };

        let analysis_id = AnalysisId::new();
        info!(analysis_id = %analysis_id, file = %source.file_name, "Analysis started");

        let (handle, token) = cancel_pair();
        *self.current_run.lock().await = Some(handle);

        let _ = self.progress.send(0.0);
        let progress_tx = self.progress.clone();
        let on_progress: ProgressCallback = Arc::new(move |value| {
            let _ = progress_tx.send(value);
        });

        let result = self
            .detector
            .analyze_with_cancel(&source, on_progress, token)
            .await;

        *self.current_run.lock().await = None;

        match result {
            Ok(violations) => {
                info!(
                    analysis_id = %analysis_id,
                    count = violations.len(),
                    "Analysis complete"
                );
                self.state.write().await.complete_analysis(violations.clone());
                Ok(violations)
            }
            Err(e) => {
                warn!(analysis_id = %analysis_id, error = %e, "Analysis aborted");
                self.state.write().await.abort_analysis();
                let _ = self.progress.send(0.0);
                Err(e.into())
            }
        }
    }

    /// Cancel the in-flight run, if any.
    pub async fn cancel(&self) {
        if let Some(handle) = self.current_run.lock().await.as_ref() {
            handle.cancel();
        }
    }

    /// Cloned snapshot of the screen state.
    pub async fn snapshot(&self) -> ScreenState {
        self.state.read().await.clone()
    }

    /// Subscribe to progress updates for the current and future runs.
    pub fn subscribe_progress(&self) -> watch::Receiver<f32> {
        self.progress.subscribe()
    }

    /// Latest published progress value.
    pub fn progress(&self) -> f32 {
        *self.progress.borrow()
    }

    /// Summary counts over the stored violation list.
    pub async fn stats(&self) -> ViolationStats {
        ViolationStats::from_violations(&self.state.read().await.violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tscope_detect::DetectorConfig;

    fn session() -> AnalysisSession {
        AnalysisSession::new(ViolationDetector::new(DetectorConfig::default()))
    }

    fn video() -> VideoSource {
        VideoSource::new("dashcam.mp4", "video/mp4", 4 * 1024 * 1024)
    }

    #[tokio::test]
    async fn test_rejects_non_video_upload() {
        let session = session();
        let result = session
            .load_video(VideoSource::new("notes.txt", "text/plain", 10))
            .await;
        assert!(matches!(result, Err(SessionError::InvalidInput(_))));
        assert!(session.snapshot().await.video.is_none());
    }

    #[tokio::test]
    async fn test_analyze_requires_video() {
        let session = session();
        let result = session.analyze().await;
        assert!(matches!(result, Err(SessionError::NoVideoSelected)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_run_updates_state_and_stats() {
        let session = session();
        session.load_video(video()).await.unwrap();

        let violations = session.analyze().await.unwrap();
        assert!(!violations.is_empty());

        let snapshot = session.snapshot().await;
        assert!(!snapshot.analyzing);
        assert_eq!(snapshot.violations.len(), violations.len());
        assert_eq!(session.progress(), 100.0);

        let stats = session.stats().await;
        assert_eq!(stats.total, violations.len() as u32);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_run() {
        let session = Arc::new(session());
        session.load_video(video()).await.unwrap();

        let runner = Arc::clone(&session);
        let task = tokio::spawn(async move { runner.analyze().await });

        // Let the run start, then cancel it
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        session.cancel().await;

        let result = task.await.unwrap();
        assert!(matches!(
            result,
            Err(SessionError::Detect(tscope_detect::DetectError::Cancelled))
        ));

        let snapshot = session.snapshot().await;
        assert!(!snapshot.analyzing);
        assert!(snapshot.violations.is_empty());
        assert_eq!(session.progress(), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_upload_clears_results() {
        let session = session();
        session.load_video(video()).await.unwrap();
        session.analyze().await.unwrap();

        session.load_video(video()).await.unwrap();
        let snapshot = session.snapshot().await;
        assert!(snapshot.violations.is_empty());
        assert_eq!(session.progress(), 0.0);
    }
}
