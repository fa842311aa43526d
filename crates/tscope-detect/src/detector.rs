//! The simulated violation detector.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, info};

use tscope_frames::{FrameRenderer, PlaceholderRenderer};
use tscope_models::{VideoSource, Violation, ViolationId};

use crate::cancel::CancelToken;
use crate::config::DetectorConfig;
use crate::error::{DetectError, DetectResult};
use crate::plate::generate_plate;
use crate::progress::{ProgressCallback, ProgressReporter};
use crate::table::TypeSampler;

/// Timer-driven random-data generator standing in for a real analysis
/// backend.
///
/// A run waits a randomized wall-clock interval while reporting progress,
/// then fabricates a small batch of violation records. The batch is
/// returned once, atomically; there is no partial or streaming delivery.
pub struct ViolationDetector {
    config: DetectorConfig,
    sampler: TypeSampler,
    renderer: Arc<dyn FrameRenderer>,
}

impl ViolationDetector {
    /// Create a detector with the procedural frame renderer.
    pub fn new(config: DetectorConfig) -> Self {
        Self::with_renderer(config, Arc::new(PlaceholderRenderer::default()))
    }

    /// Create a detector with a specific frame renderer.
    pub fn with_renderer(config: DetectorConfig, renderer: Arc<dyn FrameRenderer>) -> Self {
        Self {
            config: config.normalized(),
            sampler: TypeSampler::new(),
            renderer,
        }
    }

    /// The detector's configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run an analysis.
    ///
    /// `on_progress` receives percentages from 0 toward 100, monotonically
    /// non-decreasing, terminating at exactly 100 delivered exactly once.
    pub async fn analyze(
        &self,
        source: &VideoSource,
        on_progress: ProgressCallback,
    ) -> DetectResult<Vec<Violation>> {
        self.run(source, on_progress, None).await
    }

    /// Run an analysis that can be cancelled.
    ///
    /// On cancellation the timer stops, partial results are discarded and
    /// no further progress callbacks fire.
    pub async fn analyze_with_cancel(
        &self,
        source: &VideoSource,
        on_progress: ProgressCallback,
        cancel: CancelToken,
    ) -> DetectResult<Vec<Violation>> {
        self.run(source, on_progress, Some(cancel)).await
    }

    async fn run(
        &self,
        source: &VideoSource,
        on_progress: ProgressCallback,
        mut cancel: Option<CancelToken>,
    ) -> DetectResult<Vec<Violation>> {
        if !source.is_video() {
            return Err(DetectError::invalid_input(format!(
                "Not a video upload: {}",
                source.content_type
            )));
        }

        let total = self.pick_processing_time();
        info!(
            file = %source.file_name,
            total_ms = total.as_millis() as u64,
            "Starting simulated analysis"
        );

        let mut reporter = ProgressReporter::new(on_progress, self.config.progress_cap);

        let started = Instant::now();
        let mut ticker = interval(self.config.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let elapsed = started.elapsed();
                    if elapsed >= total {
                        break;
                    }
                    let ratio = elapsed.as_secs_f32() / total.as_secs_f32();
                    reporter.report(ratio * self.config.progress_cap);
                }
                _ = wait_cancelled(&mut cancel) => {
                    debug!(file = %source.file_name, "Analysis cancelled, discarding partial results");
                    return Err(DetectError::Cancelled);
                }
            }
        }

        let duration_secs = source.estimated_duration_secs();
        let run_millis = Utc::now().timestamp_millis();
        let violations = self.fabricate(duration_secs, run_millis)?;

        reporter.finish();
        info!(count = violations.len(), "Analysis complete");

        Ok(violations)
    }

    /// Randomized total processing time for one run.
    fn pick_processing_time(&self) -> Duration {
        let min = self.config.min_processing_time;
        let max = self.config.max_processing_time;
        if max <= min {
            return min;
        }
        let mut rng = rand::rng();
        let millis = rng.random_range(min.as_millis() as u64..=max.as_millis() as u64);
        Duration::from_millis(millis)
    }

    /// Fabricate the violation batch, sorted ascending by timestamp.
    fn fabricate(&self, duration_secs: f64, run_millis: i64) -> DetectResult<Vec<Violation>> {
        let mut rng = rand::rng();

        let count = if self.config.max_violations > self.config.min_violations {
            rng.random_range(self.config.min_violations..=self.config.max_violations)
        } else {
            self.config.min_violations
        };

        let mut violations = Vec::with_capacity(count);
        for index in 0..count {
            let violation_type = self.sampler.sample(&mut rng);

            let timestamp_secs = if duration_secs > 0.0 {
                rng.random_range(0.0..duration_secs)
            } else {
                0.0
            };

            let confidence = if self.config.confidence_ceiling > self.config.confidence_floor {
                rng.random_range(self.config.confidence_floor..self.config.confidence_ceiling)
            } else {
                self.config.confidence_floor
            };

            let frame_url = self.renderer.render_frame(violation_type, timestamp_secs)?;

            violations.push(Violation {
                id: ViolationId::from_run(run_millis, index),
                violation_type,
                timestamp_secs,
                license_plate: generate_plate(&mut rng),
                confidence,
                frame_url,
                description: violation_type.description().to_string(),
            });
        }

        violations.sort_by(|a, b| a.timestamp_secs.partial_cmp(&b.timestamp_secs).unwrap());
        Ok(violations)
    }
}

async fn wait_cancelled(cancel: &mut Option<CancelToken>) {
    match cancel {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}
