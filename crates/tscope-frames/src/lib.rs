//! Placeholder frame rendering for fabricated violation records.
//!
//! This crate provides:
//! - Procedural traffic-scene drawing on an RGB canvas
//! - JPEG encoding into inline `data:` URLs
//! - A `FrameRenderer` provider trait with procedural and static
//!   implementations

pub mod encode;
pub mod error;
pub mod font;
pub mod scene;

use std::sync::OnceLock;

use tracing::debug;

use tscope_models::ViolationType;

pub use encode::to_jpeg_data_url;
pub use error::{FrameError, FrameResult};
pub use scene::{render_scene, FrameConfig};

/// Frame rendering provider.
///
/// Implementations produce an inline image reference for a violation.
/// The image content is illustrative only; nothing downstream consumes it.
pub trait FrameRenderer: Send + Sync {
    /// Render a frame for the given violation type and video offset.
    fn render_frame(&self, violation_type: ViolationType, timestamp_secs: f64)
        -> FrameResult<String>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}

/// Procedural renderer: draws the annotated traffic scene per record.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderRenderer {
    config: FrameConfig,
}

impl PlaceholderRenderer {
    /// Create a renderer with the given canvas settings.
    pub fn new(config: FrameConfig) -> Self {
        Self { config }
    }
}

impl FrameRenderer for PlaceholderRenderer {
    fn render_frame(
        &self,
        violation_type: ViolationType,
        timestamp_secs: f64,
    ) -> FrameResult<String> {
        let canvas = render_scene(&self.config, Some((violation_type, timestamp_secs)));
        let url = to_jpeg_data_url(&canvas, self.config.jpeg_quality)?;
        debug!(
            violation_type = %violation_type,
            timestamp_secs,
            bytes = url.len(),
            "Rendered placeholder frame"
        );
        Ok(url)
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}

/// Static renderer: one fixed generic scene for every input.
///
/// The scene is rendered and encoded on first use, then reused.
#[derive(Debug, Default)]
pub struct StaticRenderer {
    config: FrameConfig,
    cached: OnceLock<String>,
}

impl StaticRenderer {
    /// Create a renderer with the given canvas settings.
    pub fn new(config: FrameConfig) -> Self {
        Self {
            config,
            cached: OnceLock::new(),
        }
    }
}

impl FrameRenderer for StaticRenderer {
    fn render_frame(&self, _: ViolationType, _: f64) -> FrameResult<String> {
        if let Some(url) = self.cached.get() {
            return Ok(url.clone());
        }

        let canvas = render_scene(&self.config, None);
        let url = to_jpeg_data_url(&canvas, self.config.jpeg_quality)?;
        Ok(self.cached.get_or_init(|| url).clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
