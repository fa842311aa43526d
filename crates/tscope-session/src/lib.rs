//! Screen controller for the TrafficScope analysis demo.
//!
//! This crate provides:
//! - The session controller that owns the screen state
//! - MIME screening of uploads before the detector runs
//! - Progress observation via a watch channel
//! - Summary statistics over a run's violation list

pub mod error;
pub mod session;
pub mod state;
pub mod telemetry;

pub use error::{SessionError, SessionResult};
pub use session::AnalysisSession;
pub use state::ScreenState;
pub use telemetry::init_tracing;
