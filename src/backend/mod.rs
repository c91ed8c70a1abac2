//! Render backends for the animation engine.
//!
//! The engine pushes frames through the [`RenderBackend`] trait and never
//! talks to a terminal directly. Two implementations exist: the crossterm
//! `terminal` backend for interactive runs, and the `capture` backend that
//! records timestamped frames for the `simulate` command and for tests.

pub mod capture;
pub mod terminal;

pub use capture::CaptureBackend;
pub use terminal::{TerminalBackend, TerminalGuard};

use anyhow::Result;

use crate::rotation::Slide;
use crate::typing::TypeFrame;

/// Sink for rendered animation state.
///
/// Both operations receive complete state rather than deltas, so a backend
/// never has to track what the engine did before.
pub trait RenderBackend {
    /// Name for logging
    fn backend_name(&self) -> &'static str;

    /// Present the current typewriter frame.
    fn apply_text(&mut self, frame: &TypeFrame) -> Result<()>;

    /// Present the current slide selection.
    fn apply_slide(&mut self, active_index: usize, slides: &[Slide]) -> Result<()>;
}
