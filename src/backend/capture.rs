//! Frame-capturing backend for simulation runs and tests.

use anyhow::Result;
use std::time::Duration;

use super::RenderBackend;
use crate::rotation::Slide;
use crate::typing::TypeFrame;

/// Records every emitted frame with its (possibly virtual) timestamp.
///
/// With `announce` enabled each frame is also logged in the structured
/// style, which is what `bannr simulate` prints.
#[derive(Debug, Default)]
pub struct CaptureBackend {
    announce: bool,
    pub text_frames: Vec<(Duration, TypeFrame)>,
    pub slide_frames: Vec<(Duration, usize)>,
}

impl CaptureBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture and log each frame as it arrives.
    pub fn announcing() -> Self {
        Self {
            announce: true,
            ..Self::default()
        }
    }

    /// The visible-text trace, in emission order.
    pub fn text_trace(&self) -> Vec<&str> {
        self.text_frames
            .iter()
            .map(|(_, frame)| frame.text.as_str())
            .collect()
    }

    /// The active-index trace, in emission order.
    pub fn slide_trace(&self) -> Vec<usize> {
        self.slide_frames.iter().map(|(_, idx)| *idx).collect()
    }
}

impl RenderBackend for CaptureBackend {
    fn backend_name(&self) -> &'static str {
        "capture"
    }

    fn apply_text(&mut self, frame: &TypeFrame) -> Result<()> {
        let now = crate::time_source::now();
        if self.announce {
            let cursor = if frame.cursor_visible {
                frame.cursor_character.as_str()
            } else {
                ""
            };
            log_decorated!("text: {:?}{}", frame.text, cursor);
        }
        self.text_frames.push((now, frame.clone()));
        Ok(())
    }

    fn apply_slide(&mut self, active_index: usize, slides: &[Slide]) -> Result<()> {
        let now = crate::time_source::now();
        if self.announce {
            let alt = slides
                .get(active_index)
                .map(|s| s.alt.as_str())
                .unwrap_or("(no slides)");
            log_decorated!("slide: {} of {} ({})", active_index + 1, slides.len(), alt);
        }
        self.slide_frames.push((now, active_index));
        Ok(())
    }
}
