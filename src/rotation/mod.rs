//! Rotating slide banner state machine.
//!
//! Maintains the active index over a fixed list of slides, auto-advancing on
//! an interval unless the viewer prefers reduced motion, and exposing manual
//! navigation that coexists with the automatic timer. Like the typing module
//! this is a pure state machine; the engine owns the autoplay timer and
//! re-arms it on the original cadence regardless of manual navigation.

pub mod controller;

pub use controller::RotationController;

use serde::Deserialize;
use std::time::Duration;

use crate::constants::DEFAULT_SLIDE_INTERVAL_MS;

/// One slide of the banner: an image reference plus alt text and optional
/// attribution. Terminal backends render the caption, not the image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    /// Image path or URL being referenced
    pub path: String,
    /// Alternative text describing the image
    pub alt: String,
    /// Optional credit line
    #[serde(default)]
    pub attribution: Option<String>,
}

/// Options controlling a [`RotationController`].
#[derive(Debug, Clone, PartialEq)]
pub struct RotationOptions {
    pub slides: Vec<Slide>,
    /// Autoplay advance interval
    pub interval: Duration,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            slides: Vec::new(),
            interval: Duration::from_millis(DEFAULT_SLIDE_INTERVAL_MS),
        }
    }
}
