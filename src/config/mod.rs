//! Configuration system for bannr with clamping validation.
//!
//! Handles the TOML-based `bannr.toml` configuration file: locating it,
//! generating a default on first run, deserializing it, and normalizing every
//! value by clamping. Nothing in here ever rejects a config outright — a
//! malformed value is clamped into range with a logged warning, and a missing
//! value falls back to its default. The worst a bad config can produce is a
//! still animation, never a crash.
//!
//! ## Configuration Structure
//!
//! ```toml
//! #[Typing]
//! text = ["Fresh pasta daily", "Wood-fired pizza"]  # string or array
//! typing_speed_ms = 50         # delay between typed characters (ms)
//! deleting_speed_ms = 30       # delay between deleted characters (ms)
//! pause_ms = 2000              # hold after typing / before re-typing (ms)
//! initial_delay_ms = 0         # delay before the first character (ms)
//! loop = true                  # cycle through items forever
//! show_cursor = true           # render a cursor glyph
//! hide_cursor_while_typing = false
//! cursor_character = "|"
//! text_colors = ["yellow"]     # optional, cycled per item
//!
//! #[Rotation]
//! interval_ms = 5000           # autoplay advance interval (ms)
//!
//! #[Accessibility]
//! reduced_motion = false       # omit to read BANNR_REDUCED_MOTION
//!
//! [[slide]]
//! path = "hero-1.jpg"
//! alt = "Dining room at dusk"
//! attribution = "Photo: M. Rossi"
//! ```

pub mod builder;
pub mod loading;
pub mod validation;


use serde::Deserialize;
use std::time::Duration;

use crate::constants::*;
use crate::rotation::{RotationOptions, Slide};
use crate::typing::TypingOptions;

// Re-export public API
pub use builder::create_default_config;
pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};
pub use validation::validate_config;

/// The typing items as written in TOML: a bare string or an array of strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextItems {
    Single(String),
    Many(Vec<String>),
}

impl TextItems {
    /// Normalize to the list form used everywhere internally.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            TextItems::Single(s) => vec![s],
            TextItems::Many(v) => v,
        }
    }
}

/// Raw configuration as deserialized from `bannr.toml`.
///
/// Every field is optional so a partial file works; defaults are applied when
/// converting to the engine option structs. Timing fields are signed because
/// TOML integers are, and clamping (not deserialization) is where negative
/// values get handled.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    // Typing
    pub text: Option<TextItems>,
    pub typing_speed_ms: Option<i64>,
    pub deleting_speed_ms: Option<i64>,
    pub pause_ms: Option<i64>,
    pub initial_delay_ms: Option<i64>,
    #[serde(rename = "loop")]
    pub loop_items: Option<bool>,
    pub show_cursor: Option<bool>,
    pub hide_cursor_while_typing: Option<bool>,
    pub cursor_character: Option<String>,
    pub text_colors: Option<Vec<String>>,

    // Rotation
    pub interval_ms: Option<i64>,
    #[serde(default, rename = "slide")]
    pub slides: Vec<Slide>,

    // Accessibility
    pub reduced_motion: Option<bool>,
}

impl Config {
    /// Build the typing engine options, applying defaults.
    /// Assumes [`validate_config`] has already clamped the raw values.
    pub fn typing_options(&self) -> TypingOptions {
        TypingOptions {
            items: self
                .text
                .clone()
                .map(TextItems::into_vec)
                .unwrap_or_default(),
            typing_speed: delay_from(self.typing_speed_ms, DEFAULT_TYPING_SPEED_MS),
            deleting_speed: delay_from(self.deleting_speed_ms, DEFAULT_DELETING_SPEED_MS),
            pause: delay_from(self.pause_ms, DEFAULT_PAUSE_MS),
            initial_delay: delay_from(self.initial_delay_ms, DEFAULT_INITIAL_DELAY_MS),
            loop_items: self.loop_items.unwrap_or(DEFAULT_LOOP),
            show_cursor: self.show_cursor.unwrap_or(DEFAULT_SHOW_CURSOR),
            hide_cursor_while_typing: self
                .hide_cursor_while_typing
                .unwrap_or(DEFAULT_HIDE_CURSOR_WHILE_TYPING),
            cursor_character: self
                .cursor_character
                .clone()
                .unwrap_or_else(|| DEFAULT_CURSOR_CHARACTER.to_string()),
            text_colors: self.text_colors.clone().unwrap_or_default(),
        }
    }

    /// Build the rotation engine options, applying defaults.
    pub fn rotation_options(&self) -> RotationOptions {
        RotationOptions {
            slides: self.slides.clone(),
            interval: delay_from(self.interval_ms, DEFAULT_SLIDE_INTERVAL_MS),
        }
    }

    /// Resolve the reduced-motion preference, read exactly once at startup.
    ///
    /// Precedence: CLI flag, then config file, then the environment variable.
    /// Mid-session preference changes are deliberately not observed; the
    /// value holds until the process restarts.
    pub fn resolve_reduced_motion(&self, cli_forced: bool) -> bool {
        if cli_forced {
            return true;
        }
        if let Some(forced) = self.reduced_motion {
            return forced;
        }
        std::env::var(REDUCED_MOTION_ENV_VAR)
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "True"))
            .unwrap_or(false)
    }

    /// Log the effective configuration in the structured block style.
    pub fn log_config(&self) {
        let typing = self.typing_options();
        let rotation = self.rotation_options();

        log_block_start!("Loaded configuration");
        if typing.items.is_empty() {
            log_indented!("Text: (none)");
        } else {
            log_indented!("Text items: {}", typing.items.len());
            log_indented!(
                "Typing speed: {}ms, deleting: {}ms, pause: {}ms",
                typing.typing_speed.as_millis(),
                typing.deleting_speed.as_millis(),
                typing.pause.as_millis()
            );
            log_indented!("Loop: {}", typing.loop_items);
        }
        if rotation.slides.is_empty() {
            log_indented!("Slides: (none)");
        } else {
            log_indented!(
                "Slides: {} (interval: {}ms)",
                rotation.slides.len(),
                rotation.interval.as_millis()
            );
        }
    }
}

/// Convert a clamped raw millisecond value to a `Duration`, with default.
fn delay_from(raw: Option<i64>, default: u64) -> Duration {
    let ms = match raw {
        Some(v) if v >= 0 => v as u64,
        Some(_) => 0, // negative values clamp to fire-as-soon-as-possible
        None => default,
    };
    Duration::from_millis(ms)
}
