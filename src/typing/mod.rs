//! Typewriter-style text reveal state machine.
//!
//! This module implements the phase cycle behind the animated hero text:
//! characters of the current item are typed in one at a time, held for a
//! pause, deleted back out, and the cycle advances to the next item. The
//! state machine is pure: every transition happens inside
//! [`TypingSequencer::on_phase_timer`], which returns the delay until the
//! next transition instead of touching any clock. The engine owns the actual
//! timer and the independent cursor-blink toggle.
//!
//! ## Key Functionality
//! - **Phase Detection**: Tracking the current phase of the reveal cycle
//! - **Transition Scheduling**: Returning the delay to the next phase event
//! - **Cursor Handling**: Blink state and optional suppression while active
//! - **Reconfiguration**: First-class cancel-and-restart on new options

pub mod sequencer;

pub use sequencer::TypingSequencer;

use std::fmt;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CURSOR_CHARACTER, DEFAULT_DELETING_SPEED_MS, DEFAULT_HIDE_CURSOR_WHILE_TYPING,
    DEFAULT_INITIAL_DELAY_MS, DEFAULT_LOOP, DEFAULT_PAUSE_MS, DEFAULT_SHOW_CURSOR,
    DEFAULT_TYPING_SPEED_MS,
};

/// Represents the current phase of the typewriter cycle.
///
/// `Idle` doubles as the pre-start state (before the initial delay expires)
/// and the terminal state of a non-looping sequence; in both cases no
/// characters are being added or removed.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Phase {
    /// Nothing scheduled to change the visible text
    Idle,

    /// Characters of the current item are being appended
    TypingIn,

    /// Fully typed item is being held before deletion
    Pausing,

    /// Characters are being removed from the end
    Deleting,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "Idle"),
            Phase::TypingIn => write!(f, "TypingIn"),
            Phase::Pausing => write!(f, "Pausing"),
            Phase::Deleting => write!(f, "Deleting"),
        }
    }
}

impl Phase {
    /// Returns true while the visible text is actively mutating.
    /// These are the phases during which `hide_cursor_while_typing` applies.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::TypingIn | Self::Deleting)
    }

    /// Returns true for the phases that hold the text steady.
    pub fn is_steady(&self) -> bool {
        matches!(self, Self::Idle | Self::Pausing)
    }
}

/// Options controlling a [`TypingSequencer`].
///
/// All timing fields arrive pre-clamped from the config layer; the sequencer
/// itself treats a zero duration as "fire as soon as possible" and never
/// rejects a value.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingOptions {
    /// Text items cycled through, in order
    pub items: Vec<String>,
    /// Delay between typed characters
    pub typing_speed: Duration,
    /// Delay between deleted characters
    pub deleting_speed: Duration,
    /// Hold time after typing completes, and before re-typing the next item
    pub pause: Duration,
    /// Delay before the very first character
    pub initial_delay: Duration,
    /// Whether the cycle repeats after the last item
    pub loop_items: bool,
    /// Whether a cursor glyph is rendered at all
    pub show_cursor: bool,
    /// Suppress the cursor while characters are moving
    pub hide_cursor_while_typing: bool,
    /// Glyph rendered as the cursor
    pub cursor_character: String,
    /// Optional color names cycled per item (modulo), empty for default
    pub text_colors: Vec<String>,
}

impl Default for TypingOptions {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            typing_speed: Duration::from_millis(DEFAULT_TYPING_SPEED_MS),
            deleting_speed: Duration::from_millis(DEFAULT_DELETING_SPEED_MS),
            pause: Duration::from_millis(DEFAULT_PAUSE_MS),
            initial_delay: Duration::from_millis(DEFAULT_INITIAL_DELAY_MS),
            loop_items: DEFAULT_LOOP,
            show_cursor: DEFAULT_SHOW_CURSOR,
            hide_cursor_while_typing: DEFAULT_HIDE_CURSOR_WHILE_TYPING,
            cursor_character: DEFAULT_CURSOR_CHARACTER.to_string(),
            text_colors: Vec::new(),
        }
    }
}

/// One rendered state of the typewriter, handed to the render backend.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeFrame {
    /// Currently visible text
    pub text: String,
    /// Whether a cursor cell is part of the rendition at all
    pub show_cursor: bool,
    /// Whether the cursor glyph is lit right now (blink + suppression)
    pub cursor_visible: bool,
    /// Glyph to draw when the cursor is lit
    pub cursor_character: String,
    /// Color name for the current item, if configured
    pub color: Option<String>,
}
