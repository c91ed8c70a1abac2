//! Centralized constants for timing defaults, clamping limits, and exit codes.
//!
//! Every configurable value has a default here, and every clamped value has its
//! limits here, so the validation layer and the config display stay in sync.

/// Default delay between typed characters in milliseconds
pub const DEFAULT_TYPING_SPEED_MS: u64 = 50;

/// Default delay between deleted characters in milliseconds
pub const DEFAULT_DELETING_SPEED_MS: u64 = 30;

/// Default pause between typing and deleting (and between items) in milliseconds
pub const DEFAULT_PAUSE_MS: u64 = 2000;

/// Default delay before the first character is typed in milliseconds
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 0;

/// Default slide rotation interval in milliseconds
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 5000;

/// Fixed cursor blink half-period in milliseconds (on/off toggle cadence)
pub const CURSOR_BLINK_INTERVAL_MS: u64 = 500;

/// Default cursor glyph appended after the typed text
pub const DEFAULT_CURSOR_CHARACTER: &str = "|";

/// Default looping behavior for the typing cycle
pub const DEFAULT_LOOP: bool = false;

/// Default cursor visibility
pub const DEFAULT_SHOW_CURSOR: bool = true;

/// Default for suppressing the cursor while actively typing or deleting
pub const DEFAULT_HIDE_CURSOR_WHILE_TYPING: bool = false;

/// Upper clamp for per-character speeds and delays (10 minutes).
/// Anything larger is almost certainly a unit mistake in the config.
pub const MAXIMUM_DELAY_MS: u64 = 600_000;

/// Upper clamp for the slide rotation interval (1 hour)
pub const MAXIMUM_SLIDE_INTERVAL_MS: u64 = 3_600_000;

/// Environment variable consulted once at startup for the reduced-motion
/// preference when the config does not force a value
pub const REDUCED_MOTION_ENV_VAR: &str = "BANNR_REDUCED_MOTION";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "bannr.toml";

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
