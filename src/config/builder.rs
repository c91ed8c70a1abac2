//! Default configuration generation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::*;

/// Write a commented default `bannr.toml` at `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }
    fs::write(path, default_config_content())
        .with_context(|| format!("Failed to write default config: {}", path.display()))?;
    Ok(())
}

/// The content of a freshly generated configuration file.
pub fn default_config_content() -> String {
    format!(
        r#"#[Typing]
text = ["Welcome to bannr", "Timed terminal animations"]
typing_speed_ms = {DEFAULT_TYPING_SPEED_MS}    # delay between typed characters (ms)
deleting_speed_ms = {DEFAULT_DELETING_SPEED_MS}  # delay between deleted characters (ms)
pause_ms = {DEFAULT_PAUSE_MS}         # hold after typing / before re-typing (ms)
initial_delay_ms = {DEFAULT_INITIAL_DELAY_MS}     # delay before the first character (ms)
loop = true              # cycle through items forever
show_cursor = true       # render a cursor glyph
hide_cursor_while_typing = false
cursor_character = "{DEFAULT_CURSOR_CHARACTER}"

#[Rotation]
interval_ms = {DEFAULT_SLIDE_INTERVAL_MS}      # autoplay advance interval (ms)

#[Accessibility]
# reduced_motion = true  # uncomment to disable autoplay; otherwise the
#                        # {REDUCED_MOTION_ENV_VAR} environment variable is read

[[slide]]
path = "hero-1.jpg"
alt = "First slide"

[[slide]]
path = "hero-2.jpg"
alt = "Second slide"
attribution = "Photo: bannr"
"#
    )
}
