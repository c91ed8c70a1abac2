//! Configuration validation by clamping.
//!
//! There are no fatal configuration values: everything out of range is
//! clamped into range and reported with a warning. Negative delays become
//! zero ("fire as soon as possible"), oversized delays clamp to the maxima
//! in [`crate::constants`]. This keeps the failure mode of a bad config a
//! stalled or rushed animation rather than a refusal to start.

use super::Config;
use crate::constants::*;

/// Normalize every raw value in `config`, logging each adjustment.
///
/// Call once right after deserialization; the option builders in
/// [`super::Config`] assume clamped input.
pub fn validate_config(config: &mut Config) {
    clamp_delay(&mut config.typing_speed_ms, "typing_speed_ms");
    clamp_delay(&mut config.deleting_speed_ms, "deleting_speed_ms");
    clamp_delay(&mut config.pause_ms, "pause_ms");
    clamp_delay(&mut config.initial_delay_ms, "initial_delay_ms");
    clamp_interval(&mut config.interval_ms);

    if let Some(cursor) = &config.cursor_character
        && cursor.chars().count() > 1
    {
        let truncated: String = cursor.chars().take(1).collect();
        log_warning!(
            "cursor_character {:?} is longer than one character, using {:?}",
            cursor,
            truncated
        );
        config.cursor_character = Some(truncated);
    }

    // A looping cycle whose every delay is zero would spin without the
    // clock ever advancing; give it a minimal pause instead
    if config.loop_items.unwrap_or(DEFAULT_LOOP)
        && config.typing_speed_ms == Some(0)
        && config.deleting_speed_ms == Some(0)
        && config.pause_ms == Some(0)
    {
        log_warning!("All loop delays are zero, raising pause_ms to 1ms");
        config.pause_ms = Some(1);
    }

    if config.text.is_none() && config.slides.is_empty() {
        log_warning!("No text and no slides configured; nothing will animate");
    }
}

fn clamp_delay(value: &mut Option<i64>, name: &str) {
    clamp_range(value, name, MAXIMUM_DELAY_MS);
}

fn clamp_interval(value: &mut Option<i64>) {
    clamp_range(value, "interval_ms", MAXIMUM_SLIDE_INTERVAL_MS);
    // A zero interval would re-arm the autoplay timer at the same instant
    // forever, so the scheduler could never sleep
    if *value == Some(0) {
        log_warning!("interval_ms of 0 would stall the scheduler, raising to 1ms");
        *value = Some(1);
    }
}

fn clamp_range(value: &mut Option<i64>, name: &str, max_ms: u64) {
    if let Some(v) = *value {
        if v < 0 {
            log_warning!("{} ({}) is negative, clamping to 0ms", name, v);
            *value = Some(0);
        } else if v as u64 > max_ms {
            log_warning!("{} ({}) exceeds {}ms, clamping", name, v, max_ms);
            *value = Some(max_ms as i64);
        }
    }
}
