//! End-to-end typing traces driven through the engine under simulated time.
//!
//! These tests install the global simulated time source, so they are
//! serialized.

use serial_test::serial;
use std::sync::Arc;
use std::time::Duration;

use bannr::backend::CaptureBackend;
use bannr::config::loading::parse;
use bannr::engine::Engine;
use bannr::logger::Log;
use bannr::time_source::{self, SimulatedTimeSource};

fn install_simulated(end_ms: u64) {
    time_source::install(Arc::new(SimulatedTimeSource::new(
        Duration::from_millis(end_ms),
        0.0,
    )));
}

fn engine_for(toml: &str, end_ms: u64) -> Engine<CaptureBackend> {
    Log::set_enabled(false);
    install_simulated(end_ms);
    let config = parse(toml).unwrap();
    let mut engine = Engine::new(&config, false, CaptureBackend::new());
    engine.start().unwrap();
    engine
}

#[test]
#[serial]
fn looping_two_item_trace_matches_expected_cycle() {
    let mut engine = engine_for(
        r#"
text = ["Hi", "Yo"]
typing_speed_ms = 10
deleting_speed_ms = 10
pause_ms = 100
loop = true
show_cursor = false
"#,
        700,
    );
    engine.run_simulated().unwrap();

    let trace = engine.backend().text_trace();
    // Initial render, then the Idle->TypingIn transition, then the cycle
    let expected_prefix = [
        "", "", "H", "Hi", "Hi", "H", "", "Y", "Yo", "Yo", "Y", "", "H", "Hi",
    ];
    assert!(
        trace.len() >= expected_prefix.len(),
        "trace too short: {trace:?}"
    );
    assert_eq!(&trace[..expected_prefix.len()], expected_prefix);
}

#[test]
#[serial]
fn looping_trace_timestamps_follow_the_schedule() {
    let mut engine = engine_for(
        r#"
text = ["Hi", "Yo"]
typing_speed_ms = 10
deleting_speed_ms = 10
pause_ms = 100
loop = true
show_cursor = false
"#,
        300,
    );
    engine.run_simulated().unwrap();

    let times: Vec<u64> = engine
        .backend()
        .text_frames
        .iter()
        .map(|(t, _)| t.as_millis() as u64)
        .collect();
    // t=0 initial render and Idle->TypingIn, chars at 10/20, pause until
    // 120, deletions at 130/140, inter-item pause until 240, then "Y"/"Yo"
    assert_eq!(&times[..9], &[0, 0, 10, 20, 120, 130, 140, 240, 250]);
}

#[test]
#[serial]
fn non_looping_item_types_once_and_stays() {
    let mut engine = engine_for(
        r#"
text = "Hello"
typing_speed_ms = 10
initial_delay_ms = 5
show_cursor = false
"#,
        2_000,
    );
    engine.run_simulated().unwrap();

    assert_eq!(engine.visible_text(), "Hello");
    // Terminal: nothing left scheduled, so the text can never mutate again
    assert!(engine.next_timeout().is_none());

    let (last_time, last_frame) = engine.backend().text_frames.last().unwrap();
    assert_eq!(last_frame.text, "Hello");
    assert_eq!(last_time.as_millis(), 55); // 5ms delay + 5 chars * 10ms
}

#[test]
#[serial]
fn empty_text_schedules_nothing() {
    let engine = engine_for("show_cursor = true", 1_000);
    assert!(engine.next_timeout().is_none());
    let frames = &engine.backend().text_frames;
    assert_eq!(frames.len(), 1); // the initial inert render only
    assert_eq!(frames[0].1.text, "");
}

#[test]
#[serial]
fn cursor_blinks_on_fixed_period_independent_of_phase() {
    let mut engine = engine_for(
        r#"
text = "ab"
typing_speed_ms = 10
show_cursor = true
"#,
        1_200,
    );
    engine.run_simulated().unwrap();

    let blink_events: Vec<(u64, bool)> = engine
        .backend()
        .text_frames
        .iter()
        .map(|(t, f)| (t.as_millis() as u64, f.cursor_visible))
        .filter(|(t, _)| *t >= 500)
        .collect();
    // Toggles at 500 and 1000 even though typing finished at 20
    assert!(blink_events.contains(&(500, false)));
    assert!(blink_events.contains(&(1000, true)));
}

#[test]
#[serial]
fn teardown_is_idempotent_and_silences_the_engine() {
    let mut engine = engine_for(
        r#"
text = ["a", "b"]
typing_speed_ms = 10
loop = true
"#,
        10_000,
    );
    engine.teardown();
    engine.teardown();
    let frames_before = engine.backend().text_frames.len();

    // Ticking a torn-down engine must not fire anything
    time_source::sleep(Duration::from_millis(5_000));
    engine.tick().unwrap();
    assert_eq!(engine.backend().text_frames.len(), frames_before);
    assert!(engine.next_timeout().is_none());

    time_source::reset_to_real();
}

#[test]
#[serial]
fn reconfigure_restarts_from_scratch() {
    let mut engine = engine_for(
        r#"
text = ["first", "second"]
typing_speed_ms = 10
pause_ms = 50
loop = true
show_cursor = false
"#,
        60_000,
    );
    // Run partway into the first item
    for _ in 0..4 {
        if let Some(timeout) = engine.next_timeout() {
            time_source::sleep(timeout);
            engine.tick().unwrap();
        }
    }
    assert_ne!(engine.visible_text(), "");

    let new_config = parse(
        r#"
text = "new"
typing_speed_ms = 10
show_cursor = false
"#,
    )
    .unwrap();
    engine.reconfigure(&new_config).unwrap();
    assert_eq!(engine.visible_text(), "");

    engine.run_simulated().unwrap();
    assert_eq!(engine.visible_text(), "new");
}
