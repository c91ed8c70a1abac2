//! Simulation command: run the schedule under a virtual clock.
//!
//! `bannr simulate 30` plays 30 seconds of the configured animation through
//! the capture backend in fast-forward, printing every frame with its virtual
//! timestamp. With `--multiplier N` the virtual clock instead advances N
//! seconds per real second, which is useful for watching the cadence without
//! waiting out long pauses.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::CaptureBackend;
use crate::config;
use crate::engine::Engine;
use crate::time_source::{self, SimulatedTimeSource};

/// Run the animation under a simulated time source and print the trace.
pub fn handle_simulate_command(
    seconds: f64,
    multiplier: f64,
    debug_enabled: bool,
    force_reduced_motion: bool,
) -> Result<()> {
    let config = config::load()?;
    let reduced_motion = config.resolve_reduced_motion(force_reduced_motion);

    let end = Duration::from_secs_f64(seconds);
    time_source::install(Arc::new(SimulatedTimeSource::new(end, multiplier)));

    log_version!();
    config.log_config();
    if reduced_motion {
        log_decorated!("Reduced motion requested; slide autoplay disabled");
    }
    log_block_start!("Simulating {:.1}s of schedule", seconds);

    let mut engine = Engine::new(&config, reduced_motion, CaptureBackend::announcing());
    engine.start()?;
    engine.run_simulated()?;
    engine.teardown();

    let capture = engine.backend();
    log_block_start!(
        "Simulation complete: {} text frames, {} slide frames",
        capture.text_frames.len(),
        capture.slide_frames.len()
    );
    if debug_enabled {
        log_pipe!();
        log_debug!(
            "Final text {:?}, final slide index {}",
            engine.visible_text(),
            engine.active_index()
        );
    }
    log_end!();
    Ok(())
}
