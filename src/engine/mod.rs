//! Animation engine: the timer-scheduling shell around the state machines.
//!
//! The engine owns the [`Timers`] table and a render backend, and drives the
//! pure [`TypingSequencer`] and [`RotationController`] from expired
//! deadlines. It handles:
//!
//! - Arming the initial phase, blink, and autoplay timers
//! - Firing due timers in scheduled order and re-arming repeating ones
//! - Manual slide navigation alongside the automatic cadence
//! - Reconfiguration as cancel-everything-then-restart
//! - Idempotent teardown (after `teardown` no callback ever runs)
//!
//! Exactly one phase timer, one blink timer, and one autoplay timer can be
//! pending at any instant; transitions replace rather than stack deadlines.

use anyhow::Result;
use std::time::Duration;

use crate::backend::RenderBackend;
use crate::config::Config;
use crate::constants::CURSOR_BLINK_INTERVAL_MS;
use crate::rotation::RotationController;
use crate::timer::{TimerId, Timers};
use crate::typing::TypingSequencer;

/// Orchestrates both animations against the global time source.
pub struct Engine<B: RenderBackend> {
    sequencer: TypingSequencer,
    controller: RotationController,
    timers: Timers,
    backend: B,
}

impl<B: RenderBackend> Engine<B> {
    /// Build an engine from a normalized config and the once-read
    /// reduced-motion preference.
    pub fn new(config: &Config, reduced_motion: bool, backend: B) -> Self {
        Self {
            sequencer: TypingSequencer::new(config.typing_options()),
            controller: RotationController::new(config.rotation_options(), reduced_motion),
            timers: Timers::new(),
            backend,
        }
    }

    /// Arm the initial timers and render the first frames.
    pub fn start(&mut self) -> Result<()> {
        let now = crate::time_source::now();
        if let Some(delay) = self.sequencer.start() {
            self.timers.arm(TimerId::TypingPhase, now, delay);
        }
        if self.sequencer.wants_blink_timer() {
            self.timers.arm(
                TimerId::CursorBlink,
                now,
                Duration::from_millis(CURSOR_BLINK_INTERVAL_MS),
            );
        }
        if let Some(interval) = self.controller.autoplay_interval() {
            self.timers.arm(TimerId::SlideAutoplay, now, interval);
        }
        self.render_text()?;
        self.render_slide()
    }

    /// Time until the earliest pending deadline, or `None` when the engine
    /// is fully idle (inert config or terminal sequence with autoplay off).
    pub fn next_timeout(&self) -> Option<Duration> {
        let deadline = self.timers.next_deadline()?;
        Some(deadline.saturating_sub(crate::time_source::now()))
    }

    /// Fire every due timer in scheduled order, advancing the state machines
    /// and re-arming the repeating timers.
    ///
    /// Re-arming is relative to the expired deadline, not the firing instant,
    /// so a tick that runs late (input polling, scheduling jitter) does not
    /// shift the cadence away from the mount-relative schedule.
    pub fn tick(&mut self) -> Result<()> {
        let now = crate::time_source::now();
        for (id, deadline) in self.timers.fire_due(now) {
            match id {
                TimerId::TypingPhase => {
                    if let Some(delay) = self.sequencer.on_phase_timer() {
                        self.timers.arm(TimerId::TypingPhase, deadline, delay);
                    }
                    self.render_text()?;
                }
                TimerId::CursorBlink => {
                    self.sequencer.on_blink_timer();
                    self.timers.arm(
                        TimerId::CursorBlink,
                        deadline,
                        Duration::from_millis(CURSOR_BLINK_INTERVAL_MS),
                    );
                    self.render_text()?;
                }
                TimerId::SlideAutoplay => {
                    self.controller.on_timer();
                    if let Some(interval) = self.controller.autoplay_interval() {
                        self.timers.arm(TimerId::SlideAutoplay, deadline, interval);
                    }
                    self.render_slide()?;
                }
            }
        }
        Ok(())
    }

    /// Manually advance to the next slide. The autoplay timer keeps its
    /// original deadline.
    pub fn next_slide(&mut self) -> Result<()> {
        self.controller.next();
        self.render_slide()
    }

    /// Manually step to the previous slide. The autoplay timer keeps its
    /// original deadline.
    pub fn prev_slide(&mut self) -> Result<()> {
        self.controller.prev();
        self.render_slide()
    }

    /// Jump to a slide by index (clamped).
    pub fn go_to_slide(&mut self, index: usize) -> Result<()> {
        self.controller.go_to(index);
        self.render_slide()
    }

    /// Apply a new configuration: cancel every pending timer, restart both
    /// state machines, and re-arm from scratch.
    pub fn reconfigure(&mut self, config: &Config) -> Result<()> {
        self.timers.cancel_all();
        let now = crate::time_source::now();
        if let Some(delay) = self.sequencer.reconfigure(config.typing_options()) {
            self.timers.arm(TimerId::TypingPhase, now, delay);
        }
        if self.sequencer.wants_blink_timer() {
            self.timers.arm(
                TimerId::CursorBlink,
                now,
                Duration::from_millis(CURSOR_BLINK_INTERVAL_MS),
            );
        }
        self.controller.reconfigure(config.rotation_options());
        if let Some(interval) = self.controller.autoplay_interval() {
            self.timers.arm(TimerId::SlideAutoplay, now, interval);
        }
        self.render_text()?;
        self.render_slide()
    }

    /// Cancel all pending timers. Safe to call any number of times; after
    /// this, `tick` is a no-op until a restart or reconfiguration.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
    }

    /// Drive the engine off the installed time source until the simulation
    /// ends or nothing remains scheduled.
    ///
    /// Only meaningful under a simulated time source; against real time it
    /// would run the animation without an input loop.
    pub fn run_simulated(&mut self) -> Result<()> {
        while let Some(deadline) = self.timers.next_deadline() {
            if crate::time_source::simulation_ended() {
                break;
            }
            let now = crate::time_source::now();
            crate::time_source::sleep(deadline.saturating_sub(now));
            self.tick()?;
        }
        Ok(())
    }

    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    pub fn visible_text(&self) -> &str {
        self.sequencer.visible_text()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn render_text(&mut self) -> Result<()> {
        self.backend.apply_text(&self.sequencer.frame())
    }

    fn render_slide(&mut self) -> Result<()> {
        self.backend
            .apply_slide(self.controller.active_index(), self.controller.slides())
    }
}
