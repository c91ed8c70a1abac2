//! Application coordinator that manages the complete lifecycle of bannr.
//!
//! This module handles resource acquisition, initialization, and
//! orchestration of the interactive run. It manages:
//! - Configuration loading
//! - The once-read reduced-motion preference
//! - Terminal setup with an RAII guard
//! - The input/timer event loop
//! - Teardown on every exit path
//!
//! The `Bannr` struct uses a builder pattern so different startup contexts
//! share one code path:
//! - Normal startup: `Bannr::new(debug_enabled).run()`
//! - Forced reduced motion: `Bannr::new(debug_enabled).with_reduced_motion().run()`

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::time::Duration;

use crate::backend::{TerminalBackend, TerminalGuard};
use crate::config::{self, Config};
use crate::engine::Engine;

/// Fallback poll timeout when nothing is scheduled, keeps the input loop
/// responsive on an inert configuration
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Builder for configuring and running the bannr application.
pub struct Bannr {
    debug_enabled: bool,
    force_reduced_motion: bool,
}

impl Bannr {
    /// Create a new runner with defaults matching a normal run
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            debug_enabled,
            force_reduced_motion: false,
        }
    }

    /// Disable slide autoplay for this run regardless of config/environment
    pub fn with_reduced_motion(mut self) -> Self {
        self.force_reduced_motion = true;
        self
    }

    /// Run the interactive animation until the user quits.
    pub fn run(self) -> Result<()> {
        let config = config::load()?;
        let reduced_motion = config.resolve_reduced_motion(self.force_reduced_motion);

        log_version!();
        if let Some(custom_dir) = config::get_custom_config_dir() {
            log_block_start!("Base directory: {}", custom_dir.display());
        }
        config.log_config();
        if reduced_motion {
            log_decorated!("Reduced motion active; slide autoplay disabled");
        }
        if self.debug_enabled {
            log_pipe!();
            log_debug!("Entering interactive mode");
        }

        // Everything after this point draws on the alternate screen; the
        // guard restores the terminal on drop, error paths included.
        let guard = TerminalGuard::new()?;
        let mut engine = Engine::new(&config, reduced_motion, TerminalBackend::new());
        engine.start()?;

        let result = Self::event_loop(&mut engine);

        engine.teardown();
        drop(guard);

        log_block_start!("Shutting down bannr...");
        log_end!();
        result
    }

    /// Poll for input until the next timer deadline, dispatching keys and
    /// firing due timers each pass.
    fn event_loop(engine: &mut Engine<TerminalBackend>) -> Result<()> {
        loop {
            let timeout = engine.next_timeout().unwrap_or(IDLE_POLL);
            if event::poll(timeout).context("Failed to poll terminal events")?
                && let Event::Key(key) = event::read().context("Failed to read terminal event")?
            {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Right | KeyCode::Char('n') => engine.next_slide()?,
                    KeyCode::Left | KeyCode::Char('p') => engine.prev_slide()?,
                    KeyCode::Char('r') => Self::reload(engine)?,
                    KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                        engine.go_to_slide(c as usize - '1' as usize)?;
                    }
                    _ => {}
                }
            }
            engine.tick()?;
        }
    }

    /// Re-read the config file and apply it as a reconfiguration.
    /// A file that fails to load leaves the current animation untouched.
    fn reload(engine: &mut Engine<TerminalBackend>) -> Result<()> {
        match Self::try_load() {
            Ok(config) => engine.reconfigure(&config),
            Err(_) => Ok(()),
        }
    }

    fn try_load() -> Result<Config> {
        let path = config::get_config_path()?;
        config::load_from_path(&path)
    }
}
