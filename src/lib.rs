//! # Bannr Library
//!
//! Internal library for the bannr binary application
//!
//! This library exists to enable testing of the animation internals and
//! provide clean separation between CLI dispatch (main.rs) and application
//! logic.
//!
//! ## Architecture
//!
//! - **Entry Point**: `Bannr` struct provides the interactive application API
//! - **State Machines**: `typing` and `rotation` hold the pure animation
//!   logic, driven entirely by expired-timer events
//! - **Scheduling**: `timer` owns the deadline table, `engine` is the shell
//!   that fires due timers against the active `time_source`
//! - **Rendering**: `backend` module with terminal and capture backends
//! - **Configuration**: `config` module for TOML-based settings with
//!   clamping validation
//! - **Infrastructure**: structured logging, CLI parsing, simulate command

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod args;
pub mod backend;
pub mod commands;
pub mod config;
pub mod constants;
pub mod engine;
pub mod rotation;
pub mod time_source;
pub mod timer;
pub mod typing;

mod bannr;

// Re-export for binary and tests
pub use bannr::Bannr;
pub use rotation::{RotationController, Slide};
pub use typing::{Phase, TypingSequencer};
