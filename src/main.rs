//! Binary entry point: argument parsing and command dispatch.
//!
//! All real work happens in the library; this file only maps a parsed
//! [`CliAction`] onto it and turns errors into exit codes.

use anyhow::Result;

use bannr::args::{CliAction, ParsedArgs};
use bannr::commands::{help, simulate};
use bannr::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use bannr::{Bannr, config};

// The log macros are exported from the library crate root
use bannr::{log_end, log_error, log_pipe};

fn main() {
    let parsed = ParsedArgs::parse(std::env::args());

    let result = match parsed.action {
        CliAction::Run {
            debug_enabled,
            config_dir,
            reduced_motion,
        } => run(debug_enabled, config_dir, reduced_motion),
        CliAction::Simulate {
            debug_enabled,
            seconds,
            multiplier,
            config_dir,
            reduced_motion,
        } => {
            if let Err(e) = config::set_config_dir(config_dir) {
                fail(e);
            }
            simulate::handle_simulate_command(seconds, multiplier, debug_enabled, reduced_motion)
        }
        CliAction::ShowHelp => {
            help::display_help();
            std::process::exit(EXIT_SUCCESS);
        }
        CliAction::ShowVersion => {
            help::display_version();
            std::process::exit(EXIT_SUCCESS);
        }
        CliAction::ShowHelpDueToError => {
            help::display_help();
            std::process::exit(EXIT_FAILURE);
        }
    };

    if let Err(e) = result {
        fail(e);
    }
}

fn run(debug_enabled: bool, config_dir: Option<String>, reduced_motion: bool) -> Result<()> {
    config::set_config_dir(config_dir)?;
    let mut runner = Bannr::new(debug_enabled);
    if reduced_motion {
        runner = runner.with_reduced_motion();
    }
    runner.run()
}

fn fail(e: anyhow::Error) -> ! {
    log_pipe!();
    log_error!("{:#}", e);
    log_end!();
    std::process::exit(EXIT_FAILURE);
}
