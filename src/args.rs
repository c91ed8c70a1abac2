//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags while gracefully handling unknown options.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the interactive animation with these settings
    Run {
        debug_enabled: bool,
        config_dir: Option<String>,
        reduced_motion: bool,
    },
    /// Run under a simulated clock, printing the frame trace
    Simulate {
        debug_enabled: bool,
        seconds: f64,
        multiplier: f64,
        config_dir: Option<String>,
        reduced_motion: bool,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    ///
    /// # Returns
    /// ParsedArgs containing the determined action
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut reduced_motion = false;
        let mut config_dir: Option<String> = None;
        let mut simulate_seconds: Option<f64> = None;
        let mut simulate_multiplier: f64 = 0.0;

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        // Subcommand first, then flags
        let mut idx = 0;
        let mut in_simulate = false;
        while idx < args_vec.len() {
            let arg = args_vec[idx].as_str();
            match arg {
                "simulate" if !in_simulate && simulate_seconds.is_none() => {
                    // `bannr simulate <seconds>` — the positional follows
                    match args_vec.get(idx + 1).and_then(|s| s.parse::<f64>().ok()) {
                        Some(seconds) if seconds > 0.0 => {
                            simulate_seconds = Some(seconds);
                            in_simulate = true;
                            idx += 2;
                            continue;
                        }
                        _ => {
                            return ParsedArgs {
                                action: CliAction::ShowHelpDueToError,
                            };
                        }
                    }
                }
                "--multiplier" | "-m" if in_simulate => {
                    match args_vec.get(idx + 1).and_then(|s| s.parse::<f64>().ok()) {
                        Some(m) => {
                            simulate_multiplier = m;
                            idx += 2;
                            continue;
                        }
                        None => {
                            return ParsedArgs {
                                action: CliAction::ShowHelpDueToError,
                            };
                        }
                    }
                }
                "--config" | "-c" => match args_vec.get(idx + 1) {
                    Some(dir) => {
                        config_dir = Some(dir.clone());
                        idx += 2;
                        continue;
                    }
                    None => {
                        return ParsedArgs {
                            action: CliAction::ShowHelpDueToError,
                        };
                    }
                },
                "--debug" | "-d" => debug_enabled = true,
                "--reduced-motion" => reduced_motion = true,
                "--help" | "-h" => {
                    return ParsedArgs {
                        action: CliAction::ShowHelp,
                    };
                }
                "--version" | "-V" => {
                    return ParsedArgs {
                        action: CliAction::ShowVersion,
                    };
                }
                _ => {
                    return ParsedArgs {
                        action: CliAction::ShowHelpDueToError,
                    };
                }
            }
            idx += 1;
        }

        let action = if let Some(seconds) = simulate_seconds {
            CliAction::Simulate {
                debug_enabled,
                seconds,
                multiplier: simulate_multiplier,
                config_dir,
                reduced_motion,
            }
        } else {
            CliAction::Run {
                debug_enabled,
                config_dir,
                reduced_motion,
            }
        };

        ParsedArgs { action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        let full: Vec<&str> = std::iter::once("bannr").chain(args.iter().copied()).collect();
        ParsedArgs::parse(full).action
    }

    #[test]
    fn no_args_runs_normally() {
        assert_eq!(
            parse(&[]),
            CliAction::Run {
                debug_enabled: false,
                config_dir: None,
                reduced_motion: false,
            }
        );
    }

    #[test]
    fn flags_are_recognized() {
        assert_eq!(
            parse(&["--debug", "--reduced-motion", "-c", "/tmp/cfg"]),
            CliAction::Run {
                debug_enabled: true,
                config_dir: Some("/tmp/cfg".to_string()),
                reduced_motion: true,
            }
        );
    }

    #[test]
    fn simulate_takes_positional_seconds() {
        assert_eq!(
            parse(&["simulate", "30"]),
            CliAction::Simulate {
                debug_enabled: false,
                seconds: 30.0,
                multiplier: 0.0,
                config_dir: None,
                reduced_motion: false,
            }
        );
    }

    #[test]
    fn simulate_accepts_multiplier() {
        assert_eq!(
            parse(&["simulate", "10", "--multiplier", "60"]),
            CliAction::Simulate {
                debug_enabled: false,
                seconds: 10.0,
                multiplier: 60.0,
                config_dir: None,
                reduced_motion: false,
            }
        );
    }

    #[test]
    fn simulate_honors_reduced_motion() {
        assert_eq!(
            parse(&["simulate", "10", "--reduced-motion"]),
            CliAction::Simulate {
                debug_enabled: false,
                seconds: 10.0,
                multiplier: 0.0,
                config_dir: None,
                reduced_motion: true,
            }
        );
    }

    #[test]
    fn simulate_without_seconds_is_an_error() {
        assert_eq!(parse(&["simulate"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["simulate", "-4"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn help_and_version_win() {
        assert_eq!(parse(&["--help"]), CliAction::ShowHelp);
        assert_eq!(parse(&["-V"]), CliAction::ShowVersion);
    }

    #[test]
    fn unknown_arguments_show_help() {
        assert_eq!(parse(&["--frobnicate"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn config_without_value_is_an_error() {
        assert_eq!(parse(&["--config"]), CliAction::ShowHelpDueToError);
    }
}
