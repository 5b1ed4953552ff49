//! Command-line argument parsing and processing.
//!
//! Turns the raw argument list into a [`CliAction`]. Global flags may appear
//! anywhere; the first non-flag argument selects a subcommand.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the interactive terminal carousel
    Run {
        debug_enabled: bool,
        config_dir: Option<String>,
        log_file: Option<String>,
    },
    /// Fast-forward a headless run over `duration_ms` of simulated time
    Simulate {
        debug_enabled: bool,
        config_dir: Option<String>,
        log_file: Option<String>,
        duration_ms: u64,
    },
    /// Show help, optionally for one command
    Help { command: Option<String> },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments (including the program name) into a
    /// structured result.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut config_dir: Option<String> = None;
        let mut log_file: Option<String> = None;
        let mut positionals: Vec<String> = Vec::new();

        let mut idx = 0;
        while idx < args_vec.len() {
            let arg = args_vec[idx].as_str();
            match arg {
                "--debug" | "-d" => debug_enabled = true,
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--config" | "-c" | "--log" | "-l" => {
                    let Some(value) = args_vec.get(idx + 1).filter(|v| !v.starts_with('-'))
                    else {
                        log_warning!("Missing value for {}", arg);
                        return ParsedArgs {
                            action: CliAction::ShowHelpDueToError,
                        };
                    };
                    if matches!(arg, "--config" | "-c") {
                        config_dir = Some(value.clone());
                    } else {
                        log_file = Some(value.clone());
                    }
                    idx += 1;
                }
                _ if arg.starts_with('-') => {
                    log_warning!("Unknown option: {}", arg);
                    return ParsedArgs {
                        action: CliAction::ShowHelpDueToError,
                    };
                }
                _ => positionals.push(arg.to_string()),
            }
            idx += 1;
        }

        if display_version {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }
        if display_help {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }

        let action = match positionals.split_first() {
            None => CliAction::Run {
                debug_enabled,
                config_dir,
                log_file,
            },
            Some((command, rest)) => match command.as_str() {
                "help" | "h" => match rest {
                    [] => CliAction::Help { command: None },
                    [topic] => CliAction::Help {
                        command: Some(topic.clone()),
                    },
                    _ => CliAction::ShowHelpDueToError,
                },
                "simulate" | "S" => match rest {
                    [duration] => match duration.parse::<u64>() {
                        Ok(duration_ms) if duration_ms > 0 => CliAction::Simulate {
                            debug_enabled,
                            config_dir,
                            log_file,
                            duration_ms,
                        },
                        _ => {
                            log_warning!(
                                "Invalid duration '{}'. Usage: carousel simulate <duration_ms>",
                                duration
                            );
                            CliAction::ShowHelpDueToError
                        }
                    },
                    [] => {
                        log_warning!(
                            "Missing duration. Usage: carousel simulate <duration_ms>"
                        );
                        CliAction::ShowHelpDueToError
                    }
                    _ => CliAction::ShowHelpDueToError,
                },
                unknown => {
                    log_warning!("Unknown command: {}", unknown);
                    CliAction::ShowHelpDueToError
                }
            },
        };

        ParsedArgs { action }
    }
}
