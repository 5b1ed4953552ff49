//! Binary entry point: parses arguments and dispatches to a command.
//!
//! The flow is:
//! 1. Argument parsing and early exit for help/version
//! 2. Optional file logging and configuration directory override
//! 3. Configuration loading
//! 4. Running the interactive carousel or a headless simulation
//! 5. Logging the outcome and mapping it to an exit code

use anyhow::Result;
use std::sync::Arc;

use carousel::args::{CliAction, ParsedArgs};
use carousel::commands::{execute, help, report, run, simulate};
use carousel::common::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use carousel::config::{self, Config};
use carousel::time_source::RealTimeSource;
use carousel::{log_debug, log_end, log_pipe, log_version};

fn main() {
    let parsed = ParsedArgs::parse(std::env::args());

    let exit_code = match parsed.action {
        CliAction::ShowHelp => {
            help::display_usage();
            EXIT_SUCCESS
        }
        CliAction::ShowHelpDueToError => {
            help::display_usage();
            EXIT_FAILURE
        }
        CliAction::ShowVersion => {
            log_version!();
            log_end!();
            EXIT_SUCCESS
        }
        CliAction::Help { command } => report(help::run_help_command(command.as_deref())),
        CliAction::Run {
            debug_enabled,
            config_dir,
            log_file,
        } => execute(log_file, || {
            run_with_setup(config_dir, debug_enabled, |config| {
                run::run_interactive(config, Arc::new(RealTimeSource), debug_enabled).map(|_| ())
            })
        }),
        CliAction::Simulate {
            debug_enabled,
            config_dir,
            log_file,
            duration_ms,
        } => execute(log_file, || {
            run_with_setup(config_dir, debug_enabled, |config| {
                simulate::handle_simulate_command(config, duration_ms, debug_enabled).map(|_| ())
            })
        }),
    };

    std::process::exit(exit_code);
}

/// Shared setup for commands that host a carousel.
fn run_with_setup(
    config_dir: Option<String>,
    debug_enabled: bool,
    command: impl FnOnce(&Config) -> Result<()>,
) -> Result<()> {
    log_version!();
    if debug_enabled {
        log_pipe!();
        log_debug!("Debug mode enabled - logging every tick and navigation");
    }

    config::set_config_dir(config_dir)?;
    let config_path = config::get_config_path()?;
    let config = Config::load()?;
    config.log_config(&config_path);

    command(&config)?;
    log_end!();
    Ok(())
}
