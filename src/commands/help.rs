//! Help output for the carousel binary.

use anyhow::Result;

/// Display general usage (for `--help` and argument errors).
pub fn display_usage() {
    log_version!();
    log_block_start!("Usage: carousel [OPTIONS] [COMMAND]");
    log_block_start!("Commands:");
    log_indented!("(none)                      Run the carousel in this terminal");
    log_indented!("simulate, S <duration_ms>   Fast-forward a headless run");
    log_indented!("help, h [COMMAND]           Show detailed help for a command");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>   Use <dir>/carousel.toml");
    log_indented!("-d, --debug          Log every timer tick and navigation");
    log_indented!("-l, --log <file>     Write log output to <file>");
    log_indented!("-h, --help           Show this help");
    log_indented!("-V, --version        Show version");
    log_end!();
}

/// Run the help command (dispatcher)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_usage(),
        Some("run") => display_run_help(),
        Some("simulate") | Some("S") => display_simulate_help(),
        Some(unknown) => {
            log_warning!("Unknown command: {}", unknown);
            display_usage();
        }
    }
    Ok(())
}

fn display_run_help() {
    log_version!();
    log_block_start!("carousel - Run the carousel interactively");
    log_block_start!("Keys:");
    log_indented!("Left / Right      Previous / next slide (stops at the ends)");
    log_indented!("Tab / Shift+Tab   Move indicator focus");
    log_indented!("Enter / Space     Activate the focused indicator");
    log_indented!("1-9               Click indicator N");
    log_indented!("p                 Toggle play/pause");
    log_indented!("s / r             Pause / resume");
    log_indented!("q, Esc, Ctrl+C    Quit");
    log_end!();
}

fn display_simulate_help() {
    log_version!();
    log_block_start!("simulate - Fast-forward a headless run");
    log_block_start!("Usage: carousel simulate <duration_ms>");
    log_block_start!("Description:");
    log_indented!("Runs the carousel against a simulated clock for <duration_ms>");
    log_indented!("of slideshow time and logs every slide change. Completes");
    log_indented!("instantly; timestamps show the simulated time.");
    log_block_start!("Examples:");
    log_indented!("# Ten seconds with the default 2000ms interval (five advances)");
    log_indented!("carousel simulate 10000");
    log_end!();
}
