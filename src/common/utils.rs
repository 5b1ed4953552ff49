//! Small shared helpers: path display, duration formatting and terminal setup.

use anyhow::{Context, Result};
use crossterm::{cursor, execute, terminal};
use std::io::stdout;
use std::path::Path;
use std::time::Duration;

/// Render a path for logs with the home directory shortened to `~`.
pub fn private_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        return Path::new("~").join(rest).display().to_string();
    }
    path.display().to_string()
}

/// Format a duration as seconds with one decimal, e.g. `2.0s`.
pub fn format_duration(duration: Duration) -> String {
    format!("{:.1}s", duration.as_secs_f64())
}

/// RAII guard that puts the terminal in raw mode with a hidden cursor and
/// restores it on drop, on every exit path.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw terminal mode")?;
        if let Err(e) = execute!(stdout(), cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e).context("Failed to hide cursor");
        }
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), cursor::Show);
        let _ = terminal::disable_raw_mode();
        println!();
    }
}
