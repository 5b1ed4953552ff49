//! Structured logging with box-drawing output.
//!
//! Every line the carousel prints goes through the macros in this module so the
//! terminal output keeps a single visual style:
//!
//! ```text
//! ┏ carousel v0.3.0 ━━╸
//! ┃
//! ┣ Loading configuration
//! ┃   Interval: 2000ms
//! ┣[INFO] Attached 5 slides, 5 indicators
//! ╹
//! ```
//!
//! ## Conventions
//!
//! - **`log_block_start!`** opens a new conceptual block (lifecycle phases,
//!   config loading). It prints an empty pipe first for spacing.
//! - **`log_decorated!`** continues the current block.
//! - **`log_indented!`** lists details that belong to the previous line.
//! - **`log_pipe!`** inserts one empty `┃` line, typically before a
//!   `log_warning!`/`log_error!` that starts its own block.
//! - **`log_version!`** and **`log_end!`** frame the whole run.
//! - **`log_info!`, `log_warning!`, `log_error!`, `log_debug!`** carry a
//!   `[LEVEL]` prefix.
//!
//! Output can be disabled at runtime (`Log::set_enabled(false)`) and routed to
//! a file (`Log::start_file_logging`). When the global time source is
//! simulated every line is prefixed with the simulated wall-clock time.

use std::io::Write;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Sender, channel};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

// Set once when --log is active
static LOG_CHANNEL: OnceLock<Option<Sender<LogMessage>>> = OnceLock::new();

enum LogMessage {
    Formatted(String),
    Shutdown,
}

/// Main logging interface. See the module docs for the macro conventions.
pub struct Log;

impl Log {
    /// Enable or disable logging.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Start routing all output to `file_path`.
    ///
    /// Output is written by a background thread; the returned guard flushes
    /// and joins it on drop. Can only be started once per process.
    pub fn start_file_logging(file_path: String) -> anyhow::Result<LoggerGuard> {
        let (tx, rx) = channel();

        LOG_CHANNEL
            .set(Some(tx.clone()))
            .map_err(|_| anyhow::anyhow!("Logger channel already initialized"))?;

        let handle = std::thread::spawn(move || {
            let mut file = std::fs::File::create(&file_path)?;

            loop {
                match rx.recv() {
                    Ok(LogMessage::Formatted(text)) => {
                        file.write_all(text.as_bytes())?;
                    }
                    Ok(LogMessage::Shutdown) | Err(_) => {
                        file.flush()?;
                        break;
                    }
                }
            }

            Ok::<(), anyhow::Error>(())
        });

        Ok(LoggerGuard {
            tx,
            handle: Some(handle),
        })
    }

    /// Timestamp prefix for simulated runs, `[HH:MM:SS.mmm] `.
    ///
    /// Empty unless the global time source has been initialized with a
    /// simulated clock. Public for macro access.
    pub fn get_timestamp_prefix() -> String {
        if crate::time_source::is_initialized() && crate::time_source::is_simulated() {
            format!("[{}] ", crate::time_source::wall_clock().format("%H:%M:%S%.3f"))
        } else {
            String::new()
        }
    }
}

/// Guard for file logging that flushes and joins the writer thread on drop.
pub struct LoggerGuard {
    tx: Sender<LogMessage>,
    handle: Option<std::thread::JoinHandle<anyhow::Result<()>>>,
}

impl Drop for LoggerGuard {
    fn drop(&mut self) {
        let _ = self.tx.send(LogMessage::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch == 'm' {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Route formatted output to the log file (if any) or stdout. Used by macros.
pub fn write_output(text: &str) {
    // Once the writer thread has shut down, sends fail and output goes to stdout
    if let Some(Some(tx)) = LOG_CHANNEL.get()
        && tx
            .send(LogMessage::Formatted(strip_ansi_codes(text)))
            .is_ok()
    {
        return;
    }
    print!("{text}");
    let _ = std::io::stdout().flush();
}

// # Logging Macros

/// Shared body for the single-line macros below.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_line {
    ($template:literal, $message:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = $message;
            let formatted = format!($template, prefix = prefix, message = message);
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log a decorated message as part of the current block.
#[macro_export]
macro_rules! log_decorated {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_line!("{prefix}┣ {message}\n", format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_line!("{prefix}┣ {message}\n", $expr)
    };
}

/// Log an indented detail line.
#[macro_export]
macro_rules! log_indented {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_line!("{prefix}┃   {message}\n", format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_line!("{prefix}┃   {message}\n", $expr)
    };
}

/// Log an empty pipe line for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {
        $crate::__log_line!("{prefix}┃{message}\n", "")
    };
}

/// Start a new block of related messages.
#[macro_export]
macro_rules! log_block_start {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_line!("{prefix}┃\n{prefix}┣ {message}\n", format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_line!("{prefix}┃\n{prefix}┣ {message}\n", $expr)
    };
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {
        $crate::__log_line!(
            "{prefix}┏ carousel v{message} ━━╸\n",
            env!("CARGO_PKG_VERSION")
        )
    };
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {
        $crate::__log_line!("{prefix}╹{message}\n", "")
    };
}

/// Log a warning in yellow.
#[macro_export]
macro_rules! log_warning {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_line!("{prefix}┣[\x1b[33mWARNING\x1b[0m] {message}\n", format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_line!("{prefix}┣[\x1b[33mWARNING\x1b[0m] {message}\n", $expr)
    };
}

/// Log an error in red.
#[macro_export]
macro_rules! log_error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_line!("{prefix}┣[\x1b[31mERROR\x1b[0m] {message}\n", format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_line!("{prefix}┣[\x1b[31mERROR\x1b[0m] {message}\n", $expr)
    };
}

/// Log an error that terminates the current flow, closing the block with `┗`.
#[macro_export]
macro_rules! log_error_exit {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_line!("{prefix}┃\n{prefix}┗[\x1b[31mERROR\x1b[0m] {message}\n", format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_line!("{prefix}┃\n{prefix}┗[\x1b[31mERROR\x1b[0m] {message}\n", $expr)
    };
}

/// Log an informational message in green.
#[macro_export]
macro_rules! log_info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_line!("{prefix}┣[\x1b[32mINFO\x1b[0m] {message}\n", format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_line!("{prefix}┣[\x1b[32mINFO\x1b[0m] {message}\n", $expr)
    };
}

/// Log a debug message in green.
#[macro_export]
macro_rules! log_debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_line!("{prefix}┣[\x1b[32mDEBUG\x1b[0m] {message}\n", format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_line!("{prefix}┣[\x1b[32mDEBUG\x1b[0m] {message}\n", $expr)
    };
}
