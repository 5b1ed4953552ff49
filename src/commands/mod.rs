//! Command handlers for the carousel binary.
//!
//! Each command hosts a [`Carousel`](crate::carousel::Carousel) in a different
//! surface: `run` in an interactive terminal, `simulate` headless under a
//! fast-forwarded clock.

pub mod help;
pub mod run;
pub mod simulate;

use anyhow::Result;

use crate::carousel::{Carousel, RenderTarget};
use crate::common::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::logger::Log;

/// Run `command` with optional file logging and map its outcome to an exit
/// code.
///
/// The log file stays open until the failure report has been written.
pub fn execute(log_file: Option<String>, command: impl FnOnce() -> Result<()>) -> i32 {
    let _log_guard = match log_file.map(Log::start_file_logging).transpose() {
        Ok(guard) => guard,
        Err(e) => return report(Err(e)),
    };
    report(command())
}

/// Log a failure with its cause chain and return the exit code.
pub fn report(result: Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            log_error_exit!("{}", e);
            for cause in e.chain().skip(1) {
                log_indented!("Caused by: {}", cause);
            }
            log_end!();
            EXIT_FAILURE
        }
    }
}

/// One-line description of the carousel's current state for logs.
pub(crate) fn describe<V: RenderTarget>(carousel: &Carousel<V>) -> String {
    let slide = carousel
        .active_slide()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "(no slide)".to_string());
    format!(
        "Slide {}/{}: {} [{}, aria-live={}]",
        carousel.current_index(),
        carousel.len(),
        slide,
        if carousel.is_auto_advancing() {
            "playing"
        } else {
            "paused"
        },
        carousel.announcement()
    )
}
