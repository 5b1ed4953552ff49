//! Shutdown signal handling.
//!
//! SIGINT, SIGTERM and SIGHUP clear a shared `running` flag that the host
//! loop checks between polls, so the carousel is always torn down through
//! the normal exit path.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

/// Signal handling state shared with the host loop.
pub struct SignalState {
    /// Cleared once a shutdown signal arrives.
    pub running: Arc<AtomicBool>,
}

impl SignalState {
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Register handlers for shutdown signals on a background thread.
pub fn setup_signal_handler(debug_enabled: bool) -> Result<SignalState> {
    let running = Arc::new(AtomicBool::new(true));

    let mut signals =
        Signals::new([SIGINT, SIGTERM, SIGHUP]).context("failed to register signal handlers")?;

    let running_clone = Arc::clone(&running);
    thread::spawn(move || {
        if let Some(sig) = signals.forever().next() {
            if debug_enabled {
                log_pipe!();
                log_debug!("Received signal {sig}, shutting down");
            }
            running_clone.store(false, Ordering::SeqCst);
        }
    });

    Ok(SignalState { running })
}
