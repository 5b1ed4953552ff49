//! Time source abstraction for real and simulated time.
//!
//! The carousel timer never reads the system clock directly; it asks a
//! [`TimeSource`]. Interactive runs use [`RealTimeSource`], while headless
//! simulation and tests use [`SimulatedTimeSource`], whose clock only moves
//! when it is told to. That makes "let several intervals pass" an instant,
//! deterministic operation.

use chrono::{DateTime, Duration as ChronoDuration, Local};
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Global time source, used by the logger and the binary.
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting time operations
pub trait TimeSource: Send + Sync {
    /// Monotonic "now", used for timer deadlines.
    fn now(&self) -> Instant;

    /// Wall-clock time, used for log timestamps.
    fn wall_clock(&self) -> DateTime<Local>;

    /// Check if this is a simulated time source.
    fn is_simulated(&self) -> bool;
}

/// Real-time implementation backed by the system clocks.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall_clock(&self) -> DateTime<Local> {
        Local::now()
    }

    fn is_simulated(&self) -> bool {
        false
    }
}

/// Manually advanced clock.
///
/// Time only passes through [`advance`](Self::advance), so a simulated run
/// covering minutes of slideshow time completes immediately.
pub struct SimulatedTimeSource {
    origin: Instant,
    start_time: DateTime<Local>,
    elapsed: Mutex<Duration>,
}

impl SimulatedTimeSource {
    /// Create a simulated clock starting at the current local time.
    pub fn starting_now() -> Self {
        Self {
            origin: Instant::now(),
            start_time: Local::now(),
            elapsed: Mutex::new(Duration::ZERO),
        }
    }

    /// Move the clock forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        let mut elapsed = self.elapsed.lock().unwrap_or_else(|e| e.into_inner());
        *elapsed += duration;
    }

    /// Total simulated time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TimeSource for SimulatedTimeSource {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    fn wall_clock(&self) -> DateTime<Local> {
        let elapsed = ChronoDuration::from_std(self.elapsed()).unwrap_or(ChronoDuration::zero());
        self.start_time + elapsed
    }

    fn is_simulated(&self) -> bool {
        true
    }
}

/// Initialize the global time source (call once at startup).
pub fn init_time_source(source: Arc<dyn TimeSource>) {
    TIME_SOURCE.set(source).ok();
}

/// Check if the global time source has been initialized.
pub fn is_initialized() -> bool {
    TIME_SOURCE.get().is_some()
}

/// Wall-clock time from the global time source, or the system clock when
/// none is installed.
pub fn wall_clock() -> DateTime<Local> {
    TIME_SOURCE
        .get()
        .map_or_else(Local::now, |source| source.wall_clock())
}

/// Check if we're running in simulation mode.
pub fn is_simulated() -> bool {
    TIME_SOURCE
        .get()
        .is_some_and(|source| source.is_simulated())
}
