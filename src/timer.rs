//! Repeating timer handle for the auto-advance cycle.
//!
//! [`IntervalTimer`] is passive: it never spawns a thread or registers a
//! callback. The host event loop asks it whether a deadline has passed
//! (`fire_if_due`) and how long it may wait before asking again
//! (`time_until_next`). A cancelled timer therefore cannot fire later, and
//! nothing outlives the controller that owns it.

use std::time::{Duration, Instant};

/// Opaque, cancellable repeating timer owned by a single controller.
#[derive(Debug)]
pub struct IntervalTimer {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl IntervalTimer {
    /// Create a disarmed timer. Zero intervals are clamped to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_deadline: None,
        }
    }

    /// Arm (or re-arm) the timer so the first tick is one interval after `now`.
    ///
    /// Re-arming replaces the previous schedule; there is never more than one
    /// pending cycle.
    pub fn arm(&mut self, now: Instant) {
        self.next_deadline = Some(now + self.interval);
    }

    /// Cancel the timer. Cancelling a disarmed timer is a no-op.
    pub fn cancel(&mut self) {
        self.next_deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_deadline.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left before the next tick, or `None` when disarmed.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consume one due tick, if any.
    ///
    /// Returns `true` when a deadline at or before `now` was reached; the next
    /// deadline is then scheduled one interval after the consumed one, so a
    /// late caller catches up tick by tick instead of drifting.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next_deadline {
            Some(deadline) if deadline <= now => {
                self.next_deadline = Some(deadline + self.interval);
                true
            }
            _ => false,
        }
    }
}
