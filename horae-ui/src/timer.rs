//! Cooperative debounce timer.
//!
//! The timer never spawns threads or registers callbacks. The host polls it
//! with the current instant on every frame; a scheduled deadline fires at
//! most once.

use std::time::{Duration, Instant};

use tracing::trace;

/// A single pending deadline that can be restarted or cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    /// Creates an idle timer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancels any pending deadline and schedules a new one `delay` after
    /// `now`.
    pub fn restart(&mut self, now: Instant) {
        if self.deadline.is_some() {
            trace!("debounce timer restarted before firing");
        }
        self.deadline = Some(now + self.delay);
    }

    /// Cancels the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true while a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fires the timer if its deadline has passed.
    ///
    /// Returns true exactly once per scheduled deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
