//! Delayed masking of the newest character in password mode.

use std::time::{Duration, Instant};

/// Single-slot cancellable deadline driving the reveal flag.
///
/// The timer never fires on its own; the owner polls it with the current
/// time. Re-arming replaces the pending deadline, so at most one clear is
/// ever outstanding.
#[derive(Clone, Debug, Default)]
pub struct MaskTimer {
    deadline: Option<Instant>,
    revealing: bool,
}

impl MaskTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal the newest character until `now + delay`.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.revealing = true;
        self.deadline = Some(now + delay);
    }

    /// Clear the reveal flag if the deadline has passed.
    ///
    /// Returns `true` when the flag changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                let changed = self.revealing;
                self.revealing = false;
                changed
            }
            _ => false,
        }
    }

    /// Drop the pending deadline, leaving the reveal flag as is.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Hide immediately and drop any pending deadline.
    pub fn reset(&mut self) {
        self.revealing = false;
        self.deadline = None;
    }

    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.revealing
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the next poll can make progress.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
