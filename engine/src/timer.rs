//! The auto-mask countdown.
//!
//! One deadline per row, owned by the app state. Arming replaces any
//! previous deadline, so countdowns never stack; expiry fires at most
//! once before the timer is rearmed or discarded. The frame loop
//! observes expiry by passing the current instant to [`MaskTimer::fire`],
//! which lets tests drive the clock.

use std::time::{Duration, Instant};

/// A single cancellable countdown. `arm` and `cancel` are the only
/// operations; the host runtime's timer primitive never leaks in here.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskTimer {
    deadline: Option<Instant>,
}

impl MaskTimer {
    /// (Re)arm the countdown. Any previous pending deadline is replaced.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the deadline has passed; firing disarms.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
