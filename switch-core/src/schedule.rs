//! Wrap-safe periodic task firing off the millisecond tick counter.

/// Bookkeeping for one periodic task.
///
/// Fires when `now.wrapping_sub(last_fired) >= interval_ms`, which stays
/// correct across the 32-bit tick wrap. On fire, `last_fired` is set to
/// `now` unconditionally: one fire per poll, no backlog or catch-up even
/// if several intervals elapsed since the last check.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleEntry {
    last_fired: u32,
    interval_ms: u32,
}

impl ScheduleEntry {
    /// Create an entry armed at tick `now`.
    #[must_use]
    pub const fn new(interval_ms: u32, now: u32) -> Self {
        Self {
            last_fired: now,
            interval_ms,
        }
    }

    /// Check whether the interval has elapsed; if so, re-arm at `now`.
    pub fn poll(&mut self, now: u32) -> bool {
        if now.wrapping_sub(self.last_fired) >= self.interval_ms {
            self.last_fired = now;
            true
        } else {
            false
        }
    }

    /// The configured interval in milliseconds.
    #[inline]
    #[must_use]
    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}
