//! Periodic opportunity timer
//!
//! Fires at most once per period on a fixed grid anchored at the last
//! restart. If polling stalls for longer than a period, the missed
//! opportunities are dropped and the grid re-aligns to the poll time.

/// Fixed-period timer polled from the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeriodicTimer {
    period_ms: u32,
    next_due_ms: u64,
}

impl PeriodicTimer {
    /// Create a timer whose first firing is one period after `now_ms`
    pub fn new(period_ms: u32, now_ms: u64) -> Self {
        Self {
            period_ms,
            next_due_ms: now_ms + u64::from(period_ms),
        }
    }

    /// Re-anchor the grid at `now_ms`
    pub fn restart(&mut self, now_ms: u64) {
        self.next_due_ms = now_ms + u64::from(self.period_ms);
    }

    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    /// Returns true if a period boundary has been reached since the last firing
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        self.next_due_ms += u64::from(self.period_ms);
        if self.next_due_ms <= now_ms {
            self.next_due_ms = now_ms + u64::from(self.period_ms);
        }
        true
    }
}
