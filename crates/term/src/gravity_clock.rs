//! Fixed-interval tick source that drives engine gravity.
//!
//! The clock is time-agnostic: the host passes a monotonic millisecond
//! reading, which keeps it deterministic under test.

#[derive(Debug, Clone)]
pub struct GravityClock {
    interval_ms: u64,
    next_due_ms: u64,
    stopped: bool,
}

impl GravityClock {
    /// Clock whose first tick is due one interval after `now_ms`.
    ///
    /// An interval of 0 is treated as 1 ms.
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        let interval_ms = interval_ms.max(1);
        Self {
            interval_ms,
            next_due_ms: now_ms.saturating_add(interval_ms),
            stopped: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Number of ticks that fell due up to `now_ms`, advancing the schedule.
    ///
    /// A host that stalls for several intervals gets them all back at once.
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        if self.stopped || now_ms < self.next_due_ms {
            return 0;
        }
        let due = (now_ms - self.next_due_ms) / self.interval_ms + 1;
        self.next_due_ms += due * self.interval_ms;
        due.min(u32::MAX as u64) as u32
    }

    /// Milliseconds until the next tick, 0 if one is already due.
    ///
    /// `None` once stopped.
    pub fn until_next_ms(&self, now_ms: u64) -> Option<u64> {
        (!self.stopped).then(|| self.next_due_ms.saturating_sub(now_ms))
    }

    /// Stop ticking for good, e.g. after game over.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
