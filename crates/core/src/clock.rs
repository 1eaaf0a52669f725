//! Gravity clock - turns elapsed wall time into discrete gravity ticks
//!
//! The shell feeds elapsed milliseconds every frame; the clock reports how many
//! fixed-interval ticks fell due. The session stops the clock on game over and
//! resumes it on restart.

use crate::types::DEFAULT_TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    accumulated_ms: u32,
    running: bool,
}

impl GravityClock {
    /// Create a running clock. An interval of 0 is treated as 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            running: true,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time accumulated towards the next tick.
    pub fn pending_ms(&self) -> u32 {
        self.accumulated_ms
    }

    /// Add elapsed time and return how many ticks are now due.
    ///
    /// Leftover time carries into the next call. A stopped clock never fires.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        let due = self.accumulated_ms / self.interval_ms;
        self.accumulated_ms %= self.interval_ms;
        due
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated_ms = 0;
    }

    /// Start ticking again from a fresh interval.
    pub fn resume(&mut self) {
        self.running = true;
        self.accumulated_ms = 0;
    }
}

impl Default for GravityClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_MS)
    }
}
