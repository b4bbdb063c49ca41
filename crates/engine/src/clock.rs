//! Fixed timestep scheduler.

/// Converts wall-clock time into a number of fixed ticks.
///
/// When the host falls behind by more than `max_catch_up` ticks the surplus
/// is dropped instead of being replayed in a burst.
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_ms: u32,
    max_catch_up: u32,
    accumulator_ms: u64,
}

impl FrameClock {
    /// Both arguments are clamped to at least 1.
    pub fn new(tick_ms: u32, max_catch_up: u32) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            max_catch_up: max_catch_up.max(1),
            accumulator_ms: 0,
        }
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Add `elapsed_ms` and return how many ticks to run now.
    pub fn advance(&mut self, elapsed_ms: u64) -> u32 {
        let tick = self.tick_ms as u64;
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);

        let due = self.accumulator_ms / tick;
        if due > self.max_catch_up as u64 {
            self.accumulator_ms %= tick;
            self.max_catch_up
        } else {
            self.accumulator_ms -= due * tick;
            due as u32
        }
    }

    /// Time left until the next tick is due.
    pub fn until_next_ms(&self) -> u64 {
        (self.tick_ms as u64).saturating_sub(self.accumulator_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_partial_ticks() {
        let mut c = FrameClock::new(16, 4);
        assert_eq!(c.advance(10), 0);
        assert_eq!(c.until_next_ms(), 6);
        assert_eq!(c.advance(6), 1);
        assert_eq!(c.until_next_ms(), 16);
    }

    #[test]
    fn runs_several_ticks_after_a_stall() {
        let mut c = FrameClock::new(16, 4);
        assert_eq!(c.advance(50), 3);
        assert_eq!(c.until_next_ms(), 14);
    }

    #[test]
    fn drops_time_beyond_catch_up_limit() {
        let mut c = FrameClock::new(16, 4);
        assert_eq!(c.advance(1_000), 4);
        // 1000 % 16 = 8 remains.
        assert_eq!(c.until_next_ms(), 8);
        assert_eq!(c.advance(0), 0);
    }

    #[test]
    fn zero_tick_is_clamped() {
        let mut c = FrameClock::new(0, 0);
        assert_eq!(c.tick_ms(), 1);
        assert_eq!(c.advance(3), 1);
    }
}
