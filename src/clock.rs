//! Fixed-rate tick cadence
//!
//! Turns wall-clock frame time into a whole number of simulation ticks. The
//! simulation never sees elapsed time; this only decides how many ticks to
//! run.

use std::time::Duration;

use crate::consts::{MAX_SUBSTEPS, TICK_RATE_HZ};

/// Longest frame the accumulator will absorb
const MAX_FRAME: Duration = Duration::from_millis(100);

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedClock {
    tick: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(TICK_RATE_HZ, MAX_SUBSTEPS)
    }
}

impl FixedClock {
    /// `tick_rate_hz` and `max_substeps` are clamped to at least 1
    pub fn new(tick_rate_hz: u32, max_substeps: u32) -> Self {
        Self {
            tick: Duration::from_secs(1) / tick_rate_hz.max(1),
            accumulator: Duration::ZERO,
            max_substeps: max_substeps.max(1),
        }
    }

    /// Duration of one tick
    pub fn tick_duration(&self) -> Duration {
        self.tick
    }

    /// Add a frame's elapsed time and return how many ticks to run now
    ///
    /// Long frames are clamped and at most `max_substeps` ticks are returned,
    /// so a stall never turns into a burst of catch-up ticks.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed.min(MAX_FRAME);

        let mut ticks = 0;
        while self.accumulator >= self.tick && ticks < self.max_substeps {
            self.accumulator -= self.tick;
            ticks += 1;
        }
        if ticks == self.max_substeps && self.accumulator >= self.tick {
            log::debug!("Dropping {:?} of simulation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    /// Time until the next tick is due
    pub fn until_next_tick(&self) -> Duration {
        self.tick.saturating_sub(self.accumulator)
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_period() {
        let mut clock = FixedClock::new(60, 8);
        let tick = clock.tick_duration();
        assert_eq!(clock.advance(tick / 2), 0);
        assert_eq!(clock.advance(tick / 2), 1);
        assert_eq!(clock.advance(tick * 3), 3);
    }

    #[test]
    fn test_default_runs_at_tick_rate() {
        let mut clock = FixedClock::default();
        assert_eq!(clock.tick_duration(), Duration::from_secs(1) / TICK_RATE_HZ);
        assert_eq!(clock.advance(Duration::from_millis(50)), 3);
    }

    #[test]
    fn test_caps_substeps() {
        let mut clock = FixedClock::new(60, 4);
        assert_eq!(clock.advance(Duration::from_secs(5)), 4);
        // Backlog dropped, nothing left to catch up
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_until_next_tick() {
        let mut clock = FixedClock::new(10, 8);
        clock.advance(Duration::from_millis(40));
        assert_eq!(clock.until_next_tick(), Duration::from_millis(60));
        clock.reset();
        assert_eq!(clock.until_next_tick(), Duration::from_millis(100));
    }
}
