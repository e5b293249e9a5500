//! Tick pacing for the fixed-rate loop

use std::time::{Duration, Instant};

/// Measures each tick against a per-tick budget of `1s / fps`.
///
/// Best effort only: a slow tick delays the next one and nothing catches up.
#[derive(Debug, Clone)]
pub struct TickClock {
    /// Time allotted to one tick
    pub frame_budget: Duration,
    /// Start of the tick in progress
    tick_started: Instant,
}

impl TickClock {
    /// Create a clock for the given rate. A zero rate is treated as 1 tick/s;
    /// rejecting it is the configuration layer's job.
    pub fn new(fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / fps.max(1),
            tick_started: Instant::now(),
        }
    }

    /// Mark the start of a tick
    pub fn begin_tick(&mut self) {
        self.tick_started = Instant::now();
    }

    /// Time spent since [`TickClock::begin_tick`]
    pub fn elapsed(&self) -> Duration {
        self.tick_started.elapsed()
    }

    /// How long to sleep after a tick that took `elapsed`
    pub fn remaining_after(&self, elapsed: Duration) -> Duration {
        self.frame_budget.saturating_sub(elapsed)
    }

    /// How long to sleep before the next tick
    pub fn remaining(&self) -> Duration {
        self.remaining_after(self.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_from_fps() {
        let clock = TickClock::new(50);
        assert_eq!(clock.frame_budget, Duration::from_millis(20));
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let clock = TickClock::new(0);
        assert_eq!(clock.frame_budget, Duration::from_secs(1));
    }

    #[test]
    fn test_remaining_saturates() {
        let clock = TickClock::new(100);
        assert_eq!(
            clock.remaining_after(Duration::from_millis(4)),
            Duration::from_millis(6)
        );
        assert_eq!(clock.remaining_after(Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn test_fresh_tick_has_most_of_budget_left() {
        let mut clock = TickClock::new(1);
        clock.begin_tick();
        assert!(clock.remaining() > Duration::from_millis(500));
    }
}
