//! Tick clocks for the outer loop.
//!
//! The engine never reads time itself; the loop asks a [`Clock`] how many fixed
//! ticks have elapsed and feeds that many `tick()` calls to the state machine.

use std::time::{Duration, Instant};

use crate::types::TICK_HZ;

/// Monotonic source of fixed-rate tick counts.
pub trait Clock {
    /// Ticks elapsed since the clock started. Never decreases.
    fn now_ticks(&self) -> u64;

    /// Wall time until the next tick boundary.
    fn until_next_tick(&self) -> Duration;
}

/// Length of one tick at [`TICK_HZ`].
pub fn tick_duration() -> Duration {
    Duration::from_nanos(1_000_000_000 / TICK_HZ as u64)
}

/// Real-time clock at [`TICK_HZ`] backed by [`Instant`].
#[derive(Debug, Clone)]
pub struct TickClock {
    start: Instant,
    tick: Duration,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            tick: tick_duration(),
        }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TickClock {
    fn now_ticks(&self) -> u64 {
        (self.start.elapsed().as_nanos() / self.tick.as_nanos()) as u64
    }

    fn until_next_tick(&self) -> Duration {
        let elapsed = self.start.elapsed().as_nanos();
        let tick = self.tick.as_nanos();
        let into_tick = elapsed % tick;
        Duration::from_nanos((tick - into_tick) as u64)
    }
}

/// Hand-driven clock for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    ticks: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, ticks: u64) {
        self.ticks = self.ticks.saturating_add(ticks);
    }
}

impl Clock for ManualClock {
    fn now_ticks(&self) -> u64 {
        self.ticks
    }

    fn until_next_tick(&self) -> Duration {
        Duration::ZERO
    }
}
