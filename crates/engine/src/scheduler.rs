//! Movement gate: turns a speed in milliseconds into "move on this tick or not".

use crate::types::TICK_HZ;

/// Number of fixed ticks between moves for `speed_ms`.
pub fn ticks_per_move(speed_ms: u32) -> u64 {
    (speed_ms as u64 * TICK_HZ as u64) / 1000
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementScheduler {
    speed_ms: u32,
    ticks_per_move: u64,
    current_tick: u64,
    last_move_tick: u64,
}

impl MovementScheduler {
    pub fn new(speed_ms: u32) -> Self {
        Self {
            speed_ms,
            ticks_per_move: ticks_per_move(speed_ms),
            current_tick: 0,
            last_move_tick: 0,
        }
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn ticks_per_move(&self) -> u64 {
        self.ticks_per_move
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    pub fn last_move_tick(&self) -> u64 {
        self.last_move_tick
    }

    /// Change the speed. The tick counters are kept.
    pub fn set_speed(&mut self, speed_ms: u32) {
        if speed_ms != self.speed_ms {
            self.speed_ms = speed_ms;
            self.ticks_per_move = ticks_per_move(speed_ms);
        }
    }

    /// Advance the internal counter by one tick and report whether a move is due.
    pub fn tick(&mut self) -> bool {
        self.current_tick += 1;
        self.poll(self.current_tick)
    }

    /// Report whether a move is due at tick `now`, recording it as the last move if so.
    pub fn poll(&mut self, now: u64) -> bool {
        self.current_tick = self.current_tick.max(now);
        if now.saturating_sub(self.last_move_tick) >= self.ticks_per_move {
            self.last_move_tick = now;
            return true;
        }
        false
    }

    /// Start counting from zero again, e.g. for a new round.
    pub fn reset(&mut self, speed_ms: u32) {
        *self = Self::new(speed_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_per_move_floors() {
        assert_eq!(ticks_per_move(200), 12);
        assert_eq!(ticks_per_move(195), 11);
        assert_eq!(ticks_per_move(50), 3);
        assert_eq!(ticks_per_move(16), 0);
    }

    #[test]
    fn test_moves_every_n_ticks() {
        let mut s = MovementScheduler::new(200);
        let mut due = Vec::new();
        for _ in 0..36 {
            if s.tick() {
                due.push(s.current_tick());
            }
        }
        assert_eq!(due, vec![12, 24, 36]);
    }

    #[test]
    fn test_speed_change_applies_to_next_move() {
        let mut s = MovementScheduler::new(200);
        for _ in 0..12 {
            s.tick();
        }
        assert_eq!(s.last_move_tick(), 12);

        s.set_speed(50);
        assert!(!s.tick());
        assert!(!s.tick());
        assert!(s.tick());
        assert_eq!(s.last_move_tick(), 15);
    }

    #[test]
    fn test_poll_with_external_ticks() {
        let mut s = MovementScheduler::new(100);
        assert!(!s.poll(5));
        assert!(s.poll(6));
        assert!(!s.poll(11));
        assert!(s.poll(40));
        assert_eq!(s.last_move_tick(), 40);
    }

    #[test]
    fn test_zero_threshold_moves_every_tick() {
        let mut s = MovementScheduler::new(10);
        assert!(s.tick());
        assert!(s.tick());
    }

    #[test]
    fn test_reset() {
        let mut s = MovementScheduler::new(200);
        for _ in 0..20 {
            s.tick();
        }
        s.reset(150);
        assert_eq!(s.current_tick(), 0);
        assert_eq!(s.last_move_tick(), 0);
        assert_eq!(s.ticks_per_move(), 9);
    }
}
