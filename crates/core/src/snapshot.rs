use crate::types::{Direction, FlowState, Point, START_POSITION};

/// Read-only copy of everything a renderer or observer needs from one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub flow: FlowState,
    pub score: u32,
    pub speed_ms: u32,
    pub direction: Direction,
    pub paused: bool,
    pub food: Point,
    /// Head first
    pub segments: Vec<Point>,
    pub foods_eaten: u32,
    pub moves: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.flow = FlowState::Menu;
        self.score = 0;
        self.speed_ms = 0;
        self.direction = Direction::Right;
        self.paused = false;
        self.food = Point::default();
        self.segments.clear();
        self.foods_eaten = 0;
        self.moves = 0;
    }

    pub fn head(&self) -> Point {
        self.segments.first().copied().unwrap_or(START_POSITION)
    }

    pub fn length(&self) -> usize {
        self.segments.len()
    }

    /// Nothing changes between frames in these states, so renders can be throttled.
    pub fn is_static(&self) -> bool {
        !matches!(self.flow, FlowState::Playing)
    }

    /// Cheap change detector for render throttling.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mut mix = |v: u64| {
            h ^= v;
            h = h.wrapping_mul(0x0100_0000_01b3);
        };
        mix(self.flow.code() as u64);
        mix(self.score as u64);
        mix(self.speed_ms as u64);
        mix(self.direction.code() as u64);
        mix(self.paused as u64);
        mix(self.food.x as u64);
        mix(self.food.y as u64);
        mix(self.moves);
        mix(self.segments.len() as u64);
        h
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            flow: FlowState::Menu,
            score: 0,
            speed_ms: 0,
            direction: Direction::Right,
            paused: false,
            food: Point::default(),
            segments: Vec::new(),
            foods_eaten: 0,
            moves: 0,
        };
        s.clear();
        s
    }
}
