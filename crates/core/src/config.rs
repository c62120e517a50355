//! Game configuration.
//!
//! Everything here survives a restart; all other game state is rebuilt from it.

use crate::types::{
    Direction, Point, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_LENGTH, INITIAL_SPEED_MS, SCORE_PER_FOOD,
    SPEED_FLOOR_MS, SPEED_STEP_MS, START_POSITION,
};

/// How a new food coordinate is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodStrategy {
    /// Reproducible coordinate derived from the current score.
    ScoreDerived,
    /// Uniformly random coordinate from a seeded generator.
    Seeded(u64),
}

/// Whether a food candidate must land on a free cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodPlacement {
    /// Accept the candidate as is, even under the snake body.
    Unchecked,
    /// Walk forward from the candidate, row-major with wrap-around, to the first free cell.
    ScanForFree,
}

/// Whether the tail cell vacated by a plain move counts as occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailRule {
    /// Every current segment blocks, including the tail about to move away.
    Occupied,
    /// The tail is ignored unless the move eats food (the tail then stays).
    Vacating,
}

/// Configuration for a game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Width of the board in cells
    pub width: i32,
    /// Height of the board in cells
    pub height: i32,
    /// Head position of a fresh snake
    pub start: Point,
    /// Heading of a fresh snake
    pub start_direction: Direction,
    /// Length of a fresh snake
    pub initial_length: usize,
    /// Milliseconds per move at round start
    pub initial_speed_ms: u32,
    /// Lower bound for the speed
    pub speed_floor_ms: u32,
    /// Speed gained per food
    pub speed_step_ms: u32,
    /// Points per food
    pub score_per_food: u32,
    /// Maximum number of segments the snake may own
    pub max_segments: usize,
    pub food_strategy: FoodStrategy,
    pub food_placement: FoodPlacement,
    pub tail_rule: TailRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            start: START_POSITION,
            start_direction: Direction::Right,
            initial_length: INITIAL_LENGTH,
            initial_speed_ms: INITIAL_SPEED_MS,
            speed_floor_ms: SPEED_FLOOR_MS,
            speed_step_ms: SPEED_STEP_MS,
            score_per_food: SCORE_PER_FOOD,
            max_segments: (BOARD_WIDTH * BOARD_HEIGHT) as usize,
            food_strategy: FoodStrategy::ScoreDerived,
            food_placement: FoodPlacement::Unchecked,
            tail_rule: TailRule::Occupied,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size.
    ///
    /// The start position is moved to the board centre if it would not fit.
    pub fn new(width: i32, height: i32) -> Self {
        let mut config = Self {
            width,
            height,
            max_segments: (width.max(1) * height.max(1)) as usize,
            ..Default::default()
        };
        if !config.in_bounds(config.start) {
            config.start = Point::new(width / 2, height / 2);
        }
        config
    }

    pub fn with_speed(mut self, initial_ms: u32, floor_ms: u32) -> Self {
        self.initial_speed_ms = initial_ms.max(floor_ms);
        self.speed_floor_ms = floor_ms;
        self
    }

    /// Head position and heading of a fresh snake. See [`GameConfig::fit_start`] for
    /// starts too close to a wall.
    pub fn with_start(mut self, start: Point, direction: Direction) -> Self {
        self.start = start;
        self.start_direction = direction;
        self
    }

    pub fn with_food(mut self, strategy: FoodStrategy, placement: FoodPlacement) -> Self {
        self.food_strategy = strategy;
        self.food_placement = placement;
        self
    }

    pub fn with_tail_rule(mut self, rule: TailRule) -> Self {
        self.tail_rule = rule;
        self
    }

    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    /// Move the start inward so the whole initial body lies on the board.
    ///
    /// The body trails behind the head, so only the axis of `start_direction` needs
    /// room for `initial_length` cells. On a board too small for that the snake is
    /// shortened instead. Returns true if anything changed.
    pub fn fit_start(&mut self) -> bool {
        let before = (self.width, self.height, self.start, self.initial_length);
        self.width = self.width.max(1);
        self.height = self.height.max(1);

        let span = match self.start_direction {
            Direction::Left | Direction::Right => self.width,
            Direction::Up | Direction::Down => self.height,
        } as usize;
        self.initial_length = self.initial_length.clamp(1, span);

        let tail = (self.initial_length - 1) as i32;
        let mut x = self.start.x.clamp(0, self.width - 1);
        let mut y = self.start.y.clamp(0, self.height - 1);
        match self.start_direction {
            Direction::Right => x = x.max(tail),
            Direction::Left => x = x.min(self.width - 1 - tail),
            Direction::Down => y = y.max(tail),
            Direction::Up => y = y.min(self.height - 1 - tail),
        }
        self.start = Point::new(x, y);

        before != (self.width, self.height, self.start, self.initial_length)
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 25);
        assert_eq!(config.initial_length, 3);
        assert_eq!(config.initial_speed_ms, 200);
        assert_eq!(config.speed_floor_ms, 50);
        assert_eq!(config.speed_step_ms, 5);
        assert_eq!(config.max_segments, 2000);
        assert_eq!(config.food_placement, FoodPlacement::Unchecked);
        assert_eq!(config.tail_rule, TailRule::Occupied);
    }

    #[test]
    fn test_small_board_recentres_start() {
        let config = GameConfig::new(8, 6);
        assert_eq!(config.start, Point::new(4, 3));
        assert_eq!(config.max_segments, 48);
    }

    #[test]
    fn test_fit_start_pulls_body_off_the_wall() {
        let mut config = GameConfig::default().with_start(Point::new(0, 5), Direction::Right);
        assert!(config.fit_start());
        assert_eq!(config.start, Point::new(2, 5));

        let mut config = GameConfig::default().with_start(Point::new(5, 24), Direction::Up);
        assert!(config.fit_start());
        assert_eq!(config.start, Point::new(5, 22));
    }

    #[test]
    fn test_fit_start_keeps_a_start_that_fits() {
        let mut config = GameConfig::default();
        assert!(!config.fit_start());
        assert_eq!(config.start, Point::new(10, 12));
    }

    #[test]
    fn test_fit_start_shortens_snake_on_narrow_board() {
        let mut config = GameConfig::new(2, 6);
        assert!(config.fit_start());
        assert_eq!(config.initial_length, 2);
        assert_eq!(config.start, Point::new(1, 3));
    }

    #[test]
    fn test_speed_never_starts_below_floor() {
        let config = GameConfig::default().with_speed(30, 50);
        assert_eq!(config.initial_speed_ms, 50);
    }
}
