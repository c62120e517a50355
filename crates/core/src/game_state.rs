//! Game state module - one round of Snake
//!
//! This module ties together the snake, collision detection, food placement and the
//! score/speed bookkeeping. It knows nothing about menus or pausing beyond a flag;
//! flow control lives in the engine crate.

use tracing::{debug, trace};

use crate::board::Board;
use crate::collision::{Collision, CollisionDetector};
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::food::{score_derived, FoodSpawner};
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, Point};

/// Result of a single move attempt that did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Head advanced, tail followed
    Moved,
    /// Head landed on food; the snake grew and new food was placed
    Ate,
    /// Head landed on food and no free cell is left for the next one
    BoardFull,
    /// Move refused; nothing changed
    Collision(Collision),
}

impl MoveOutcome {
    /// True when the round cannot continue after this outcome.
    pub fn ends_round(self) -> bool {
        matches!(self, MoveOutcome::Collision(_) | MoveOutcome::BoardFull)
    }
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    snake: Snake,
    direction: Direction,
    /// Heading of the last committed move; the neck lies opposite to it.
    last_move: Direction,
    food: Point,
    spawner: FoodSpawner,
    detector: CollisionDetector,
    score: u32,
    speed_ms: u32,
    paused: bool,
    foods_eaten: u32,
    moves: u64,
}

impl GameState {
    /// Start a fresh round from `config`.
    pub fn new(mut config: GameConfig) -> Self {
        if config.fit_start() {
            debug!(
                x = config.start.x,
                y = config.start.y,
                length = config.initial_length,
                "start moved onto the board"
            );
        }
        let snake = Snake::new(
            config.start,
            config.start_direction,
            config.initial_length,
            config.max_segments,
        );
        let mut spawner = FoodSpawner::from_config(&config);
        let food = spawner
            .respawn(0, &snake)
            .unwrap_or_else(|| score_derived(0, config.width, config.height));

        Self {
            detector: CollisionDetector::from_config(&config),
            direction: config.start_direction,
            last_move: config.start_direction,
            speed_ms: config.initial_speed_ms,
            snake,
            food,
            spawner,
            score: 0,
            paused: false,
            foods_eaten: 0,
            moves: 0,
            config,
        }
    }

    /// Start a round from an explicit snake and food position.
    pub fn from_parts(config: GameConfig, snake: Snake, direction: Direction, food: Point) -> Self {
        let mut state = Self::new(config);
        state.snake = snake;
        state.direction = direction;
        state.last_move = direction;
        state.food = food;
        state
    }

    /// Throw the round away and start over with the same configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction of the most recent move, or the start heading before the first one.
    pub fn last_move(&self) -> Direction {
        self.last_move
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn foods_eaten(&self) -> u32 {
        self.foods_eaten
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Move the food, e.g. to stage a position.
    pub fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    /// Change heading. A reversal onto the body is ignored.
    ///
    /// Several turns can arrive between two moves, so a turn is checked against both the
    /// stored heading and the last move actually made. Returns true if the stored
    /// direction changed.
    pub fn update_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction
            || direction.is_opposite(self.direction)
            || direction.is_opposite(self.last_move)
        {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advance one cell in the stored direction.
    pub fn step(&mut self) -> Result<MoveOutcome, EngineError> {
        self.move_snake(self.direction)
    }

    /// Advance the head one cell in `direction`.
    ///
    /// Collisions leave the state untouched and come back as
    /// [`MoveOutcome::Collision`]. An error means the snake could not grow; the state
    /// is untouched then as well.
    pub fn move_snake(&mut self, direction: Direction) -> Result<MoveOutcome, EngineError> {
        let candidate = self.snake.head().step(direction);
        let eats = candidate == self.food;

        let collision = self.detector.classify(candidate, &self.snake, eats);
        if collision.is_fatal() {
            debug!(?collision, x = candidate.x, y = candidate.y, "move refused");
            return Ok(MoveOutcome::Collision(collision));
        }

        if eats {
            self.snake.reserve_growth()?;
        }

        self.snake.push_head(candidate);
        self.last_move = direction;
        self.moves += 1;
        trace!(x = candidate.x, y = candidate.y, len = self.snake.len(), "moved");

        if !eats {
            self.snake.pop_tail();
            return Ok(MoveOutcome::Moved);
        }

        self.score += self.config.score_per_food;
        self.foods_eaten += 1;
        self.speed_ms = self
            .speed_ms
            .saturating_sub(self.config.speed_step_ms)
            .max(self.config.speed_floor_ms);

        match self.spawner.respawn(self.score, &self.snake) {
            Some(food) => {
                self.food = food;
                debug!(
                    score = self.score,
                    speed_ms = self.speed_ms,
                    food_x = food.x,
                    food_y = food.y,
                    "food eaten"
                );
                Ok(MoveOutcome::Ate)
            }
            None => {
                debug!(score = self.score, "no free cell left for food");
                Ok(MoveOutcome::BoardFull)
            }
        }
    }

    /// Rebuild `board` from the current snake and food.
    pub fn render_board(&self, board: &mut Board) {
        board.rebuild(&self.snake, self.food);
    }

    pub fn board(&self) -> Board {
        Board::from_parts(self.config.width, self.config.height, &self.snake, self.food)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.score = self.score;
        out.speed_ms = self.speed_ms;
        out.direction = self.direction;
        out.paused = self.paused;
        out.food = self.food;
        out.segments.clear();
        out.segments.extend(self.snake.segments());
        out.foods_eaten = self.foods_eaten;
        out.moves = self.moves;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
