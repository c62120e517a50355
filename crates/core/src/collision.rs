//! Collision classification for a candidate head position.
//!
//! Walls are checked first and short-circuit the body scan. Food is never a
//! collision; eating is decided after the move commits.

use crate::config::{GameConfig, TailRule};
use crate::snake::Snake;
use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    None,
    Wall,
    SelfCollision,
}

impl Collision {
    pub fn is_fatal(self) -> bool {
        !matches!(self, Collision::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionDetector {
    width: i32,
    height: i32,
    tail_rule: TailRule,
}

impl CollisionDetector {
    pub fn new(width: i32, height: i32, tail_rule: TailRule) -> Self {
        Self {
            width,
            height,
            tail_rule,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.width, config.height, config.tail_rule)
    }

    pub fn tail_rule(&self) -> TailRule {
        self.tail_rule
    }

    /// Classify `p` against the walls and the current body.
    ///
    /// `growing` tells whether the tail stays in place this move; it only matters
    /// under [`TailRule::Vacating`].
    pub fn classify(&self, p: Point, snake: &Snake, growing: bool) -> Collision {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return Collision::Wall;
        }

        let skip_tail = self.tail_rule == TailRule::Vacating && !growing && snake.len() > 1;
        let scanned = if skip_tail {
            snake.len() - 1
        } else {
            snake.len()
        };

        if snake.segments().take(scanned).any(|s| s == p) {
            Collision::SelfCollision
        } else {
            Collision::None
        }
    }
}
