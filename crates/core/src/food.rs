//! Food placement.
//!
//! A [`FoodStrategy`] proposes a candidate cell and a [`FoodPlacement`] policy decides
//! whether that candidate must be free of the snake.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{FoodPlacement, FoodStrategy, GameConfig};
use crate::snake::Snake;
use crate::types::Point;

/// Offset mixed into the score before deriving a coordinate.
const SCORE_SALT: u32 = 17;

#[derive(Debug, Clone)]
enum Source {
    ScoreDerived,
    Seeded { seed: u64, rng: StdRng },
}

#[derive(Debug, Clone)]
pub struct FoodSpawner {
    width: i32,
    height: i32,
    source: Source,
    placement: FoodPlacement,
}

impl FoodSpawner {
    pub fn new(width: i32, height: i32, strategy: FoodStrategy, placement: FoodPlacement) -> Self {
        let source = match strategy {
            FoodStrategy::ScoreDerived => Source::ScoreDerived,
            FoodStrategy::Seeded(seed) => Source::Seeded {
                seed,
                rng: StdRng::seed_from_u64(seed),
            },
        };
        Self {
            width,
            height,
            source,
            placement,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.width,
            config.height,
            config.food_strategy,
            config.food_placement,
        )
    }

    pub fn strategy(&self) -> FoodStrategy {
        match &self.source {
            Source::ScoreDerived => FoodStrategy::ScoreDerived,
            Source::Seeded { seed, .. } => FoodStrategy::Seeded(*seed),
        }
    }

    pub fn placement(&self) -> FoodPlacement {
        self.placement
    }

    /// Pick the next food cell for the given score.
    ///
    /// Returns `None` only under [`FoodPlacement::ScanForFree`] when the snake covers
    /// every cell.
    pub fn respawn(&mut self, score: u32, snake: &Snake) -> Option<Point> {
        let candidate = self.candidate(score);
        match self.placement {
            FoodPlacement::Unchecked => Some(candidate),
            FoodPlacement::ScanForFree => self.scan_for_free(candidate, snake),
        }
    }

    fn candidate(&mut self, score: u32) -> Point {
        match &mut self.source {
            Source::ScoreDerived => score_derived(score, self.width, self.height),
            Source::Seeded { rng, .. } => Point::new(
                rng.gen_range(0..self.width.max(1)),
                rng.gen_range(0..self.height.max(1)),
            ),
        }
    }

    fn scan_for_free(&self, start: Point, snake: &Snake) -> Option<Point> {
        let cells = (self.width.max(0) as usize) * (self.height.max(0) as usize);
        let mut p = start;
        for _ in 0..cells {
            if !snake.contains(p) {
                return Some(p);
            }
            p.x += 1;
            if p.x >= self.width {
                p.x = 0;
                p.y += 1;
                if p.y >= self.height {
                    p.y = 0;
                }
            }
        }
        None
    }
}

/// Reproducible coordinate for `score`: `x = (s + 17) mod (w - 1)`,
/// `y = ((s + 17) >> 3) mod (h - 1)`.
pub fn score_derived(score: u32, width: i32, height: i32) -> Point {
    let salted = score.wrapping_add(SCORE_SALT);
    let x_mod = (width - 1).max(1) as u32;
    let y_mod = (height - 1).max(1) as u32;
    Point::new((salted % x_mod) as i32, ((salted >> 3) % y_mod) as i32)
}
