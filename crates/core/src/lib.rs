//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake model and the rules of a single round.
//! It has **no dependencies** on terminals, input devices or clocks, making it:
//!
//! - **Deterministic**: the default food strategy derives positions from the score
//! - **Testable**: every rule is reachable through [`GameState`]
//! - **Portable**: can run headless or behind any renderer
//!
//! # Module Structure
//!
//! - [`board`]: render/query grid rebuilt from the snake and the food
//! - [`collision`]: wall and self-collision classification
//! - [`config`]: board size, speeds and placement policies
//! - [`food`]: food strategies and placement
//! - [`game_state`]: one round: movement, growth, score and speed
//! - [`snake`]: the segment deque
//! - [`snapshot`]: read-only per-tick copy for renderers
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, MoveOutcome};
//! use tui_snake_core::types::Point;
//!
//! let mut game = GameState::default();
//! game.set_food(Point::new(11, 12));
//!
//! assert_eq!(game.step().unwrap(), MoveOutcome::Ate);
//! assert_eq!(game.score(), 10);
//! assert_eq!(game.snake().len(), 4);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game_state;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{Collision, CollisionDetector};
pub use config::{FoodPlacement, FoodStrategy, GameConfig, TailRule};
pub use error::EngineError;
pub use food::FoodSpawner;
pub use game_state::{GameState, MoveOutcome};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
