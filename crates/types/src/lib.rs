//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 80 columns (indexed 0-79)
//! - **Height**: 25 rows (indexed 0-24)
//! - **Origin**: (0, 0) is the top-left cell, `y` grows downward
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_HZ` | 60 | Fixed game loop rate |
//! | `INITIAL_SPEED_MS` | 200 | Milliseconds per snake move at start |
//! | `SPEED_FLOOR_MS` | 50 | Fastest allowed speed |
//! | `SPEED_STEP_MS` | 5 | Speed gained per food eaten |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, FlowState, InputEvent, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert_eq!(Direction::Right.delta(), (1, 0));
//!
//! // Out-of-range flow codes fall back to the menu.
//! assert_eq!(FlowState::from_code(42), FlowState::Menu);
//!
//! assert_eq!("quit".parse(), Ok(InputEvent::Quit));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (80, 25));
//! ```

/// Board width in cells (80 columns)
pub const BOARD_WIDTH: i32 = 80;

/// Board height in cells (25 rows)
pub const BOARD_HEIGHT: i32 = 25;

/// Fixed game loop rate in ticks per second.
pub const TICK_HZ: u32 = 60;

/// Milliseconds per snake move when a round starts.
pub const INITIAL_SPEED_MS: u32 = 200;

/// Speed never drops below this many milliseconds per move.
pub const SPEED_FLOOR_MS: u32 = 50;

/// Speed decrement applied on each food eaten.
pub const SPEED_STEP_MS: u32 = 5;

/// Snake length at the start of a round.
pub const INITIAL_LENGTH: usize = 3;

/// Points awarded per food.
pub const SCORE_PER_FOOD: u32 = 10;

/// Head position at the start of a round.
pub const START_POSITION: Point = Point::new(10, 12);

/// Render glyph for the snake head.
pub const HEAD_GLYPH: char = 'O';

/// Render glyph for snake body segments.
pub const BODY_GLYPH: char = 'o';

/// Render glyph for food.
pub const FOOD_GLYPH: char = '*';

/// Render glyph for the wall around the board.
pub const WALL_GLYPH: char = '#';

/// Render glyph for empty cells.
pub const EMPTY_GLYPH: char = ' ';

/// Integer grid coordinate of a single cell.
///
/// Signed so that a candidate head one step past the wall is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Movement direction of the snake.
///
/// The discriminants are the historical direction codes. Opposite pairs are the only
/// pairs whose codes sum to 1 (Up+Down) or 5 (Left+Right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns true if turning from `self` to `other` would reverse the snake onto itself.
    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(self.code() + other.code(), 1 | 5)
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector `(dx, dy)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Top-level game flow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlowState {
    #[default]
    Menu = 0,
    Playing = 1,
    Paused = 2,
    GameOver = 3,
    Exit = 4,
}

impl FlowState {
    /// Decode a stored flow code. Unknown codes are corrected to [`FlowState::Menu`].
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => FlowState::Playing,
            2 => FlowState::Paused,
            3 => FlowState::GameOver,
            4 => FlowState::Exit,
            _ => FlowState::Menu,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlowState::Menu => "menu",
            FlowState::Playing => "playing",
            FlowState::Paused => "paused",
            FlowState::GameOver => "game_over",
            FlowState::Exit => "exit",
        }
    }
}

/// Discrete input event consumed by the engine, one per poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputEvent {
    /// Nothing arrived within the poll window
    #[default]
    None,
    /// Request a new heading
    Direction(Direction),
    /// Pause while playing, resume while paused
    PauseToggle,
    /// Leave the game from any state
    Quit,
    /// Start from the menu, or return to the menu after game over
    StartOrRestart,
}

/// Error returned when an event name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEvent(pub String);

impl std::fmt::Display for UnknownEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown event: {}", self.0)
    }
}

impl std::error::Error for UnknownEvent {}

/// Event names (case-insensitive), used by scripted input.
///
/// # Examples
///
/// ```
/// use tui_snake_types::{Direction, InputEvent};
///
/// assert_eq!("up".parse(), Ok(InputEvent::Direction(Direction::Up)));
/// assert_eq!("Pause".parse(), Ok(InputEvent::PauseToggle));
/// assert!("jump".parse::<InputEvent>().is_err());
/// ```
impl std::str::FromStr for InputEvent {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "-" => Ok(InputEvent::None),
            "up" => Ok(InputEvent::Direction(Direction::Up)),
            "down" => Ok(InputEvent::Direction(Direction::Down)),
            "left" => Ok(InputEvent::Direction(Direction::Left)),
            "right" => Ok(InputEvent::Direction(Direction::Right)),
            "pause" => Ok(InputEvent::PauseToggle),
            "quit" => Ok(InputEvent::Quit),
            "start" | "restart" => Ok(InputEvent::StartOrRestart),
            _ => Err(UnknownEvent(s.to_string())),
        }
    }
}

/// Content of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Head,
    Body,
    Food,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::Head => HEAD_GLYPH,
            Cell::Body => BODY_GLYPH,
            Cell::Food => FOOD_GLYPH,
        }
    }

    pub fn is_snake(self) -> bool {
        matches!(self, Cell::Head | Cell::Body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_constants() {
        assert_eq!(TICK_HZ, 60);
        assert_eq!(INITIAL_SPEED_MS, 200);
        assert_eq!(SPEED_FLOOR_MS, 50);
        assert_eq!(SPEED_STEP_MS, 5);
        assert_eq!(INITIAL_LENGTH, 3);
        assert_eq!(SCORE_PER_FOOD, 10);
    }

    #[test]
    fn glyphs_are_distinguishable() {
        let glyphs = [HEAD_GLYPH, BODY_GLYPH, FOOD_GLYPH, EMPTY_GLYPH, WALL_GLYPH];
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn opposite_directions_use_code_sums() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                let expected = matches!(
                    (a, b),
                    (Direction::Up, Direction::Down)
                        | (Direction::Down, Direction::Up)
                        | (Direction::Left, Direction::Right)
                        | (Direction::Right, Direction::Left)
                );
                assert_eq!(a.is_opposite(b), expected, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn direction_opposite_round_trips() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert!(d.is_opposite(d.opposite()));
        }
    }

    #[test]
    fn flow_codes_round_trip_and_fall_back_to_menu() {
        for state in [
            FlowState::Menu,
            FlowState::Playing,
            FlowState::Paused,
            FlowState::GameOver,
            FlowState::Exit,
        ] {
            assert_eq!(FlowState::from_code(state.code()), state);
        }
        assert_eq!(FlowState::from_code(5), FlowState::Menu);
        assert_eq!(FlowState::from_code(u8::MAX), FlowState::Menu);
    }

    #[test]
    fn event_names_parse_through_from_str() {
        assert_eq!("RIGHT".parse(), Ok(InputEvent::Direction(Direction::Right)));
        assert_eq!("-".parse(), Ok(InputEvent::None));
        assert_eq!("restart".parse(), Ok(InputEvent::StartOrRestart));

        let err = "jump".parse::<InputEvent>().unwrap_err();
        assert_eq!(err, UnknownEvent("jump".to_string()));
        assert_eq!(err.to_string(), "unknown event: jump");
    }

    #[test]
    fn point_step_follows_screen_coordinates() {
        let p = Point::new(10, 12);
        assert_eq!(p.step(Direction::Up), Point::new(10, 11));
        assert_eq!(p.step(Direction::Down), Point::new(10, 13));
        assert_eq!(p.step(Direction::Left), Point::new(9, 12));
        assert_eq!(p.step(Direction::Right), Point::new(11, 12));
    }
}
