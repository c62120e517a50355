//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::InputEvent`] and provides the
//! [`InputSource`] seam the game loop polls once per tick.

pub mod map;
pub mod source;

pub use tui_snake_types as types;

pub use map::{map_key, should_quit};
pub use source::{CrosstermInput, InputSource, ScriptedInput, PENDING_CAPACITY};
