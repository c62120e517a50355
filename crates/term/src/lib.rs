//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is diffed and flushed to the terminal
//! through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep [`GameView`] pure so frames can be asserted on in tests
//! - Only redraw what changed

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{
    changed_runs, encode_diff_into, encode_full_into, FrameStats, Run, TerminalRenderer,
};
