//! Game engine - flow control and timing on top of the core round logic.
//!
//! - [`flow`]: the Menu/Playing/Paused/GameOver/Exit state machine
//! - [`scheduler`]: converts the snake speed into a move-every-N-ticks gate
//! - [`clock`]: fixed 60 Hz tick sources for the outer loop
//!
//! The outer loop owns a [`GameStateMachine`], polls one input event per tick and
//! calls [`GameStateMachine::tick`] once per elapsed tick:
//!
//! ```
//! use tui_snake_engine::GameStateMachine;
//! use tui_snake_engine::types::{FlowState, InputEvent};
//!
//! let mut machine = GameStateMachine::default();
//! machine.tick(InputEvent::StartOrRestart);
//! assert_eq!(machine.flow(), FlowState::Playing);
//!
//! // 200ms per move at 60 Hz is one move every 12 ticks.
//! for _ in 0..12 {
//!     machine.tick(InputEvent::None);
//! }
//! assert_eq!(machine.game().snake().head().x, 11);
//! ```

pub mod clock;
pub mod flow;
pub mod scheduler;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use clock::{Clock, ManualClock, TickClock};
pub use flow::{next_state, GameStateMachine, TickReport, Trigger};
pub use scheduler::MovementScheduler;
