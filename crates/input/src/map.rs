//! Key mapping from terminal events to input events.

use crate::types::{Direction, InputEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to an engine input event.
///
/// Only key presses count; repeats and releases map to [`InputEvent::None`].
pub fn map_key(key: KeyEvent) -> InputEvent {
    if key.kind != KeyEventKind::Press {
        return InputEvent::None;
    }
    if should_quit(key) {
        return InputEvent::Quit;
    }

    match key.code {
        // Movement
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => InputEvent::Direction(Direction::Up),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => InputEvent::Direction(Direction::Down),
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => InputEvent::Direction(Direction::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => InputEvent::Direction(Direction::Right),

        // Flow
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => {
            InputEvent::PauseToggle
        }
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => InputEvent::StartOrRestart,

        _ => InputEvent::None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
