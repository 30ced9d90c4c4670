//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        KeyCode::Char('r') => Action::Reload,

        // Flick - vim style or arrows
        KeyCode::Char('h') | KeyCode::Left => Action::Nudge(-1),
        KeyCode::Char('l') | KeyCode::Right => Action::Nudge(1),

        _ => Action::None,
    }
}
