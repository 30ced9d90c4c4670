//! Mouse event handling.
//!
//! A held left button is a drag on the carousel; the wheel flicks it.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::DragBegin(mouse.column),
        MouseEventKind::Drag(MouseButton::Left) if app.is_dragging() => {
            Action::DragTo(mouse.column)
        }
        MouseEventKind::Up(MouseButton::Left) if app.is_dragging() => Action::DragEnd,
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Action::Wheel(1),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => Action::Wheel(-1),
        _ => Action::None,
    }
}
