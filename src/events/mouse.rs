//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by the wheel columns during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => app.interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => app.interactions.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => app.interactions.handle_click(x, y),
        _ => Action::None,
    }
}
