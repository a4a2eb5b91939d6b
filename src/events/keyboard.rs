//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if app.show_help {
        return handle_help_mode(key);
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,

        KeyCode::Up | KeyCode::Char('k') => Action::Step(-1),
        KeyCode::Down | KeyCode::Char('j') => Action::Step(1),
        KeyCode::PageUp | KeyCode::Char('K') => Action::Fling(-1),
        KeyCode::PageDown | KeyCode::Char('J') => Action::Fling(1),

        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::FocusNext,
        KeyCode::Char(c @ '1'..='9') => Action::FocusColumn((c as usize) - ('1' as usize)),

        KeyCode::Char('L') => Action::ToggleLooping,
        KeyCode::Char('n') => Action::ResetToNow,

        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc => Action::CloseHelp,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}
