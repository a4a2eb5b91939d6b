//! UI components for the TUI.
//!
//! - `wheel_column` - One wheel with its selection band
//! - `status_bar` - Held time and hotkeys
//! - `help_popup` - Help overlay with keybindings

mod help_popup;
mod status_bar;
mod wheel_column;

pub use help_popup::render_help_popup;
pub use status_bar::{render_held_time, render_hotkeys};
pub use wheel_column::render_wheel_column;
