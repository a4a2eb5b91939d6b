//! Event handling module for keyboard and mouse events.
//!
//! Terminal events are translated into Actions; the App applies them to the
//! wheels.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
