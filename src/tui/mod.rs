pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;
