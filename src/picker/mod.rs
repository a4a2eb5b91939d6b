//! Generic picker module
//!
//! Provides a trait for list-based selection UI components.

mod traits;

pub use traits::Picker;
