//! wheelpick: scroll-wheel selectors for time pickers.
//!
//! The library is headless: [`wheel::WheelEngine`] turns host scroll signals
//! into selections and placement commands. The `wheelpick` binary hosts two
//! engines in a terminal UI.

pub mod config;
pub mod error;
pub mod log;
pub mod time;
pub mod wheel;

pub use config::{Config, DecelerationRate, WheelConfig};
pub use error::{Result, WheelError};
