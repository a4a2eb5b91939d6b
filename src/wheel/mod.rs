//! Wheel selector core
//!
//! Maps continuous scroll offsets to a discrete selection, with optional
//! seamless looping, for hour/minute style pickers.
//!
//! - `resolver` turns an external value into an option index
//! - `sequence` builds the virtual (padded / repeated) slot list and the
//!   offset arithmetic around it
//! - `settle` synthesizes settles for slow drags
//! - `guard` keeps freshly mounted wheels from reporting
//! - `engine` ties these together per wheel instance

pub mod appearance;
pub mod engine;
pub mod guard;
pub mod option;
pub mod resolver;
pub mod sequence;
pub mod settle;

pub use appearance::{ItemAppearance, ItemStyle};
pub use engine::{ScrollCommand, SettleOutcome, VisibleRow, WheelEngine};
pub use guard::MountGuard;
pub use option::{OptionValue, PickerOption};
pub use resolver::resolve;
pub use sequence::{MID_BLOCK, REPEAT, VirtualSequence};
pub use settle::SettleDebouncer;
