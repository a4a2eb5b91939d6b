//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or customized.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Toggle help popup
    ToggleHelp,
    /// Close help popup
    CloseHelp,

    // === Focus ===
    /// Focus the next wheel column
    FocusNext,
    /// Focus the previous wheel column
    FocusPrev,
    /// Focus a column by index
    FocusColumn(usize),

    // === Scrolling ===
    /// Slow drag of the focused wheel by n items, then release
    Step(i32),
    /// Slow drag of a specific wheel (mouse wheel over a column)
    StepColumn { column: usize, items: i32 },
    /// Fast drag of the focused wheel that keeps decelerating after release
    Fling(i32),

    // === Held value ===
    /// Toggle looping for every wheel
    ToggleLooping,
    /// Set the held time to the current clock, from outside the wheels
    ResetToNow,

    /// No action
    None,
}

impl Action {
    /// Whether this action should be written to the log.
    pub fn is_loggable(&self) -> bool {
        !matches!(self, Action::None)
    }
}
