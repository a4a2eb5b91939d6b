//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! // During render, register a wheel column:
//! registry.register(InteractiveRegion::interactive(
//!     "wheel_column",
//!     ClickRegion::from(area),
//!     Action::FocusColumn(0),
//!     Action::StepColumn { column: 0, items: -1 },
//!     Action::StepColumn { column: 0, items: 1 },
//! ));
//! ```

use ratatui::layout::Rect;
use wheelpick::log;

use crate::events::Action;

/// A rectangular screen area in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside (right and bottom edges exclusive)
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for debugging/logging)
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a region that's both clickable and scrollable
    pub fn interactive(
        id: &'static str,
        bounds: ClickRegion,
        on_click: Action,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(on_click),
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register the hit area of one wheel column
    pub fn register_wheel_column(&mut self, column: usize, bounds: ClickRegion) {
        self.register(InteractiveRegion::interactive(
            "wheel_column",
            bounds,
            Action::FocusColumn(column),
            Action::StepColumn { column, items: -1 },
            Action::StepColumn { column, items: 1 },
        ));
    }

    /// Find the action of the highest-priority region at (x, y) that has one.
    fn dispatch(
        &self,
        x: u16,
        y: u16,
        pick: impl Fn(&InteractiveRegion) -> Option<Action>,
    ) -> Action {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .filter_map(|r| pick(r).map(|action| (r.priority, r.id, action)))
            .max_by_key(|(priority, _, _)| *priority)
            .map(|(_, id, action)| {
                log::log_event(&format!("{} at ({}, {}): {:?}", id, x, y, action));
                action
            })
            .unwrap_or(Action::None)
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_click)
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_scroll_up)
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_scroll_down)
    }
}
