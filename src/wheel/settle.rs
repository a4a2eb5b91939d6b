//! Drag-release debouncing for slow scrolls.
//!
//! A scrolling view reports a settle after deceleration ends. A slow drag
//! has no deceleration, so nothing fires. The debouncer captures the offset
//! at release and, if no deceleration starts within the grace period,
//! hands it back as a synthesized settle.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut debouncer = SettleDebouncer::new(Duration::from_millis(50));
//!
//! // On drag release:
//! debouncer.release(offset, Instant::now());
//!
//! // On every tick of the host loop:
//! if let Some(offset) = debouncer.poll(Instant::now()) {
//!     // interpret `offset` as a settle
//! }
//! ```
//!
//! `WheelEngine` owns one of these: hosts call `on_drag_end`, then
//! `WheelEngine::poll` on every tick, and `on_momentum_end` when deceleration
//! finishes.
//!
//! ```rust,ignore
//! engine.on_drag_end(offset, now);
//! let outcome = engine.poll(now + Duration::from_millis(50));
//! ```

use std::time::{Duration, Instant};

/// A release waiting to see whether momentum follows.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingRelease {
    /// Offset captured at the moment of release
    offset: f64,
    /// When the grace period runs out
    due: Instant,
}

/// Decides whether a drag release needs a synthesized settle.
///
/// Only one release is pending at a time; a newer release replaces the
/// older one. Deceleration starting sets a flag that the pending release
/// checks when it comes due.
#[derive(Debug, Clone)]
pub struct SettleDebouncer {
    /// Set by deceleration start, cleared by deceleration end
    momentum_started: bool,
    /// Latest release still inside its grace period
    pending: Option<PendingRelease>,
    /// How long to wait for deceleration after a release
    grace: Duration,
}

impl Default for SettleDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}

impl SettleDebouncer {
    pub fn new(grace: Duration) -> Self {
        Self {
            momentum_started: false,
            pending: None,
            grace,
        }
    }

    /// Record a drag release at `offset`.
    pub fn release(&mut self, offset: f64, now: Instant) {
        self.pending = Some(PendingRelease {
            offset,
            due: now + self.grace,
        });
    }

    /// Deceleration started; any pending release will be dropped.
    pub fn momentum_begin(&mut self) {
        self.momentum_started = true;
    }

    /// Deceleration ended; the native settle supersedes any pending release.
    pub fn momentum_end(&mut self) {
        self.momentum_started = false;
        self.pending = None;
    }

    /// A new drag began: deceleration (if any) was interrupted by the user
    /// and an older release no longer describes where the view will rest.
    pub fn drag_begin(&mut self) {
        self.momentum_started = false;
        self.pending = None;
    }

    pub fn momentum_started(&self) -> bool {
        self.momentum_started
    }

    /// Return the release offset if its grace period has elapsed without
    /// deceleration starting.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        let pending = self.pending?;
        if now < pending.due {
            return None;
        }

        self.pending = None;
        if self.momentum_started {
            None
        } else {
            Some(pending.offset)
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Forget any pending release and momentum state.
    pub fn reset(&mut self) {
        self.momentum_started = false;
        self.pending = None;
    }
}
