//! Mount-time emission guard.
//!
//! Placing a wheel on mount produces its own settle. Reporting that settle
//! would tell the owner the user picked a value they never touched, so a
//! freshly mounted wheel stays unarmed until the placement has had time to
//! land.

use std::time::{Duration, Instant};

/// Two states, one transition: `Unarmed -> Armed` once `armed_at` passes.
/// Re-mounting creates a new guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountGuard {
    Unarmed { armed_at: Instant },
    Armed,
}

impl MountGuard {
    pub fn new(mounted_at: Instant, delay: Duration) -> Self {
        MountGuard::Unarmed {
            armed_at: mounted_at + delay,
        }
    }

    /// Advance the guard to `now`. Returns true if this call armed it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match *self {
            MountGuard::Unarmed { armed_at } if now >= armed_at => {
                *self = MountGuard::Armed;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, MountGuard::Armed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arms_after_delay_only() {
        let start = Instant::now();
        let mut guard = MountGuard::new(start, Duration::from_millis(100));

        assert!(!guard.poll(start + Duration::from_millis(99)));
        assert!(!guard.is_armed());

        assert!(guard.poll(start + Duration::from_millis(100)));
        assert!(guard.is_armed());
    }

    #[test]
    fn test_armed_is_terminal() {
        let start = Instant::now();
        let mut guard = MountGuard::new(start, Duration::ZERO);

        assert!(guard.poll(start));
        assert!(!guard.poll(start + Duration::from_secs(1)));
        assert_eq!(guard, MountGuard::Armed);
    }
}
