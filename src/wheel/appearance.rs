//! Per-row appearance functions handed to the row renderer.

use std::fmt;
use std::sync::Arc;

/// Maps distance from the center (in items) to a visual parameter.
pub type AppearanceFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Scale, rotation and opacity curves for wheel rows.
#[derive(Clone)]
pub struct ItemAppearance {
    pub scale: AppearanceFn,
    pub rotation: AppearanceFn,
    pub opacity: AppearanceFn,
}

/// Resolved appearance of one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub scale: f64,
    pub rotation: f64,
    pub opacity: f64,
}

impl Default for ItemAppearance {
    fn default() -> Self {
        Self {
            scale: Arc::new(|x| 1.0f64.powf(x)),
            rotation: Arc::new(|x| 1.0 - 0.5f64.powf(x)),
            opacity: Arc::new(|x| (1.0f64 / 3.0).powf(x)),
        }
    }
}

impl ItemAppearance {
    pub fn with_scale(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.scale = Arc::new(f);
        self
    }

    pub fn with_rotation(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.rotation = Arc::new(f);
        self
    }

    pub fn with_opacity(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.opacity = Arc::new(f);
        self
    }

    /// Evaluate all three curves at `|distance|`.
    pub fn at(&self, distance: f64) -> ItemStyle {
        let x = distance.abs();
        ItemStyle {
            scale: (self.scale)(x),
            rotation: (self.rotation)(x),
            opacity: (self.opacity)(x),
        }
    }
}

impl fmt::Debug for ItemAppearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemAppearance").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_curves() {
        let appearance = ItemAppearance::default();

        let center = appearance.at(0.0);
        assert_eq!(center.scale, 1.0);
        assert_eq!(center.rotation, 0.0);
        assert_eq!(center.opacity, 1.0);

        let below = appearance.at(-1.0);
        let above = appearance.at(1.0);
        assert_eq!(below, above);
        assert!((above.rotation - 0.5).abs() < 1e-9);
        assert!((above.opacity - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_curve() {
        let appearance = ItemAppearance::default().with_opacity(|x| if x < 1.0 { 1.0 } else { 0.0 });
        assert_eq!(appearance.at(0.4).opacity, 1.0);
        assert_eq!(appearance.at(2.0).opacity, 0.0);
    }
}
