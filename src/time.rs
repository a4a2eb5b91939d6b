//! Option lists for time-of-day wheels.

use crate::wheel::PickerOption;

/// Wheels with fewer options than this never loop; wrapping a four-item
/// wheel reads as a glitch rather than a convenience.
pub const LOOPING_THRESHOLD: usize = 10;

/// Whether a wheel with `option_count` options should loop.
pub fn should_loop(enable_looping: bool, option_count: usize) -> bool {
    enable_looping && option_count >= LOOPING_THRESHOLD
}

/// Hours 1-12 or 0-23, labelled with two digits.
pub fn hour_options(use_12_hours: bool) -> Vec<PickerOption> {
    let hours = if use_12_hours { 1..=12 } else { 0..=23 };
    hours.map(padded).collect()
}

/// Minutes 0-59 in `step` increments (every minute when unset or zero).
pub fn minute_options(step: Option<u32>) -> Vec<PickerOption> {
    let step = step.filter(|s| *s > 0).unwrap_or(1) as usize;
    (0..60).step_by(step).map(padded).collect()
}

fn padded(n: u32) -> PickerOption {
    PickerOption::new(n, format!("{:02}", n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_options() {
        let twelve = hour_options(true);
        assert_eq!(twelve.len(), 12);
        assert_eq!(twelve[0].label, "01");
        assert_eq!(twelve[11].value.to_number().unwrap(), 12.0);

        let twenty_four = hour_options(false);
        assert_eq!(twenty_four.len(), 24);
        assert_eq!(twenty_four[0].label, "00");
    }

    #[test]
    fn test_minute_options() {
        assert_eq!(minute_options(None).len(), 60);
        assert_eq!(minute_options(Some(0)).len(), 60);
        assert_eq!(minute_options(Some(5)).len(), 12);

        let quarters = minute_options(Some(15));
        let values: Vec<f64> = quarters.iter().map(|o| o.value.to_number().unwrap()).collect();
        assert_eq!(values, vec![0.0, 15.0, 30.0, 45.0]);
    }

    #[test]
    fn test_hours_always_loop_when_enabled() {
        assert!(should_loop(true, hour_options(true).len()));
        assert!(should_loop(true, hour_options(false).len()));
        assert!(!should_loop(false, hour_options(false).len()));
    }

    #[test]
    fn test_minutes_loop_depends_on_step() {
        assert!(should_loop(true, minute_options(None).len()));
        assert!(should_loop(true, minute_options(Some(5)).len()));
        assert!(!should_loop(true, minute_options(Some(10)).len()));
        assert!(!should_loop(true, minute_options(Some(15)).len()));
        assert!(!should_loop(true, minute_options(Some(30)).len()));
        assert!(!should_loop(false, minute_options(None).len()));
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(should_loop(true, 10));
        assert!(!should_loop(true, 9));
    }
}
