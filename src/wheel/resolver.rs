//! Index resolution: external value → position in the option list.

use crate::error::{Result, WheelError};
use crate::log;

use super::option::{OptionValue, PickerOption};

/// Resolve `value` to an index into `options`.
///
/// Matching is numeric, so `"00"` and `0` are interchangeable on either side.
/// The first exact match wins; otherwise the first option at or above
/// `value` (ceiling); otherwise `0`. Options that cannot be coerced never
/// match.
///
/// Errors only for an empty list or an external value that is not numeric.
pub fn resolve(value: &OptionValue, options: &[PickerOption]) -> Result<usize> {
    if options.is_empty() {
        return Err(WheelError::EmptyOptions);
    }

    let target = value.to_number()?;

    let numeric: Vec<Option<f64>> = options
        .iter()
        .enumerate()
        .map(|(i, option)| match option.value.to_number() {
            Ok(n) => Some(n),
            Err(e) => {
                log::log_warning(&format!("option {} ignored: {}", i, e));
                None
            }
        })
        .collect();

    if let Some(exact) = numeric.iter().position(|n| *n == Some(target)) {
        return Ok(exact);
    }

    let ceiling = numeric
        .iter()
        .position(|n| n.is_some_and(|n| n >= target));

    Ok(ceiling.unwrap_or(0))
}
