//! Option values and numeric coercion.
//!
//! Wheel options carry either a number or a numeric-looking string (`"00"`).
//! Everything that compares or reports values goes through
//! [`OptionValue::to_number`] so mixed representations behave identically.

use std::fmt;

use serde::Deserialize;

use crate::error::{Result, WheelError};

/// A selectable value: a number or a string that should parse as one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(f64),
    Text(String),
}

impl OptionValue {
    /// Coerce to a finite number.
    ///
    /// Text is trimmed before parsing. Empty or non-numeric text is an error
    /// rather than `0`, so a misconfigured option never masquerades as the
    /// first entry.
    pub fn to_number(&self) -> Result<f64> {
        match self {
            OptionValue::Number(n) if n.is_finite() => Ok(*n),
            OptionValue::Number(n) => Err(WheelError::NotNumeric(n.to_string())),
            OptionValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| WheelError::NotNumeric(s.clone())),
        }
    }
}

impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<u32> for OptionValue {
    fn from(n: u32) -> Self {
        OptionValue::Number(f64::from(n))
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Number(f64::from(n))
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// One row of a wheel: a value plus the text shown for it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PickerOption {
    pub value: OptionValue,
    #[serde(alias = "text")]
    pub label: String,
}

impl PickerOption {
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Numeric option labelled with its own value.
    pub fn numbered(n: u32) -> Self {
        Self::new(n, n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_coerces_like_number() {
        assert_eq!(OptionValue::from("00").to_number().unwrap(), 0.0);
        assert_eq!(OptionValue::from(" 15 ").to_number().unwrap(), 15.0);
        assert_eq!(OptionValue::from(7).to_number().unwrap(), 7.0);
    }

    #[test]
    fn test_malformed_text_is_error_not_zero() {
        assert!(matches!(
            OptionValue::from("").to_number(),
            Err(WheelError::NotNumeric(_))
        ));
        assert!(matches!(
            OptionValue::from("noon").to_number(),
            Err(WheelError::NotNumeric(_))
        ));
        assert!(OptionValue::Number(f64::NAN).to_number().is_err());
    }

    #[test]
    fn test_deserialize_mixed_values() {
        #[derive(Deserialize)]
        struct List {
            options: Vec<PickerOption>,
        }

        let toml = r#"
            options = [
                { value = "00", label = "00" },
                { value = 15, text = "15" },
            ]
        "#;

        let list: List = toml::from_str(toml).unwrap();
        assert_eq!(list.options[0].value, OptionValue::Text("00".into()));
        assert_eq!(list.options[1].value.to_number().unwrap(), 15.0);
        assert_eq!(list.options[1].label, "15");
    }
}
