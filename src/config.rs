//! Configuration file support for wheelpick.
//!
//! Configuration is loaded from `~/.config/wheelpick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/wheelpick/config.toml
//! use_12_hours = false
//! minute_step = 5
//!
//! [wheel]
//! item_height = 40
//! visible_rest = 2
//! enable_looping = true
//! deceleration_rate = "fast"
//! grace_period_ms = 50
//! arming_delay_ms = 100
//! recenter = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, WheelError};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Show hours 1-12 instead of 0-23
    pub use_12_hours: bool,

    /// Minute granularity; every minute when unset
    pub minute_step: Option<u32>,

    /// Settings shared by every wheel
    pub wheel: WheelConfig,
}

/// Per-wheel behavior.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    /// Height of one row in scroll units
    pub item_height: f64,

    /// Rows shown above and below the selected row
    pub visible_rest: usize,

    /// Wrap past the first/last option
    pub enable_looping: bool,

    /// Momentum decay used by hosts that animate flings
    pub deceleration_rate: DecelerationRate,

    /// How long a drag release waits for deceleration before settling itself
    pub grace_period_ms: u64,

    /// Delay after mount before settles may report changes
    pub arming_delay_ms: u64,

    /// Silently jump back to the middle block after settling in an outer one
    pub recenter: bool,

    /// Animate non-looping re-placement after an external value change
    pub animated_placement: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            item_height: 40.0,
            visible_rest: 2,
            enable_looping: false,
            deceleration_rate: DecelerationRate::Normal,
            grace_period_ms: 50,
            arming_delay_ms: 100,
            recenter: true,
            animated_placement: false,
        }
    }
}

impl WheelConfig {
    pub fn grace_period(&self) -> Duration {
        Duration::from_millis(self.grace_period_ms)
    }

    pub fn arming_delay(&self) -> Duration {
        Duration::from_millis(self.arming_delay_ms)
    }

    /// Total rows visible in the wheel viewport.
    pub fn visible_rows(&self) -> usize {
        1 + self.visible_rest * 2
    }
}

/// How quickly a fling loses velocity, as a per-millisecond factor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
#[serde(try_from = "RawDecelerationRate")]
pub enum DecelerationRate {
    #[default]
    Normal,
    Fast,
    Custom(f64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecelerationRate {
    Number(f64),
    Named(String),
}

impl TryFrom<RawDecelerationRate> for DecelerationRate {
    type Error = String;

    fn try_from(raw: RawDecelerationRate) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawDecelerationRate::Number(rate) if rate > 0.0 && rate < 1.0 => {
                Ok(DecelerationRate::Custom(rate))
            }
            RawDecelerationRate::Number(rate) => {
                Err(format!("deceleration rate {} must be between 0 and 1", rate))
            }
            RawDecelerationRate::Named(name) => match name.as_str() {
                "normal" => Ok(DecelerationRate::Normal),
                "fast" => Ok(DecelerationRate::Fast),
                other => Err(format!("unknown deceleration rate '{}'", other)),
            },
        }
    }
}

impl DecelerationRate {
    /// Fraction of velocity kept per millisecond.
    pub fn per_millisecond(self) -> f64 {
        match self {
            DecelerationRate::Normal => 0.998,
            DecelerationRate::Fast => 0.99,
            DecelerationRate::Custom(rate) => rate,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| WheelError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wheelpick")
    }

    /// Apply the `WHEELPICK_LOOPING` environment variable, if set.
    pub fn with_env(mut self) -> Self {
        if let Some(looping) = std::env::var("WHEELPICK_LOOPING")
            .ok()
            .and_then(|v| parse_flag(&v))
        {
            self.wheel.enable_looping = looping;
        }
        self
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        enable_looping: Option<bool>,
        use_12_hours: Option<bool>,
        minute_step: Option<u32>,
    ) -> Self {
        if let Some(looping) = enable_looping {
            self.wheel.enable_looping = looping;
        }
        if let Some(twelve) = use_12_hours {
            self.use_12_hours = twelve;
        }
        if minute_step.is_some() {
            self.minute_step = minute_step;
        }
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
