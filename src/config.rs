//! Configuration for the stepper affixes.
//!
//! The defaults reproduce the stock behavior (300ms before repeating, a step
//! every 50ms, every `input[type="number"]` in the document). Pages can pass a
//! JSON object to `enhanceAll` to override any of them; missing fields keep
//! their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use stepper_core::{
    PressTiming, DEFAULT_REPEAT_INTERVAL, DEFAULT_WAIT_TIMEOUT, NUMBER_INPUT_SELECTOR,
};

use crate::error::ConfigError;

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Log level setting for the stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging (press state transitions)
    Debug,
    /// Show all log messages including every single step
    Trace,
}

impl LogLevel {
    /// Convert to log crate's Level.
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        self.to_level().to_level_filter()
    }
}

/// Stepper configuration, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Milliseconds an affix must be held before auto-repeat starts
    pub wait_timeout_ms: u64,

    /// Milliseconds between auto-repeat steps
    pub repeat_interval_ms: u64,

    /// Selector used to discover the inputs to enhance
    pub selector: String,

    /// Log verbosity level
    pub log_level: LogLevel,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            wait_timeout_ms: duration_ms(DEFAULT_WAIT_TIMEOUT),
            repeat_interval_ms: duration_ms(DEFAULT_REPEAT_INTERVAL),
            selector: NUMBER_INPUT_SELECTOR.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl StepperConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive the stepper.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: CONFIG_VERSION,
            });
        }
        if self.wait_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "wait_timeout_ms",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.repeat_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "repeat_interval_ms",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.selector.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "selector",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Press timing described by this configuration.
    pub fn timing(&self) -> PressTiming {
        PressTiming {
            wait: Duration::from_millis(self.wait_timeout_ms),
            repeat: Duration::from_millis(self.repeat_interval_ms),
        }
    }
}
