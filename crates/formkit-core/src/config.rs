//! # Configuration
//!
//! Policies that alter validator behavior, and the YAML file that carries
//! them. Every field is defaulted, so an empty file (or no file) yields
//! the historical, form-compatible behavior.
//!
//! ```yaml
//! leap_year_rule: simplified   # or gregorian
//! interval_policy: reject      # or wrap_midnight
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which years count as leap years when validating 29 February.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapYearRule {
    /// Every year divisible by 4, including 1900 and 2100.
    #[default]
    Simplified,
    /// Proleptic Gregorian: century years only when divisible by 400.
    Gregorian,
}

impl LeapYearRule {
    /// Whether `year` has a 29 February under this rule.
    pub fn is_leap(self, year: u16) -> bool {
        match self {
            Self::Simplified => year % 4 == 0,
            Self::Gregorian => (year % 4 == 0 && year % 100 != 0) || year % 400 == 0,
        }
    }
}

/// How an hour interval treats an end time earlier than its start time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalPolicy {
    /// Report the interval as an error.
    #[default]
    Reject,
    /// Treat the end time as falling on the following day.
    WrapMidnight,
}

/// Top-level formkit configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormkitConfig {
    /// Leap-year rule for date validation.
    pub leap_year_rule: LeapYearRule,
    /// Negative interval handling for `hours_interval`.
    pub interval_policy: IntervalPolicy,
}

impl FormkitConfig {
    /// Load a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] when the path does not exist
    /// and [`ConfigError::YamlParse`] when the contents do not describe a
    /// valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io(e)
            }
        })?;
        Self::from_yaml_str(&content).map_err(|source| ConfigError::YamlParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a configuration from YAML text. Blank text yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
