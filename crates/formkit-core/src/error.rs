//! # Error Hierarchy
//!
//! Structured error types for formkit, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Validators distinguish "definitely invalid" from "could not evaluate".
//! The boolean entry points collapse both into `false`; the typed entry
//! points return one of these errors so callers can tell them apart.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for formkit.
#[derive(Error, Debug)]
pub enum FormkitError {
    /// Field or identifier validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Hour interval computation failure.
    #[error("interval error: {0}")]
    Interval(#[from] IntervalError),

    /// Object merge failure.
    #[error("merge error: {0}")]
    Merge(#[from] MergeError),

    /// Drop-down option construction failure.
    #[error("option error: {0}")]
    Option(#[from] OptionError),

    /// Configuration loading failure.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for dates and taxpayer identifiers.
///
/// The first three variants cover inputs that could not be evaluated at
/// all (absent, wrong type, wrong arity). The remainder name the specific
/// rule an evaluated value broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required argument was absent (JSON `null` or not supplied).
    #[error("missing argument at position {position}")]
    MissingArgument {
        /// Zero-based argument position.
        position: usize,
    },

    /// An argument had the wrong JSON type.
    #[error("argument at position {position} must be a {expected}, got {found}")]
    WrongType {
        /// Zero-based argument position.
        position: usize,
        /// Expected type name.
        expected: &'static str,
        /// Type name that was supplied.
        found: &'static str,
    },

    /// The check was called with the wrong number of arguments.
    #[error("expected {expected} argument(s), got {got}")]
    WrongArgumentCount {
        /// Arity of the check.
        expected: usize,
        /// Number of arguments supplied.
        got: usize,
    },

    /// Value does not match the textual pattern.
    #[error("malformed value {value:?} (expected {expected})")]
    Malformed {
        /// The rejected input.
        value: String,
        /// Human-readable description of the pattern.
        expected: &'static str,
    },

    /// Day exceeds the number of days in the month.
    #[error("day {day} is out of range for month {month} of {year}")]
    DayOutOfRange {
        /// Day of month.
        day: u8,
        /// Month, one-based.
        month: u8,
        /// Four-digit year.
        year: u16,
    },

    /// First operand of a date comparison is not a valid date.
    #[error("first date is not valid: {0:?} (example: \"01/04/2015\")")]
    InvalidFirstDate(String),

    /// Second operand of a date comparison is not a valid date.
    #[error("second date is not valid: {0:?} (example: \"30/03/2015\")")]
    InvalidSecondDate(String),

    /// Identifier is longer than its fixed length.
    #[error("{kind} {value:?} is longer than {max} digits")]
    TooLong {
        /// Identifier kind (`CPF`, `CNPJ`).
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Maximum digit count.
        max: usize,
    },

    /// Identifier is shorter than its fixed length.
    #[error("{kind} {value:?} has {len} digits (expected {expected})")]
    WrongLength {
        /// Identifier kind.
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Actual digit count.
        len: usize,
        /// Required digit count.
        expected: usize,
    },

    /// Identifier contains a character other than an ASCII digit.
    #[error("{kind} {value:?} must contain only digits")]
    NonDigit {
        /// Identifier kind.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Identifier is a single digit repeated (e.g. `00000000000`).
    #[error("{kind} {value:?} is a repeated-digit sequence")]
    RepeatedDigits {
        /// Identifier kind.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Computed check digits differ from the trailing digits.
    #[error("{kind} {value:?} has invalid check digits (expected {expected})")]
    ChecksumMismatch {
        /// Identifier kind.
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// The two check digits the base actually produces.
        expected: String,
    },

    /// Tax identifier length matches neither CPF nor CNPJ.
    #[error("tax identifier must have 11 (CPF) or 14 (CNPJ) digits, got {0}")]
    UnsupportedLength(usize),
}

/// Errors computing the interval between two `HH:MM` times.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// Input is not of the form `H:MM` / `HH:MM`.
    #[error("malformed time {0:?} (expected HH:MM)")]
    Malformed(String),

    /// Hour outside 0-23.
    #[error("invalid hour in {0:?}: allowed values are 0 to 23")]
    InvalidHour(String),

    /// Minute outside 0-59.
    #[error("invalid minute in {0:?}: allowed values are 0 to 59")]
    InvalidMinute(String),

    /// End time precedes start time and the policy rejects it.
    #[error("end time {end} is before start time {start}")]
    NegativeInterval {
        /// Start time as given.
        start: String,
        /// End time as given.
        end: String,
    },
}

/// Errors merging JSON objects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// An input was neither an object nor `null`.
    #[error("merge input at index {index} is not an object (found {found})")]
    NotAnObject {
        /// Zero-based input index.
        index: usize,
        /// JSON type name that was supplied.
        found: &'static str,
    },
}

/// Errors building drop-down options from records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// A record was not a JSON object.
    #[error("record at index {index} is not an object")]
    NotARecord {
        /// Zero-based record index.
        index: usize,
    },

    /// A record lacks a field named by the option mapping.
    #[error("record at index {index} has no field {field:?}")]
    MissingField {
        /// Zero-based record index.
        index: usize,
        /// Field name that was looked up.
        field: String,
    },
}

/// Errors loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file does not exist.
    #[error("config file not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Config file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid YAML for the config schema.
    #[error("failed to parse config at {}: {source}", path.display())]
    YamlParse {
        /// Path of the config file.
        path: PathBuf,
        /// Parser error.
        source: serde_yaml::Error,
    },
}

/// JSON type name of `value`, as reported in `found` fields.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_type_names() {
        use serde_json::json;
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(4.5)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }

    #[test]
    fn formkit_error_validation_display() {
        let inner = ValidationError::UnsupportedLength(12);
        let err = FormkitError::Validation(inner);
        let msg = format!("{err}");
        assert!(msg.contains("validation error"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn checksum_mismatch_names_expected_digits() {
        let err = ValidationError::ChecksumMismatch {
            kind: "CPF",
            value: "12345678901".to_string(),
            expected: "09".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("CPF"));
        assert!(msg.contains("12345678901"));
        assert!(msg.contains("09"));
    }

    #[test]
    fn wrong_type_display() {
        let err = ValidationError::WrongType {
            position: 0,
            expected: "string",
            found: "number",
        };
        assert_eq!(
            format!("{err}"),
            "argument at position 0 must be a string, got number"
        );
    }

    #[test]
    fn invalid_first_date_carries_example() {
        let err = ValidationError::InvalidFirstDate("32/01/2015".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("first date"));
        assert!(msg.contains("01/04/2015"));
    }

    #[test]
    fn interval_error_hour_display() {
        let err = IntervalError::InvalidHour("24:00".to_string());
        assert!(format!("{err}").contains("0 to 23"));
    }

    #[test]
    fn interval_error_converts_to_top_level() {
        let err: FormkitError = IntervalError::Malformed("x".to_string()).into();
        assert!(matches!(err, FormkitError::Interval(_)));
    }

    #[test]
    fn merge_error_display() {
        let err = MergeError::NotAnObject {
            index: 2,
            found: "array",
        };
        assert_eq!(
            format!("{err}"),
            "merge input at index 2 is not an object (found array)"
        );
    }

    #[test]
    fn config_not_found_display() {
        let err = ConfigError::FileNotFound {
            path: PathBuf::from("/nope/formkit.yaml"),
        };
        assert!(format!("{err}").contains("/nope/formkit.yaml"));
    }
}
