//! # Batch Subcommand
//!
//! Evaluates a list of checks from a JSON or YAML file:
//!
//! ```yaml
//! - check: cpf
//!   args: ["11144477735"]
//! - check: date_greater_than
//!   args: ["01/04/2015", "30/03/2015"]
//! ```
//!
//! Prints a JSON array with one outcome per entry, in input order. Entries
//! that cannot be evaluated report an `error` instead of a `result`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use formkit_core::FormkitConfig;
use formkit_validate::{evaluate_with, Check};

use crate::exit_code;

/// Arguments for `formkit batch`.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Batch file (.json, .yaml or .yml).
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}

/// One entry of a batch file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchEntry {
    /// Check to run.
    pub check: Check,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Outcome of one batch entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Check that ran.
    pub check: Check,
    /// Result when the check could be evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>,
    /// Reason when it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchOutcome {
    /// Whether the entry evaluated to `true`.
    pub fn passed(&self) -> bool {
        self.result == Some(true)
    }
}

/// Parse batch entries, choosing the format by file extension.
pub fn parse_entries(path: &Path, content: &str) -> Result<Vec<BatchEntry>> {
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    if is_yaml {
        serde_yaml::from_str(content)
            .with_context(|| format!("failed to parse YAML batch {}", path.display()))
    } else {
        serde_json::from_str(content)
            .with_context(|| format!("failed to parse JSON batch {}", path.display()))
    }
}

/// Evaluate every entry under the configured leap-year rule.
pub fn evaluate_entries(entries: &[BatchEntry], config: &FormkitConfig) -> Vec<BatchOutcome> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            match evaluate_with(entry.check, &entry.args, config.leap_year_rule) {
                Ok(result) => BatchOutcome {
                    check: entry.check,
                    result: Some(result),
                    error: None,
                },
                Err(err) => {
                    tracing::warn!(index, check = %entry.check, error = %err, "batch entry could not be evaluated");
                    BatchOutcome {
                        check: entry.check,
                        result: None,
                        error: Some(err.to_string()),
                    }
                }
            }
        })
        .collect()
}

/// Execute `formkit batch`.
pub fn run_batch(args: &BatchArgs, config: &FormkitConfig) -> Result<u8> {
    let content = std::fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let entries = parse_entries(&args.path, &content)?;
    let outcomes = evaluate_entries(&entries, config);

    let passed = outcomes.iter().filter(|o| o.passed()).count();
    tracing::info!(total = outcomes.len(), passed, "batch evaluated");

    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(exit_code(passed == outcomes.len()))
}
