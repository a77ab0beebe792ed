//! # Utility Subcommands
//!
//! `merge` combines JSON object files; `interval` computes the time between
//! two `HH:MM` values.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use formkit_core::{FormkitConfig, IntervalPolicy};
use formkit_util::{hours_interval_with, merge_values};

use crate::{EXIT_OK, EXIT_UNUSABLE};

/// Arguments for `formkit merge`.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// JSON files, each holding one object. Later files override earlier ones.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Pretty-print the merged object.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for `formkit interval`.
#[derive(Args, Debug)]
pub struct IntervalArgs {
    /// Start time (HH:MM).
    pub start: String,
    /// End time (HH:MM).
    pub end: String,

    /// Treat an end time before the start time as the next day.
    #[arg(long)]
    pub wrap: bool,
}

/// Execute `formkit merge`.
pub fn run_merge(args: &MergeArgs) -> Result<u8> {
    let mut values = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        values.push(value);
    }
    let merged = Value::Object(merge_values(&values)?);
    tracing::info!(inputs = args.files.len(), "merged objects");

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&merged)?
    } else {
        serde_json::to_string(&merged)?
    };
    println!("{rendered}");
    Ok(EXIT_OK)
}

/// Execute `formkit interval`.
pub fn run_interval(args: &IntervalArgs, config: &FormkitConfig) -> Result<u8> {
    let policy = if args.wrap {
        IntervalPolicy::WrapMidnight
    } else {
        config.interval_policy
    };
    match hours_interval_with(&args.start, &args.end, policy) {
        Ok(interval) => {
            println!("{interval}");
            Ok(EXIT_OK)
        }
        Err(err) => {
            println!("error: {err}");
            Ok(EXIT_UNUSABLE)
        }
    }
}
