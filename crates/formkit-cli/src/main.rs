//! # formkit CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use formkit_cli::batch::{run_batch, BatchArgs};
use formkit_cli::util::{run_interval, run_merge, IntervalArgs, MergeArgs};
use formkit_cli::validate::{
    run_check_digits, run_cnpj, run_cpf, run_date, run_date_gt, run_tax_id, CheckDigitsArgs,
    DateArgs, DateGtArgs, IdentifierArgs, TaxIdArgs,
};
use formkit_cli::{load_config, EXIT_UNUSABLE};

/// formkit: form field validation toolkit
///
/// Validates DD/MM/YYYY dates and Brazilian CPF/CNPJ taxpayer numbers, and
/// provides the merge and hour-interval helpers used by form back ends.
#[derive(Parser, Debug)]
#[command(name = "formkit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that a DD/MM/YYYY date exists.
    Date(DateArgs),

    /// Print whether the first date is strictly later than the second.
    DateGt(DateGtArgs),

    /// Validate an 11-digit CPF.
    Cpf(IdentifierArgs),

    /// Validate a 14-digit CNPJ.
    Cnpj(IdentifierArgs),

    /// Validate a CPF or CNPJ, chosen by length.
    TaxId(TaxIdArgs),

    /// Complete a 9-digit CPF or 12-digit CNPJ base with its check digits.
    CheckDigits(CheckDigitsArgs),

    /// Merge JSON objects from files, later keys winning.
    Merge(MergeArgs),

    /// Time between two HH:MM values.
    Interval(IntervalArgs),

    /// Evaluate a JSON or YAML list of checks.
    Batch(BatchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "formkit starting");

    let result = load_config(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Date(args) => run_date(args, &config),
        Commands::DateGt(args) => run_date_gt(args, &config),
        Commands::Cpf(args) => run_cpf(args),
        Commands::Cnpj(args) => run_cnpj(args),
        Commands::TaxId(args) => run_tax_id(args),
        Commands::CheckDigits(args) => run_check_digits(args),
        Commands::Merge(args) => run_merge(args),
        Commands::Interval(args) => run_interval(args, &config),
        Commands::Batch(args) => run_batch(args, &config),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_UNUSABLE)
        }
    }
}
