//! # Validation Subcommands
//!
//! `date`, `date-gt`, `cpf`, `cnpj`, `tax-id`, and `check-digits`. Each
//! prints a one-line verdict and returns the exit code.

use anyhow::{bail, Result};
use clap::Args;

use formkit_core::FormkitConfig;
use formkit_validate::{
    cnpj_check_digits, compare_dates_with, cpf_check_digits, validate_cnpj, validate_cpf, Cnpj,
    Cpf, FormDate, TaxId, ValidationError,
};

use crate::{exit_code, EXIT_OK, EXIT_UNUSABLE};

/// Arguments for `formkit date`.
#[derive(Args, Debug)]
pub struct DateArgs {
    /// Date in DD/MM/YYYY form.
    pub date: String,
}

/// Arguments for `formkit date-gt`.
#[derive(Args, Debug)]
pub struct DateGtArgs {
    /// Date expected to be later (DD/MM/YYYY).
    pub first: String,
    /// Date expected to be earlier (DD/MM/YYYY).
    pub second: String,
}

/// Arguments for `formkit cpf` and `formkit cnpj`.
#[derive(Args, Debug)]
pub struct IdentifierArgs {
    /// Identifier digits.
    pub value: String,

    /// Also accept the punctuated form (XXX.XXX.XXX-XX / XX.XXX.XXX/XXXX-XX).
    #[arg(long)]
    pub punctuated: bool,
}

/// Arguments for `formkit tax-id`.
#[derive(Args, Debug)]
pub struct TaxIdArgs {
    /// 11-digit CPF or 14-digit CNPJ, unformatted.
    pub value: String,
}

/// Arguments for `formkit check-digits`.
#[derive(Args, Debug)]
pub struct CheckDigitsArgs {
    /// 9-digit CPF base or 12-digit CNPJ base.
    pub base: String,
}

/// Execute `formkit date`.
pub fn run_date(args: &DateArgs, config: &FormkitConfig) -> Result<u8> {
    let verdict = FormDate::parse_with(&args.date, config.leap_year_rule);
    Ok(report(&args.date, verdict.map(|_| ())))
}

/// Execute `formkit date-gt`.
pub fn run_date_gt(args: &DateGtArgs, config: &FormkitConfig) -> Result<u8> {
    match compare_dates_with(&args.first, &args.second, config.leap_year_rule) {
        Ok(greater) => {
            println!("{greater}");
            Ok(exit_code(greater))
        }
        Err(err) => {
            println!("error: {err}");
            Ok(EXIT_UNUSABLE)
        }
    }
}

/// Execute `formkit cpf`.
pub fn run_cpf(args: &IdentifierArgs) -> Result<u8> {
    let verdict = if args.punctuated {
        Cpf::new(args.value.as_str()).map(|_| ())
    } else {
        validate_cpf(&args.value)
    };
    Ok(report(&args.value, verdict))
}

/// Execute `formkit cnpj`.
pub fn run_cnpj(args: &IdentifierArgs) -> Result<u8> {
    let verdict = if args.punctuated {
        Cnpj::new(args.value.as_str()).map(|_| ())
    } else {
        validate_cnpj(&args.value)
    };
    Ok(report(&args.value, verdict))
}

/// Execute `formkit tax-id`.
pub fn run_tax_id(args: &TaxIdArgs) -> Result<u8> {
    match TaxId::parse(&args.value) {
        Ok(id) => {
            println!("valid {}: {id}", id.kind());
            Ok(EXIT_OK)
        }
        Err(err) => Ok(report(&args.value, Err(err))),
    }
}

/// Execute `formkit check-digits`, printing the completed identifier.
pub fn run_check_digits(args: &CheckDigitsArgs) -> Result<u8> {
    let digits = match args.base.len() {
        9 => cpf_check_digits(&args.base)?,
        12 => cnpj_check_digits(&args.base)?,
        n => bail!("base must have 9 (CPF) or 12 (CNPJ) digits, got {n}"),
    };
    println!("{}{}{}", args.base, digits[0], digits[1]);
    Ok(EXIT_OK)
}

fn report(input: &str, verdict: Result<(), ValidationError>) -> u8 {
    match verdict {
        Ok(()) => {
            println!("valid: {input}");
            EXIT_OK
        }
        Err(err) => {
            println!("invalid: {err}");
            exit_code(false)
        }
    }
}
