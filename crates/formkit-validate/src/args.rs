//! # Dynamic Argument Evaluation
//!
//! Evaluates a named [`Check`] over untyped JSON arguments, as submitted by
//! a form handler or listed in a batch file. This is where inputs that
//! cannot be evaluated at all show up: a missing argument, an argument of
//! the wrong type, or the wrong number of arguments. Each is reported as a
//! distinct [`ValidationError`] rather than folded into `false`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use formkit_core::{json_type_name, LeapYearRule, ValidationError};

use crate::cnpj::is_valid_cnpj;
use crate::cpf::is_valid_cpf;
use crate::date::{compare_dates_with, FormDate};
use crate::tax_id::is_valid_tax_id;

/// A named validation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// `DD/MM/YYYY` validity. One argument.
    Date,
    /// First date strictly after the second. Two arguments.
    DateGreaterThan,
    /// CPF validity. One argument.
    Cpf,
    /// CNPJ validity. One argument.
    Cnpj,
    /// CPF-or-CNPJ validity by length. One argument.
    TaxId,
}

impl Check {
    /// All checks, in declaration order.
    pub const ALL: [Check; 5] = [
        Check::Date,
        Check::DateGreaterThan,
        Check::Cpf,
        Check::Cnpj,
        Check::TaxId,
    ];

    /// Number of arguments the check takes.
    pub fn arity(self) -> usize {
        match self {
            Self::DateGreaterThan => 2,
            Self::Date | Self::Cpf | Self::Cnpj | Self::TaxId => 1,
        }
    }

    /// The snake_case name used in batch files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::DateGreaterThan => "date_greater_than",
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::TaxId => "tax_id",
        }
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Check {
    type Err = String;

    /// Accepts the snake_case name or its kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| format!("unknown check: {s:?}"))
    }
}

/// Evaluate `check` over `args` under the simplified leap-year rule.
pub fn evaluate(check: Check, args: &[Value]) -> Result<bool, ValidationError> {
    evaluate_with(check, args, LeapYearRule::Simplified)
}

/// Evaluate `check` over `args`.
///
/// # Errors
///
/// - [`ValidationError::WrongArgumentCount`] if `args.len()` differs from
///   [`Check::arity`].
/// - [`ValidationError::MissingArgument`] for a `null` argument.
/// - [`ValidationError::WrongType`] for a non-string argument.
/// - [`ValidationError::InvalidFirstDate`] / [`ValidationError::InvalidSecondDate`]
///   from [`Check::DateGreaterThan`] when an operand is not a valid date.
///
/// Identifier and single-date checks answer `Ok(false)` for well-typed but
/// invalid values.
pub fn evaluate_with(
    check: Check,
    args: &[Value],
    rule: LeapYearRule,
) -> Result<bool, ValidationError> {
    if args.len() != check.arity() {
        return Err(ValidationError::WrongArgumentCount {
            expected: check.arity(),
            got: args.len(),
        });
    }
    let strings = args
        .iter()
        .enumerate()
        .map(|(position, value)| string_arg(position, value))
        .collect::<Result<Vec<&str>, _>>()?;

    let result = match check {
        Check::Date => FormDate::parse_with(strings[0], rule).is_ok(),
        Check::DateGreaterThan => compare_dates_with(strings[0], strings[1], rule)?,
        Check::Cpf => is_valid_cpf(strings[0]),
        Check::Cnpj => is_valid_cnpj(strings[0]),
        Check::TaxId => is_valid_tax_id(strings[0]),
    };
    Ok(result)
}

/// Evaluate `check`, logging evaluation errors and returning `None`.
///
/// `None` means "could not evaluate"; callers must treat it as unusable
/// input, distinct from `Some(false)`.
pub fn evaluate_or_log(check: Check, args: &[Value], rule: LeapYearRule) -> Option<bool> {
    match evaluate_with(check, args, rule) {
        Ok(result) => Some(result),
        Err(err) => {
            tracing::warn!(check = %check, error = %err, "check could not be evaluated");
            None
        }
    }
}

fn string_arg(position: usize, value: &Value) -> Result<&str, ValidationError> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        Value::Null => Err(ValidationError::MissingArgument { position }),
        other => Err(ValidationError::WrongType {
            position,
            expected: "string",
            found: json_type_name(other),
        }),
    }
}
