//! # CPF: Individual Taxpayer Number
//!
//! Brazilian *Cadastro de Pessoas Físicas*: 9 base digits followed by two
//! mod-11 check digits computed with descending weights (10..2, then
//! 11..2). See [`crate::checksum`].
//!
//! The eleven repeated-digit sequences (`00000000000` .. `99999999999`)
//! satisfy the checksum arithmetic but are never issued, so they are
//! rejected explicitly.

use serde::Serialize;

use formkit_core::ValidationError;

use crate::checksum::{apply_pattern, strip_pattern, IdentifierRules, WeightScheme};

/// Digit count of a CPF.
pub const CPF_LEN: usize = 11;

const FORMAT: &str = "###.###.###-##";

const RULES: IdentifierRules = IdentifierRules {
    kind: "CPF",
    len: CPF_LEN,
    scheme: WeightScheme::Descending,
    base_label: "9-digit CPF base",
};

/// Whether `digits` is a valid unformatted CPF.
///
/// Returns `false` for inputs longer than 11 characters, containing
/// anything but ASCII digits, consisting of one repeated digit, shorter
/// than 11 digits, or failing either check digit.
pub fn is_valid_cpf(digits: &str) -> bool {
    validate_cpf(digits).is_ok()
}

/// Validate an unformatted CPF, reporting the first rule it breaks.
pub fn validate_cpf(digits: &str) -> Result<(), ValidationError> {
    RULES.validate(digits)
}

/// Compute the two check digits for a 9-digit CPF base.
///
/// # Errors
///
/// Returns [`ValidationError::Malformed`] unless `base` is exactly nine
/// ASCII digits.
pub fn cpf_check_digits(base: &str) -> Result<[u8; 2], ValidationError> {
    RULES.check_digits_for(base)
}

/// A validated CPF, stored as 11 digits without punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf => new);

impl Cpf {
    /// Create a CPF from either `"11144477735"` or `"111.444.777-35"`.
    ///
    /// Punctuation, when present, must follow the `XXX.XXX.XXX-XX` layout
    /// exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Malformed`] for misplaced punctuation, or
    /// the specific rule violation reported by [`validate_cpf`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = if raw.contains(|c: char| c == '.' || c == '-') {
            strip_pattern(&raw, FORMAT).ok_or_else(|| ValidationError::Malformed {
                value: raw.clone(),
                expected: "XXX.XXX.XXX-XX",
            })?
        } else {
            raw
        };
        validate_cpf(&digits)?;
        Ok(Self(digits))
    }

    /// Access the CPF as 11 unformatted digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CPF in formatted form: XXX.XXX.XXX-XX.
    pub fn formatted(&self) -> String {
        apply_pattern(&self.0, FORMAT)
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any base with its computed check digits validates unless it is
        /// a repeated-digit sequence.
        #[test]
        fn computed_check_digits_validate(base in "[0-9]{9}") {
            let [a, b] = cpf_check_digits(&base).unwrap();
            let cpf = format!("{base}{a}{b}");
            let repeated = cpf.bytes().all(|c| c == cpf.as_bytes()[0]);
            prop_assert_eq!(is_valid_cpf(&cpf), !repeated);
        }

        /// Changing the final check digit always invalidates.
        #[test]
        fn altered_check_digit_invalidates(base in "[0-9]{9}", bump in 1u8..10) {
            let [a, b] = cpf_check_digits(&base).unwrap();
            let wrong = (b + bump) % 10;
            let cpf = format!("{base}{a}{wrong}");
            prop_assert!(!is_valid_cpf(&cpf));
        }

        /// Validation never panics on arbitrary text.
        #[test]
        fn never_panics(s in "\\PC{0,20}") {
            let _ = is_valid_cpf(&s);
        }
    }
}
