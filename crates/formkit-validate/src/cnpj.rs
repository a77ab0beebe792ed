//! # CNPJ: Organizational Taxpayer Number
//!
//! Brazilian *Cadastro Nacional da Pessoa Jurídica*: 12 base digits (8-digit
//! root, 4-digit branch) followed by two mod-11 check digits computed with
//! cyclic weights `5 4 3 2 9 8 7 6 5 4 3 2`, then `6 5 4 3 2 9 8 7 6 5 4 3 2`.

use serde::Serialize;

use formkit_core::ValidationError;

use crate::checksum::{apply_pattern, strip_pattern, IdentifierRules, WeightScheme};

/// Digit count of a CNPJ.
pub const CNPJ_LEN: usize = 14;

const FORMAT: &str = "##.###.###/####-##";

const RULES: IdentifierRules = IdentifierRules {
    kind: "CNPJ",
    len: CNPJ_LEN,
    scheme: WeightScheme::Cyclic,
    base_label: "12-digit CNPJ base",
};

/// Whether `digits` is a valid unformatted CNPJ.
pub fn is_valid_cnpj(digits: &str) -> bool {
    validate_cnpj(digits).is_ok()
}

/// Validate an unformatted CNPJ, reporting the first rule it breaks.
pub fn validate_cnpj(digits: &str) -> Result<(), ValidationError> {
    RULES.validate(digits)
}

/// Compute the two check digits for a 12-digit CNPJ base.
pub fn cnpj_check_digits(base: &str) -> Result<[u8; 2], ValidationError> {
    RULES.check_digits_for(base)
}

/// A validated CNPJ, stored as 14 digits without punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj => new);

impl Cnpj {
    /// Create a CNPJ from either `"11222333000181"` or `"11.222.333/0001-81"`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = if raw.contains(|c: char| c == '.' || c == '/' || c == '-') {
            strip_pattern(&raw, FORMAT).ok_or_else(|| ValidationError::Malformed {
                value: raw.clone(),
                expected: "XX.XXX.XXX/XXXX-XX",
            })?
        } else {
            raw
        };
        validate_cnpj(&digits)?;
        Ok(Self(digits))
    }

    /// Access the CNPJ as 14 unformatted digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CNPJ in formatted form: XX.XXX.XXX/XXXX-XX.
    pub fn formatted(&self) -> String {
        apply_pattern(&self.0, FORMAT)
    }

    /// The 8-digit company root shared by all branches.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit branch number (`0001` for the head office).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
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
        #[test]
        fn computed_check_digits_validate(base in "[0-9]{12}") {
            let [a, b] = cnpj_check_digits(&base).unwrap();
            let cnpj = format!("{base}{a}{b}");
            let repeated = cnpj.bytes().all(|c| c == cnpj.as_bytes()[0]);
            prop_assert_eq!(is_valid_cnpj(&cnpj), !repeated);
        }

        #[test]
        fn altered_first_check_digit_invalidates(base in "[0-9]{12}", bump in 1u8..10) {
            let [a, b] = cnpj_check_digits(&base).unwrap();
            let wrong = (a + bump) % 10;
            let cnpj = format!("{base}{wrong}{b}");
            prop_assert!(!is_valid_cnpj(&cnpj));
        }
    }
}
