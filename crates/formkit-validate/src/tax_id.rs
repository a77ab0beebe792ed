//! # Combined Tax Identifier
//!
//! Forms that accept either a person or a company take a single tax-id
//! field. The kind is decided by digit count alone: 11 digits is a CPF,
//! 14 digits is a CNPJ.

use serde::Serialize;

use formkit_core::ValidationError;

use crate::cnpj::{is_valid_cnpj, validate_cnpj, Cnpj, CNPJ_LEN};
use crate::cpf::{is_valid_cpf, validate_cpf, Cpf, CPF_LEN};

/// Whether `digits` is a valid unformatted CPF (11 digits) or CNPJ (14 digits).
///
/// Any other length is `false`.
pub fn is_valid_tax_id(digits: &str) -> bool {
    match digits.len() {
        CNPJ_LEN => is_valid_cnpj(digits),
        CPF_LEN => is_valid_cpf(digits),
        _ => false,
    }
}

/// A validated CPF or CNPJ.
///
/// Serializes as its unformatted digits and deserializes through
/// [`TaxId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TaxId {
    /// Individual taxpayer.
    Cpf(Cpf),
    /// Organizational taxpayer.
    Cnpj(Cnpj),
}

impl TaxId {
    /// Parse an unformatted tax identifier, dispatching on its length.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedLength`] unless the input has
    /// 11 or 14 characters, otherwise the CPF/CNPJ rule violation.
    /// Punctuated forms are rejected; use [`Cpf::new`] or [`Cnpj::new`].
    pub fn parse(digits: &str) -> Result<Self, ValidationError> {
        match digits.len() {
            CNPJ_LEN => {
                validate_cnpj(digits)?;
                Cnpj::new(digits).map(Self::Cnpj)
            }
            CPF_LEN => {
                validate_cpf(digits)?;
                Cpf::new(digits).map(Self::Cpf)
            }
            n => Err(ValidationError::UnsupportedLength(n)),
        }
    }

    /// The identifier as unformatted digits.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// The identifier in its punctuated form.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }

    /// `"CPF"` or `"CNPJ"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cpf(_) => "CPF",
            Self::Cnpj(_) => "CNPJ",
        }
    }
}

impl_validating_deserialize!(TaxId => parse);

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}
