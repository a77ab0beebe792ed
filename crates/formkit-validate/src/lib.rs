//! # formkit-validate: Form-Field Validators
//!
//! Pure, stateless validators for the values a Brazilian registration form
//! collects: `DD/MM/YYYY` dates, individual taxpayer numbers (CPF, 11
//! digits) and organizational taxpayer numbers (CNPJ, 14 digits).
//!
//! Every validator comes in two shapes:
//!
//! - a boolean convenience (`is_valid_cpf`, `is_valid_date`, ...) that
//!   never fails and answers "is this usable";
//! - a typed form (`validate_cpf`, `FormDate::parse`, `compare_dates`, ...)
//!   returning [`ValidationError`] so callers can report *why*.
//!
//! Validated newtypes ([`Cpf`], [`Cnpj`], [`TaxId`], [`FormDate`]) check
//! their contents at construction and at deserialization.
//!
//! The [`args`] module evaluates checks over untyped JSON arguments, the
//! one place where absent values, wrong types, and wrong arity can occur.

/// Implement `Deserialize` for a validated type by deserializing a plain
/// `String` and routing it through the named constructor, so invalid
/// values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident => $ctor:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::$ctor(raw.as_str()).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod args;
pub mod checksum;
pub mod cnpj;
pub mod cpf;
pub mod date;
pub mod tax_id;

pub use args::{evaluate, evaluate_or_log, evaluate_with, Check};
pub use cnpj::{cnpj_check_digits, is_valid_cnpj, validate_cnpj, Cnpj, CNPJ_LEN};
pub use cpf::{cpf_check_digits, is_valid_cpf, validate_cpf, Cpf, CPF_LEN};
pub use date::{compare_dates, compare_dates_with, is_date_greater_than, is_valid_date, FormDate};
pub use formkit_core::{LeapYearRule, ValidationError};
pub use tax_id::{is_valid_tax_id, TaxId};
