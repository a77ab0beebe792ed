//! # Mod-11 Check Digits
//!
//! Both Brazilian taxpayer numbers end in two mod-11 check digits. Each
//! digit is derived from a weighted sum of the digits before it:
//!
//! ```text
//! r = sum(d_i * w_i) mod 11
//! check = 0           if r < 2
//!       = 11 - r      otherwise
//! ```
//!
//! The second check digit is computed over the base *plus* the first check
//! digit. The schemes differ only in their weights:
//!
//! | Scheme | Weights for an `n`-digit prefix |
//! |--------|---------------------------------|
//! | [`WeightScheme::Descending`] (CPF) | `n+1, n, ..., 2` |
//! | [`WeightScheme::Cyclic`] (CNPJ)   | `..., 9, 8, ..., 2` read right to left, cycling 2..=9 |
//!
//! For a 12-digit CNPJ base the cyclic weights are `5 4 3 2 9 8 7 6 5 4 3 2`.

use formkit_core::ValidationError;

/// Weight assignment for a mod-11 weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightScheme {
    /// Weights descend from `len + 1` to 2 (CPF).
    Descending,
    /// Weights descend to 2 and reset to 9 whenever they would drop below 2 (CNPJ).
    Cyclic,
}

impl WeightScheme {
    /// Weight for position `index` of a `len`-digit prefix.
    pub fn weight(self, len: usize, index: usize) -> u32 {
        let from_right = (len - 1 - index) as u32;
        match self {
            Self::Descending => from_right + 2,
            Self::Cyclic => from_right % 8 + 2,
        }
    }
}

/// Check digit for a prefix of decimal digits (each 0-9).
pub fn check_digit(prefix: &[u8], scheme: WeightScheme) -> u8 {
    let len = prefix.len();
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * scheme.weight(len, i))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// Both check digits for a base of decimal digits.
pub fn check_digits(base: &[u8], scheme: WeightScheme) -> [u8; 2] {
    let first = check_digit(base, scheme);
    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base);
    extended.push(first);
    let second = check_digit(&extended, scheme);
    [first, second]
}

/// Shape and checksum rules shared by CPF and CNPJ.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IdentifierRules {
    pub kind: &'static str,
    pub len: usize,
    pub scheme: WeightScheme,
    pub base_label: &'static str,
}

impl IdentifierRules {
    /// Validate an unformatted identifier.
    ///
    /// Rules apply in order: maximum length, digits only, not a single
    /// repeated digit, exact length, check digits.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let result = self.validate_inner(value);
        if let Err(ref err) = result {
            tracing::debug!(kind = self.kind, reason = %err, "identifier rejected");
        }
        result
    }

    fn validate_inner(&self, value: &str) -> Result<(), ValidationError> {
        let char_count = value.chars().count();
        if char_count > self.len {
            return Err(ValidationError::TooLong {
                kind: self.kind,
                value: value.to_string(),
                max: self.len,
            });
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NonDigit {
                kind: self.kind,
                value: value.to_string(),
            });
        }
        if is_repeated_digit(value) {
            return Err(ValidationError::RepeatedDigits {
                kind: self.kind,
                value: value.to_string(),
            });
        }
        if char_count != self.len {
            return Err(ValidationError::WrongLength {
                kind: self.kind,
                value: value.to_string(),
                len: char_count,
                expected: self.len,
            });
        }

        let digits = to_digits(value);
        let (base, given) = digits.split_at(self.len - 2);
        let expected = check_digits(base, self.scheme);
        if given != expected.as_slice() {
            return Err(ValidationError::ChecksumMismatch {
                kind: self.kind,
                value: value.to_string(),
                expected: format!("{}{}", expected[0], expected[1]),
            });
        }
        Ok(())
    }

    /// Check digits for an unformatted base of `len - 2` digits.
    pub fn check_digits_for(&self, base: &str) -> Result<[u8; 2], ValidationError> {
        let base_len = self.len - 2;
        if base.len() != base_len || !base.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::Malformed {
                value: base.to_string(),
                expected: self.base_label,
            });
        }
        Ok(check_digits(&to_digits(base), self.scheme))
    }
}

/// Whether a non-empty string consists of one character repeated.
fn is_repeated_digit(value: &str) -> bool {
    let mut bytes = value.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}

/// Convert an all-ASCII-digit string to digit values.
fn to_digits(value: &str) -> Vec<u8> {
    value.bytes().map(|b| b - b'0').collect()
}

/// Strict punctuated-form check: every `#` in `pattern` must be an ASCII
/// digit in `value`, every other byte must match exactly. Returns the
/// digits with punctuation removed.
pub(crate) fn strip_pattern(value: &str, pattern: &str) -> Option<String> {
    if value.len() != pattern.len() {
        return None;
    }
    let mut digits = String::with_capacity(pattern.len());
    for (v, p) in value.bytes().zip(pattern.bytes()) {
        if p == b'#' {
            if !v.is_ascii_digit() {
                return None;
            }
            digits.push(char::from(v));
        } else if v != p {
            return None;
        }
    }
    Some(digits)
}

/// Insert `digits` into the `#` slots of `pattern`.
pub(crate) fn apply_pattern(digits: &str, pattern: &str) -> String {
    let mut chars = digits.chars();
    pattern
        .chars()
        .map(|p| if p == '#' { chars.next().unwrap_or('0') } else { p })
        .collect()
}
