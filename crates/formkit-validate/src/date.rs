//! # Form Dates: `DD/MM/YYYY`
//!
//! Dates entered in Brazilian forms, written day first. A date is valid when
//! it matches the fixed pattern and its day fits the month:
//!
//! - `DD` in 01-31, `MM` in 01-12, `YYYY` in 1900-2999;
//! - April, June, September and November have 30 days;
//! - February has 29 days in leap years and 28 otherwise.
//!
//! The leap-year test defaults to [`LeapYearRule::Simplified`] (every year
//! divisible by 4), so `29/02/1900` is accepted. Form data captured under
//! that rule keeps validating; pass [`LeapYearRule::Gregorian`] to
//! [`FormDate::parse_with`] for calendar-exact checks.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use formkit_core::{LeapYearRule, ValidationError};

const PATTERN: &str = "DD/MM/YYYY";

/// A validated calendar date from a `DD/MM/YYYY` form field.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormDate {
    // Field order drives the derived chronological ordering.
    year: u16,
    month: u8,
    day: u8,
}

impl_validating_deserialize!(FormDate => parse);

impl FormDate {
    /// Parse and validate a `DD/MM/YYYY` date under the simplified leap rule.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::Malformed`] if the text does not match the pattern.
    /// - [`ValidationError::DayOutOfRange`] if the day does not exist in the month.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        Self::parse_with(text, LeapYearRule::Simplified)
    }

    /// Parse and validate a `DD/MM/YYYY` date under the given leap rule.
    pub fn parse_with(text: &str, rule: LeapYearRule) -> Result<Self, ValidationError> {
        let (day, month, year) = match_pattern(text).ok_or_else(|| ValidationError::Malformed {
            value: text.to_string(),
            expected: PATTERN,
        })?;
        if day > days_in_month(month, year, rule) {
            return Err(ValidationError::DayOutOfRange { day, month, year });
        }
        Ok(Self { year, month, day })
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Four-digit year (1900-2999).
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Convert to a `chrono::NaiveDate`.
    ///
    /// Returns `None` for dates accepted only by the simplified leap rule,
    /// such as `29/02/1900`.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl std::fmt::Display for FormDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl std::str::FromStr for FormDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for FormDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Match the full `DD/MM/YYYY` pattern and its field bounds.
fn match_pattern(text: &str) -> Option<(u8, u8, u16)> {
    let b = text.as_bytes();
    if b.len() != 10 || b[2] != b'/' || b[5] != b'/' {
        return None;
    }
    let digit_positions = [0, 1, 3, 4, 6, 7, 8, 9];
    if !digit_positions.iter().all(|&i| b[i].is_ascii_digit()) {
        return None;
    }
    let num = |range: std::ops::Range<usize>| -> u16 {
        b[range]
            .iter()
            .fold(0u16, |acc, &c| acc * 10 + u16::from(c - b'0'))
    };
    let day = num(0..2) as u8;
    let month = num(3..5) as u8;
    let year = num(6..10);

    let in_bounds = (1..=31).contains(&day)
        && (1..=12).contains(&month)
        && (1900..=2999).contains(&year);
    in_bounds.then_some((day, month, year))
}

fn days_in_month(month: u8, year: u16, rule: LeapYearRule) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if rule.is_leap(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Whether `text` is a valid `DD/MM/YYYY` date.
pub fn is_valid_date(text: &str) -> bool {
    FormDate::parse(text).is_ok()
}

/// Whether date `a` is strictly after date `b`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidFirstDate`] or
/// [`ValidationError::InvalidSecondDate`] naming the operand that failed
/// [`is_valid_date`].
pub fn compare_dates(a: &str, b: &str) -> Result<bool, ValidationError> {
    compare_dates_with(a, b, LeapYearRule::Simplified)
}

/// [`compare_dates`] under an explicit leap-year rule.
pub fn compare_dates_with(a: &str, b: &str, rule: LeapYearRule) -> Result<bool, ValidationError> {
    let first = FormDate::parse_with(a, rule)
        .map_err(|_| ValidationError::InvalidFirstDate(a.to_string()))?;
    let second = FormDate::parse_with(b, rule)
        .map_err(|_| ValidationError::InvalidSecondDate(b.to_string()))?;
    Ok(first > second)
}

/// Whether date `a` is strictly after date `b`; `false` when either is invalid.
///
/// Invalid operands are logged at `warn` level. Use [`compare_dates`] to
/// distinguish "not after" from "could not compare".
pub fn is_date_greater_than(a: &str, b: &str) -> bool {
    match compare_dates(a, b) {
        Ok(greater) => greater,
        Err(err) => {
            tracing::warn!(error = %err, "date comparison could not be evaluated");
            false
        }
    }
}
