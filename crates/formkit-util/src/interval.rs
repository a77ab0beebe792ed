//! # Hour Intervals
//!
//! Elapsed time between two clock times written `H:MM` or `HH:MM`, e.g. the
//! length of a class from `7:30` to `11:30`. Results are zero-padded
//! `HH:MM`.
//!
//! An end time earlier than the start time is handled by
//! [`IntervalPolicy`]: rejected by default, or read as crossing midnight.

use formkit_core::{IntervalError, IntervalPolicy};

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A validated clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourMinute {
    hour: u8,
    minute: u8,
}

impl HourMinute {
    /// Parse `H:MM` / `HH:MM`: one or two hour digits, exactly two minute
    /// digits.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::Malformed`] if the text does not have that layout.
    /// - [`IntervalError::InvalidHour`] for hours above 23.
    /// - [`IntervalError::InvalidMinute`] for minutes above 59.
    pub fn parse(text: &str) -> Result<Self, IntervalError> {
        let malformed = || IntervalError::Malformed(text.to_string());
        let (h, m) = text.split_once(':').ok_or_else(malformed)?;
        let hour = parse_field(h, 1..=2).ok_or_else(malformed)?;
        let minute = parse_field(m, 2..=2).ok_or_else(malformed)?;
        if hour > 23 {
            return Err(IntervalError::InvalidHour(text.to_string()));
        }
        if minute > 59 {
            return Err(IntervalError::InvalidMinute(text.to_string()));
        }
        Ok(Self { hour, minute })
    }

    /// Hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since 00:00.
    pub fn minutes_since_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl std::fmt::Display for HourMinute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for HourMinute {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_field(s: &str, digits: std::ops::RangeInclusive<usize>) -> Option<u8> {
    if !digits.contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Interval between `start` and `end`, rejecting `end` before `start`.
pub fn hours_interval(start: &str, end: &str) -> Result<String, IntervalError> {
    hours_interval_with(start, end, IntervalPolicy::Reject)
}

/// Interval between `start` and `end` as zero-padded `HH:MM`.
///
/// # Errors
///
/// Parse errors from [`HourMinute::parse`], and
/// [`IntervalError::NegativeInterval`] when `end < start` under
/// [`IntervalPolicy::Reject`].
pub fn hours_interval_with(
    start: &str,
    end: &str,
    policy: IntervalPolicy,
) -> Result<String, IntervalError> {
    let from = HourMinute::parse(start)?.minutes_since_midnight();
    let to = HourMinute::parse(end)?.minutes_since_midnight();

    let elapsed = if to >= from {
        to - from
    } else {
        match policy {
            IntervalPolicy::Reject => {
                return Err(IntervalError::NegativeInterval {
                    start: start.to_string(),
                    end: end.to_string(),
                })
            }
            IntervalPolicy::WrapMidnight => MINUTES_PER_DAY - from + to,
        }
    };
    Ok(format!("{:02}:{:02}", elapsed / 60, elapsed % 60))
}
