//! Canonical day identity.
//!
//! A [`DateKey`] names one calendar day in `yyyy-MM-dd` form. Two widget
//! timestamps belong to the same column exactly when their keys are equal,
//! and the ascending key order matches the calendar, so sorted key
//! sequences read chronologically.

use std::fmt;
use std::str::FromStr;

use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};

/// Canonical identity of a calendar day.
///
/// Wraps a civil date and round-trips the `yyyy-MM-dd` key form through
/// `Display`/`FromStr`. Keys compare chronologically, which for the
/// supported year range (0..=9999) is the same as the lexical order of
/// their rendered form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DateKey(Date);

impl DateKey {
    /// Creates the key for a calendar day.
    pub fn from_date(date: Date) -> Self {
        Self(date)
    }

    /// Creates the key for the day containing a widget timestamp.
    ///
    /// The time-of-day part is discarded: every cell of a column maps to
    /// the same key as the column's day header.
    pub fn from_datetime(start: DateTime) -> Self {
        Self(start.date())
    }

    /// The calendar day this key names.
    #[inline]
    pub fn as_date(self) -> Date {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    /// Parses a `yyyy-MM-dd` key.
    ///
    /// This is the boundary where host-supplied strings become trusted
    /// keys; anything that is not a valid calendar day in key form is
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::strptime("%Y-%m-%d", s)
            .map(DateKey)
            .map_err(|_| DateKeyError {
                input: s.to_string(),
            })
    }
}

/// A string failed to parse as a `yyyy-MM-dd` day key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date key {input:?}, expected yyyy-MM-dd")]
pub struct DateKeyError {
    input: String,
}

impl DateKeyError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::{date, datetime};

    #[test]
    fn test_key_formats_as_yyyy_mm_dd() {
        let key = DateKey::from_date(date(2024, 1, 10));
        assert_eq!(key.to_string(), "2024-01-10");

        let padded = DateKey::from_date(date(987, 3, 4));
        assert_eq!(padded.to_string(), "0987-03-04");
    }

    #[test]
    fn test_key_from_datetime_truncates_time() {
        let morning = DateKey::from_datetime(datetime(2024, 1, 10, 8, 30, 0, 0));
        let evening = DateKey::from_datetime(datetime(2024, 1, 10, 22, 0, 0, 0));
        let header = DateKey::from_date(date(2024, 1, 10));

        assert_eq!(morning, header);
        assert_eq!(evening, header);
    }

    #[test]
    fn test_distinct_days_have_distinct_keys() {
        let a = DateKey::from_date(date(2024, 1, 10));
        let b = DateKey::from_date(date(2024, 1, 11));
        let c = DateKey::from_date(date(2025, 1, 10));
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_key_order_is_chronological_and_lexical() {
        let days = [
            date(2023, 12, 31),
            date(2024, 1, 9),
            date(2024, 1, 10),
            date(2024, 2, 1),
        ];
        let keys: Vec<DateKey> = days.iter().copied().map(DateKey::from_date).collect();

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(sorted, keys);

        let rendered: Vec<String> = keys.iter().map(DateKey::to_string).collect();
        let mut lexical = rendered.clone();
        lexical.sort();
        assert_eq!(lexical, rendered);
    }

    #[test]
    fn test_parse_roundtrip() {
        let key: DateKey = "2024-01-10".parse().unwrap();
        assert_eq!(key.as_date(), date(2024, 1, 10));
        assert_eq!(key.to_string(), "2024-01-10");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("".parse::<DateKey>().is_err());
        assert!("not-a-date".parse::<DateKey>().is_err());
        assert!("2024-13-01".parse::<DateKey>().is_err());
        assert!("2024-02-30".parse::<DateKey>().is_err());
        assert!("2024-01-10T08:00".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_parse_error_reports_input() {
        let err = "nope".parse::<DateKey>().unwrap_err();
        assert_eq!(err.input(), "nope");
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_serde_uses_key_form() {
        let key = DateKey::from_date(date(2024, 1, 10));
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-01-10\"");

        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
