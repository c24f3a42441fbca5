//! Calendar month keys
//!
//! Every ledger file belongs to exactly one month, identified by a sortable
//! `YYYY-MM` key.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month (e.g., "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, returning None for months outside 1-12
    /// or years outside 0-9999
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (0..=9999).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month of the local clock right now
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parses the "YYYY-MM" form produced by `Display`
impl FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || MonthParseError::InvalidFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format: {} (expected YYYY-MM)", s)
            }
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(MonthKey::new(2024, 3).unwrap().to_string(), "2024-03");
        assert_eq!(MonthKey::new(987, 12).unwrap().to_string(), "0987-12");
    }

    #[test]
    fn test_parse() {
        let key: MonthKey = "2025-01".parse().unwrap();
        assert_eq!(key.year(), 2025);
        assert_eq!(key.month(), 1);
        assert_eq!("2025-11".parse::<MonthKey>().unwrap().month(), 11);
    }

    #[test]
    fn test_parse_rejects_bad_keys() {
        for bad in ["2025-13", "2025-00", "2025-1", "25-01", "2025/01", "", "2025-W03"] {
            assert!(bad.parse::<MonthKey>().is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn test_ordering_matches_string_order() {
        let a = MonthKey::new(2024, 12).unwrap();
        let b = MonthKey::new(2025, 1).unwrap();
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(MonthKey::from_date(date), MonthKey::new(2024, 2).unwrap());
    }

    #[test]
    fn test_serializes_as_string() {
        let key = MonthKey::new(2024, 3).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-03\"");
    }
}
