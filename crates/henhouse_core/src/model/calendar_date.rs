//! Normalized calendar day value.
//!
//! # Responsibility
//! - Parse `YYYY-MM-DD` text into a validated day and format it back.
//! - Bind the value to SQLite as `TEXT` and to serde as a plain string.
//!
//! # Invariants
//! - Only zero-padded `YYYY-MM-DD` text naming a real day is accepted.
//! - Ordering is chronological, which also matches the lexicographic order
//!   of the stored text for four-digit years.

use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::types::{ToSql, ToSqlOutput};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date shape regex"));

/// Date text that is not a zero-padded `YYYY-MM-DD` real calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateFormat {
    pub input: String,
}

impl Display for InvalidDateFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "date must be in YYYY-MM-DD format, got `{}`",
            self.input
        )
    }
}

impl Error for InvalidDateFormat {}

/// One calendar day, used as the grouping key for laying records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Earliest representable day.
    pub const MIN: Self = Self(NaiveDate::MIN);

    /// Parses normalized `YYYY-MM-DD` text.
    ///
    /// Rejects non-padded forms such as `2024-1-5` and impossible days such
    /// as `2024-02-30`.
    pub fn parse(value: &str) -> Result<Self, InvalidDateFormat> {
        let invalid = || InvalidDateFormat {
            input: value.to_string(),
        };
        if !DATE_SHAPE_RE.is_match(value) {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Builds a date from numeric parts, `None` when the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the day `days` before this one, `None` past the supported range.
    pub fn days_before(self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }

    /// Returns the day `days` after this one, `None` past the supported range.
    pub fn days_after(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = InvalidDateFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = InvalidDateFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.to_string()
    }
}

impl ToSql for CalendarDate {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::CalendarDate;

    #[test]
    fn parse_accepts_normalized_dates() {
        let date = CalendarDate::parse("2024-01-15").expect("valid date should parse");
        assert_eq!(date, CalendarDate::from_ymd(2024, 1, 15).unwrap());
        assert_eq!(date.to_string(), "2024-01-15");
    }

    #[test]
    fn parse_rejects_unpadded_and_impossible_dates() {
        for input in ["2024-1-15", "2024-02-30", "15-01-2024", "2024-01-15T00:00", ""] {
            let err = CalendarDate::parse(input).expect_err("input should be rejected");
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn day_arithmetic_crosses_month_and_year_boundaries() {
        let new_year = CalendarDate::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(
            new_year.days_before(1),
            CalendarDate::from_ymd(2023, 12, 31)
        );
        let leap = CalendarDate::from_ymd(2024, 2, 28).unwrap();
        assert_eq!(leap.days_after(1), CalendarDate::from_ymd(2024, 2, 29));
    }

    #[test]
    fn serde_uses_plain_date_text() {
        let date = CalendarDate::from_ymd(2024, 3, 9).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-03-09\"");

        let decoded: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, date);
        assert!(serde_json::from_str::<CalendarDate>("\"2024-3-9\"").is_err());
    }
}
