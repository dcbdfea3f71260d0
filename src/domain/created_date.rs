//! CreatedDate value object.

use super::errors::ValidationError;
use chrono::{DateTime, Datelike, Utc};
use std::fmt;

/// A calendar date used to filter contacts by creation day.
///
/// The month is guaranteed to be within 1..=12. The day is only required to
/// be an integer: a day that no month has (say 0 or 40) is representable and
/// simply matches no contact.
///
/// # Example
///
/// ```
/// use address_book::domain::CreatedDate;
///
/// let date = CreatedDate::parse("2020", "3", "5").unwrap();
/// assert_eq!(date.month(), 3);
/// assert!(CreatedDate::parse("2020", "13", "1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreatedDate {
    year: i64,
    month: u32,
    day: i64,
}

impl CreatedDate {
    /// Create a new CreatedDate, validating the month.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MonthOutOfRange` if `month` is not in 1..=12.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, ValidationError> {
        let month = match u32::try_from(month) {
            Ok(m) if (1..=12).contains(&m) => m,
            _ => return Err(ValidationError::MonthOutOfRange(month)),
        };
        Ok(Self { year, month, day })
    }

    /// Parse year, month and day from their decimal string forms.
    ///
    /// Year and day accept any 64-bit integer; only the month is range-checked.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidNumber` if a component is not an
    /// integer and `ValidationError::MonthOutOfRange` for a bad month.
    pub fn parse(year: &str, month: &str, day: &str) -> Result<Self, ValidationError> {
        let year = parse_int(year)?;
        let month = parse_int(month)?;
        let day = parse_int(day)?;
        Self::new(year, month, day)
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    /// Whether `timestamp` falls on this calendar date (UTC), ignoring time-of-day.
    pub fn matches(&self, timestamp: &DateTime<Utc>) -> bool {
        i64::from(timestamp.year()) == self.year
            && timestamp.month() == self.month
            && i64::from(timestamp.day()) == self.day
    }
}

fn parse_int(raw: &str) -> Result<i64, ValidationError> {
    raw.parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber(raw.to_string()))
}

impl fmt::Display for CreatedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
