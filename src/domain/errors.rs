//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A date component is not an integer.
    InvalidNumber(String),

    /// The month is outside 1..=12.
    MonthOutOfRange(i64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber(raw) => write!(f, "Invalid number: {}", raw),
            Self::MonthOutOfRange(month) => write!(f, "Month out of range: {}", month),
        }
    }
}

impl std::error::Error for ValidationError {}
