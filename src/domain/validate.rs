use chrono::NaiveDate;
use thiserror::Error;

use super::{parse_amount, Kind};

/// Format used for every date the ledger reads or prints.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date '{0}': expected a real calendar date as YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid amount '{0}': expected a positive number")]
    InvalidAmount(String),

    #[error("Invalid type '{0}': expected 'Income' or 'Expense'")]
    InvalidKind(String),
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// The shape is checked byte by byte first, so inputs like `2024-5-1` or
/// `+2024-05-01` that chrono's `%Y`/`%m` would tolerate are rejected. Calendar
/// validity (month range, month length, leap years) is then left to
/// `NaiveDate`, which follows the proleptic Gregorian rules.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate(input.to_string());

    let bytes = input.as_bytes();
    if bytes.len() != 10 {
        return Err(invalid());
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return Err(invalid());
    }

    // All ten bytes are ASCII at this point.
    let year: i32 = input[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = input[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = input[8..10].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_ok()
}

pub fn is_valid_amount(input: &str) -> bool {
    parse_amount(input).is_ok()
}

/// Case-sensitive: only `Income` and `Expense` are accepted.
pub fn is_valid_kind(input: &str) -> bool {
    input.parse::<Kind>().is_ok()
}
