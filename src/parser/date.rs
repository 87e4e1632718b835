//! Resolution of the three date columns into a timestamp
//!
//! `ls -l` prints `Mon DD HH:MM` for entries modified in the current year
//! and `Mon DD YYYY` otherwise, so the third column carries either a clock
//! time or a year, never both.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::error::{ParseError, ParseResult};

/// English month abbreviations, in calendar order
const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Resolve a modification timestamp from its month, day and time-or-year
/// tokens. `reference` supplies the year when the third token is a time.
pub fn resolve_timestamp(
    month: &str,
    day: &str,
    time_or_year: &str,
    reference: NaiveDateTime,
) -> ParseResult<NaiveDateTime> {
    let month = parse_month(month)?;
    let day = parse_number(day, 2).ok_or_else(|| ParseError::UnparseableDate {
        field: "day",
        token: day.to_string(),
    })?;

    let (year, hour, minute) = if time_or_year.contains(':') {
        let (hour, minute) = parse_time(time_or_year)?;
        (reference.year(), hour, minute)
    } else {
        let year = parse_number(time_or_year, 4).ok_or_else(|| ParseError::UnparseableDate {
            field: "year",
            token: time_or_year.to_string(),
        })?;
        (year as i32, 0, 0)
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or(ParseError::InvalidCalendarDate { year, month, day })
}

/// Month number (1-12) for a three-letter English abbreviation, any case
pub fn parse_month(token: &str) -> ParseResult<u32> {
    MONTHS
        .iter()
        .position(|name| name.eq_ignore_ascii_case(token))
        .map(|index| index as u32 + 1)
        .ok_or_else(|| ParseError::UnknownMonth {
            token: token.to_string(),
        })
}

/// Strict 24-hour `HH:MM`; the hour may be a single digit
fn parse_time(token: &str) -> ParseResult<(u32, u32)> {
    let unparseable = || ParseError::UnparseableDate {
        field: "time",
        token: token.to_string(),
    };

    let (hour, minute) = token.split_once(':').ok_or_else(unparseable)?;
    if minute.len() != 2 {
        return Err(unparseable());
    }

    match (parse_number(hour, 2), parse_number(minute, 2)) {
        (Some(hour), Some(minute)) if hour < 24 && minute < 60 => Ok((hour, minute)),
        _ => Err(unparseable()),
    }
}

/// Unsigned decimal of 1 to `max_digits` ASCII digits
fn parse_number(token: &str, max_digits: usize) -> Option<u32> {
    if token.is_empty() || token.len() > max_digits || !token.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    token.parse().ok()
}
