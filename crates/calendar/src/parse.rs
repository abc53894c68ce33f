//! Parsing of date strings into [`CalendarInstant`] values.
//!
//! Three layouts are accepted:
//!
//! | Layout | Example | Function |
//! |--------|---------|----------|
//! | ISO-8601 date or date-time | `2024-02-01`, `2024-02-01T15:00:00.000Z` | [`parse_iso`] |
//! | Day-month-year | `15-01-2024` | [`parse_dmy`] |
//! | Textual UTC | `04 Dec 1995 00:12:00 UTC` | [`parse_utc_text`] |
//!
//! Fractional seconds are accepted and discarded. No timezone offsets other
//! than `Z` are understood.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::CalendarError;
use crate::format;
use crate::instant::CalendarInstant;

const ISO_DATE: &str = "%Y-%m-%d";
const ISO_DATE_TIME: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%S%.f"];
const DMY_DATE: &str = "%d-%m-%Y";
const UTC_TEXT: &str = "%d %b %Y %H:%M:%S UTC";

/// Parses an ISO-8601 date (`YYYY-MM-DD`) or date-time
/// (`YYYY-MM-DDTHH:MM:SS[.sss][Z]`).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidInstant`] if the string matches neither
/// layout, or a range error if the parsed date is not supported.
pub fn parse_iso(input: &str) -> Result<CalendarInstant, CalendarError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE) {
        return from_naive_date(date);
    }
    parse_date_time(input, &ISO_DATE_TIME)
}

/// Parses a `DD-MM-YYYY` date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidInstant`] if the string does not match.
pub fn parse_dmy(input: &str) -> Result<CalendarInstant, CalendarError> {
    let date = NaiveDate::parse_from_str(input.trim(), DMY_DATE)
        .map_err(|e| invalid_instant(input, &e))?;
    from_naive_date(date)
}

/// Parses `DD Mon YYYY HH:MM:SS UTC`, e.g. `01 Jan 1970 00:00:00 UTC`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidInstant`] if the string does not match.
pub fn parse_utc_text(input: &str) -> Result<CalendarInstant, CalendarError> {
    parse_date_time(input, &[UTC_TEXT])
}

/// Parses any supported layout, trying ISO-8601, then `DD-MM-YYYY`, then
/// textual UTC.
///
/// # Errors
///
/// Returns the ISO-8601 parse error if no layout matches.
pub fn parse_instant(input: &str) -> Result<CalendarInstant, CalendarError> {
    parse_iso(input)
        .or_else(|iso_err| parse_dmy(input).map_err(|_| iso_err))
        .or_else(|iso_err| parse_utc_text(input).map_err(|_| iso_err))
}

/// Parses `input` in any supported layout and returns milliseconds since the
/// Unix epoch.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidInstant`] if no layout matches.
///
/// # Examples
///
/// ```
/// use almanac_calendar::to_timestamp_millis;
///
/// assert_eq!(to_timestamp_millis("01 Jan 1970 00:00:00 UTC").unwrap(), 0);
/// assert_eq!(to_timestamp_millis("04 Dec 1995 00:12:00 UTC").unwrap(), 818_035_920_000);
/// ```
pub fn to_timestamp_millis(input: &str) -> Result<i64, CalendarError> {
    Ok(parse_instant(input)?.timestamp_millis())
}

/// Parses an ISO-8601 string and renders it as `M/D/YYYY, h:mm:ss AM|PM`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidInstant`] if the string is not ISO-8601.
pub fn format_us_long_str(input: &str) -> Result<String, CalendarError> {
    Ok(format::format_us_long(parse_iso(input)?))
}

fn parse_date_time(input: &str, layouts: &[&str]) -> Result<CalendarInstant, CalendarError> {
    let trimmed = input.trim();
    let mut last_err = None;
    for layout in layouts {
        match NaiveDateTime::parse_from_str(trimmed, layout) {
            Ok(dt) => return from_naive_date_time(dt),
            Err(e) => last_err = Some(e),
        }
    }
    Err(CalendarError::InvalidInstant {
        input: input.to_string(),
        reason: last_err.map_or_else(|| "no layout to try".to_string(), |e| e.to_string()),
    })
}

fn from_naive_date(date: NaiveDate) -> Result<CalendarInstant, CalendarError> {
    CalendarInstant::from_ymd(date.year(), date.month() as u8, date.day() as u8)
}

fn from_naive_date_time(dt: NaiveDateTime) -> Result<CalendarInstant, CalendarError> {
    from_naive_date(dt.date())?.with_time(dt.hour() as u8, dt.minute() as u8, dt.second() as u8)
}

fn invalid_instant(input: &str, err: &chrono::ParseError) -> CalendarError {
    CalendarError::InvalidInstant {
        input: input.to_string(),
        reason: err.to_string(),
    }
}
