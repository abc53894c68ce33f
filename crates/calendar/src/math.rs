//! Gregorian calendar primitives: month lengths, leap years, quarters and
//! inclusive day counts.

use crate::error::CalendarError;
use crate::instant::CalendarInstant;
use crate::range::DateRange;
use crate::weekday::Weekday;

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// # Examples
///
/// ```
/// use almanac_calendar::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Returns the number of days in `month` (1..=12) of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn days_in_month(month: u8, year: i32) -> Result<u8, CalendarError> {
    check_month(month)?;
    Ok(month_length(month, year))
}

/// Month length for an already-validated month.
pub(crate) fn month_length(month: u8, year: i32) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[usize::from(month)]
    }
}

pub(crate) fn check_month(month: u8) -> Result<(), CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(())
}

/// Returns the quarter (1..=4) that `month` falls in.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn quarter_of(month: u8) -> Result<u8, CalendarError> {
    check_month(month)?;
    Ok((month - 1) / 3 + 1)
}

/// Counts the days from `start` to `end`, both endpoints included.
///
/// The millisecond difference is floor-divided by the length of a day, so
/// partial days round toward the past. A reversed range yields zero or a
/// negative count; the result is never clamped.
///
/// # Examples
///
/// ```
/// use almanac_calendar::{CalendarInstant, days_between_inclusive};
///
/// let start = CalendarInstant::from_ymd(2024, 2, 1).unwrap();
/// let end = CalendarInstant::from_ymd(2024, 2, 12).unwrap();
/// assert_eq!(days_between_inclusive(start, end), 12);
/// ```
pub fn days_between_inclusive(start: CalendarInstant, end: CalendarInstant) -> i64 {
    let elapsed = end.timestamp_millis() - start.timestamp_millis();
    elapsed.div_euclid(MILLIS_PER_DAY) + 1
}

/// Returns `true` if `instant` lies within `period`, endpoints included.
///
/// Comparison is chronological over the full instant, time of day included.
pub fn is_in_period(instant: CalendarInstant, period: &DateRange) -> bool {
    period.contains(instant)
}

/// Weekday of a (year, month, day) triple.
///
/// # Errors
///
/// Returns [`CalendarError`] if the triple is not a supported date.
pub fn weekday_of(year: i32, month: u8, day: u8) -> Result<Weekday, CalendarError> {
    Ok(CalendarInstant::from_ymd(year, month, day)?.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2022));
        assert!(is_leap_year(2020));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn days_in_month_table() {
        let common = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, &expected) in common.iter().enumerate() {
            let month = i as u8 + 1;
            assert_eq!(days_in_month(month, 2023).unwrap(), expected);
        }
        assert_eq!(days_in_month(1, 2024).unwrap(), 31);
        assert_eq!(days_in_month(2, 2024).unwrap(), 29);
        assert_eq!(days_in_month(2, 1900).unwrap(), 28);
        assert_eq!(days_in_month(2, 2000).unwrap(), 29);
    }

    #[test]
    fn days_in_month_invalid() {
        assert_eq!(
            days_in_month(0, 2024).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(13, 2024).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn quarters() {
        let expected = [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4];
        for month in 1..=12u8 {
            assert_eq!(quarter_of(month).unwrap(), expected[usize::from(month - 1)]);
        }
        assert!(quarter_of(0).is_err());
        assert!(quarter_of(13).is_err());
    }

    #[test]
    fn weekdays() {
        assert_eq!(weekday_of(1970, 1, 1).unwrap(), Weekday::Thursday);
        assert_eq!(weekday_of(1969, 12, 28).unwrap(), Weekday::Sunday);
        assert_eq!(weekday_of(2024, 2, 3).unwrap(), Weekday::Saturday);
        assert_eq!(weekday_of(2024, 1, 30).unwrap(), Weekday::Tuesday);
        assert_eq!(weekday_of(1995, 12, 3).unwrap(), Weekday::Sunday);
    }

    #[test]
    fn weekday_of_rejects_missing_dates() {
        assert!(matches!(
            weekday_of(2023, 2, 29),
            Err(CalendarError::InvalidDay { .. })
        ));
        assert_eq!(
            weekday_of(2023, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }
}
