//! Searches for the next occurrence of a weekday or of a Friday the 13th.
//!
//! The `checked_*` functions return `None` when the answer would lie past
//! [`MAX_YEAR`](crate::MAX_YEAR); the plain versions panic instead.

use tracing::trace;

use crate::instant::CalendarInstant;
use crate::weekday::Weekday;

/// Any 14 consecutive months contain a Friday the 13th, so starting from any
/// month at most this many months are inspected.
const FRIDAY_13TH_SEARCH_MONTHS: u8 = 15;

/// Returns the first instant strictly after `instant` that falls on `target`,
/// or `None` if that lies past the last supported year.
///
/// If `instant` already falls on `target`, the result is exactly one week
/// later. The time of day is preserved.
pub fn checked_next_weekday(
    instant: CalendarInstant,
    target: Weekday,
) -> Option<CalendarInstant> {
    let delta = match instant.weekday().days_until(target) {
        0 => 7,
        n => n,
    };
    instant.checked_add_days(i64::from(delta))
}

/// Like [`checked_next_weekday`] but panics at the end of the supported range.
///
/// # Panics
///
/// Panics if the result lies past the last supported year.
pub fn next_weekday(instant: CalendarInstant, target: Weekday) -> CalendarInstant {
    checked_next_weekday(instant, target)
        .expect("next weekday lies past the last supported year")
}

/// Returns the next Friday strictly after `instant`, or `None` if it lies
/// past the last supported year.
pub fn checked_next_friday(instant: CalendarInstant) -> Option<CalendarInstant> {
    checked_next_weekday(instant, Weekday::Friday)
}

/// Returns the next Friday strictly after `instant`.
///
/// # Panics
///
/// Panics if the result lies past the last supported year.
///
/// # Examples
///
/// ```
/// use almanac_calendar::{CalendarInstant, next_friday};
///
/// let saturday = CalendarInstant::from_ymd(2024, 2, 3).unwrap();
/// assert_eq!(next_friday(saturday), CalendarInstant::from_ymd(2024, 2, 9).unwrap());
/// ```
pub fn next_friday(instant: CalendarInstant) -> CalendarInstant {
    next_weekday(instant, Weekday::Friday)
}

/// Returns midnight of the first Friday the 13th strictly after `instant`,
/// or `None` if the search runs past the last supported year.
///
/// The search starts at the 13th of the instant's month when the day is
/// before the 13th, and at the 13th of the following month otherwise. It
/// then advances one month at a time, wrapping December into January of the
/// next year.
pub fn checked_next_friday_the_13th(instant: CalendarInstant) -> Option<CalendarInstant> {
    let (mut year, mut month) = if instant.day() < 13 {
        (instant.year(), instant.month())
    } else {
        following_month(instant.year(), instant.month())
    };

    for _ in 0..FRIDAY_13TH_SEARCH_MONTHS {
        let thirteenth = CalendarInstant::from_ymd(year, month, 13).ok()?;
        if thirteenth.weekday() == Weekday::Friday {
            trace!(year, month, "found friday the 13th");
            return Some(thirteenth);
        }
        trace!(year, month, "13th is not a friday");
        (year, month) = following_month(year, month);
    }
    unreachable!("every run of 14 consecutive months contains a Friday the 13th")
}

/// Returns midnight of the first Friday the 13th strictly after `instant`.
///
/// # Panics
///
/// Panics if the result lies past the last supported year.
pub fn next_friday_the_13th(instant: CalendarInstant) -> CalendarInstant {
    checked_next_friday_the_13th(instant)
        .expect("next Friday the 13th lies past the last supported year")
}

fn following_month(year: i32, month: u8) -> (i32, u8) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarInstant {
        CalendarInstant::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn next_friday_from_saturday() {
        assert_eq!(next_friday(date(2024, 2, 3)), date(2024, 2, 9));
    }

    #[test]
    fn next_friday_from_tuesday() {
        assert_eq!(next_friday(date(2024, 2, 13)), date(2024, 2, 16));
    }

    #[test]
    fn next_friday_is_strict() {
        assert_eq!(next_friday(date(2024, 2, 16)), date(2024, 2, 23));
    }

    #[test]
    fn next_friday_rolls_over_year() {
        // 2024-12-28 is a Saturday.
        assert_eq!(next_friday(date(2024, 12, 28)), date(2025, 1, 3));
    }

    #[test]
    fn next_friday_keeps_time() {
        let instant = CalendarInstant::from_ymd_hms(2024, 2, 29, 18, 45, 0).unwrap();
        assert_eq!(
            next_friday(instant),
            CalendarInstant::from_ymd_hms(2024, 3, 1, 18, 45, 0).unwrap()
        );
    }

    #[test]
    fn next_weekday_generic() {
        // 2024-02-01 is a Thursday.
        assert_eq!(next_weekday(date(2024, 2, 1), Weekday::Monday), date(2024, 2, 5));
        assert_eq!(next_weekday(date(2024, 2, 1), Weekday::Thursday), date(2024, 2, 8));
    }

    #[test]
    fn friday_13th_reference() {
        assert_eq!(next_friday_the_13th(date(2024, 1, 13)), date(2024, 9, 13));
        assert_eq!(next_friday_the_13th(date(2023, 2, 1)), date(2023, 10, 13));
    }

    #[test]
    fn friday_13th_same_month_before_13th() {
        assert_eq!(next_friday_the_13th(date(2024, 9, 12)), date(2024, 9, 13));
    }

    #[test]
    fn friday_13th_on_the_day_moves_on() {
        assert_eq!(next_friday_the_13th(date(2024, 9, 13)), date(2024, 12, 13));
    }

    #[test]
    fn friday_13th_wraps_year() {
        assert_eq!(next_friday_the_13th(date(2024, 12, 13)), date(2025, 6, 13));
    }

    #[test]
    fn friday_13th_longest_gap() {
        assert_eq!(next_friday_the_13th(date(2001, 7, 13)), date(2002, 9, 13));
    }

    #[test]
    fn checked_search_stops_at_last_supported_year() {
        use crate::instant::MAX_YEAR;
        // The next Friday after December 31 is always in January.
        assert_eq!(checked_next_friday(date(MAX_YEAR, 12, 31)), None);
        assert!(checked_next_friday(date(MAX_YEAR, 12, 1)).is_some());
        // Past the 13th of December the search starts in the next year.
        assert_eq!(checked_next_friday_the_13th(date(MAX_YEAR, 12, 20)), None);
        assert_eq!(
            checked_next_weekday(date(MAX_YEAR, 12, 31), Weekday::Monday),
            None
        );
    }

    #[test]
    fn checked_search_matches_plain_search() {
        let day = date(2024, 1, 13);
        assert_eq!(checked_next_friday(day), Some(next_friday(day)));
        assert_eq!(
            checked_next_friday_the_13th(day),
            Some(next_friday_the_13th(day))
        );
    }

    #[test]
    #[should_panic(expected = "past the last supported year")]
    fn plain_search_panics_past_last_year() {
        next_friday(date(crate::instant::MAX_YEAR, 12, 31));
    }

    #[test]
    fn friday_13th_result_is_midnight() {
        let instant = CalendarInstant::from_ymd_hms(2024, 9, 1, 10, 0, 0).unwrap();
        assert_eq!(next_friday_the_13th(instant), date(2024, 9, 13));
    }
}
