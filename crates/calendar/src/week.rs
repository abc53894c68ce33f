//! ISO-8601 week numbering.
//!
//! Weeks start on Monday. Week 1 of a year is the week containing that year's
//! first Thursday (equivalently, the week containing January 4). A date
//! therefore belongs to the week-numbering year of the Thursday in its week:
//! January 1–3 can fall in week 52 or 53 of the previous year, and December
//! 29–31 can fall in week 1 of the next.

use crate::error::CalendarError;
use crate::instant::CalendarInstant;
use crate::math;
use crate::weekday::Weekday;

/// An ISO-8601 week: week-numbering year and week (1..=53).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoWeek {
    year: i32,
    week: u8,
}

impl IsoWeek {
    /// Returns the week-numbering year, which may differ from the calendar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the week number (1..=53).
    pub fn week(self) -> u8 {
        self.week
    }
}

/// Computes the ISO-8601 week of `instant`.
///
/// The date is shifted to the Thursday of its Monday-start week. The week
/// number counts the Thursdays of that Thursday's year up to and including
/// it, so it is one plus the Thursday's zero-based day of year divided by 7.
pub fn iso_week(instant: CalendarInstant) -> IsoWeek {
    let (year, week) = week_date(instant.year(), instant.ordinal(), instant.weekday());
    IsoWeek { year, week }
}

/// Returns the ISO-8601 week number (1..=53) of `instant`.
///
/// # Examples
///
/// ```
/// use almanac_calendar::{CalendarInstant, iso_week_number};
///
/// let date = CalendarInstant::from_ymd(2024, 2, 23).unwrap();
/// assert_eq!(iso_week_number(date), 8);
/// ```
pub fn iso_week_number(instant: CalendarInstant) -> u8 {
    iso_week(instant).week()
}

/// Returns the number of ISO weeks (52 or 53) in the week-numbering `year`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is not supported.
pub fn iso_weeks_in_year(year: i32) -> Result<u8, CalendarError> {
    // December 28 always lies in the last ISO week of its year.
    let dec28 = CalendarInstant::from_ymd(year, 12, 28)?;
    Ok(iso_week_number(dec28))
}

/// `(week-numbering year, week)` for the `ordinal`-th day of `year`.
fn week_date(year: i32, ordinal: u16, weekday: Weekday) -> (i32, u8) {
    // Day of `year` holding the Thursday of the same week; may spill over
    // into the neighbouring years.
    let thursday = i32::from(ordinal) - i32::from(weekday.number_from_monday()) + 3;
    let (year, thursday) = if thursday < 1 {
        (year - 1, thursday + days_in_year(year - 1))
    } else if thursday > days_in_year(year) {
        (year + 1, thursday - days_in_year(year))
    } else {
        (year, thursday)
    };
    (year, ((thursday - 1) / 7 + 1) as u8)
}

fn days_in_year(year: i32) -> i32 {
    if math::is_leap_year(year) { 366 } else { 365 }
}
