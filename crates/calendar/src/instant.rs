//! Calendar instant: a Gregorian date and wall-clock time in one fixed zone.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::error::CalendarError;
use crate::math::{self, MILLIS_PER_DAY};
use crate::week::{self, IsoWeek};
use crate::weekday::Weekday;

/// Smallest supported year.
pub const MIN_YEAR: i32 = -262_143;
/// Largest supported year.
pub const MAX_YEAR: i32 = 262_142;

const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A proleptic Gregorian date with a second-resolution time of day.
///
/// All instants share a single reference zone (UTC); no offset is stored.
/// The weekday is derived from the date on demand. Values are immutable:
/// arithmetic returns a new instant. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarInstant {
    // Sub-second fields are always zero.
    datetime: NaiveDateTime,
}

impl CalendarInstant {
    /// Creates an instant at midnight on the given date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`], the month is outside 1..=12, or the day
    /// does not exist in that month.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        check_year(i64::from(year))?;
        math::check_month(month)?;
        let max_day = math::month_length(month, year);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        let date = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .ok_or_else(|| year_out_of_range(i64::from(year)))?;
        Ok(Self {
            datetime: date.and_time(NaiveTime::MIN),
        })
    }

    /// Creates an instant from date and time components.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if any component is out of range.
    pub fn from_ymd_hms(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, CalendarError> {
        Self::from_ymd(year, month, day)?.with_time(hour, minute, second)
    }

    /// Returns the same date at the given time of day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if `hour > 23`, `minute > 59`
    /// or `second > 59`.
    pub fn with_time(self, hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
        let time = NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
            .ok_or(CalendarError::InvalidTime {
                hour,
                minute,
                second,
            })?;
        Ok(Self {
            datetime: self.datetime.date().and_time(time),
        })
    }

    /// Creates an instant at midnight, `days` days after 1970-01-01.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DaysOutOfRange`] if the offset cannot be
    /// represented, or [`CalendarError::YearOutOfRange`] if the resulting
    /// year is not supported.
    pub fn from_days_since_epoch(days: i64) -> Result<Self, CalendarError> {
        let date = TimeDelta::try_days(days)
            .and_then(|delta| unix_epoch().checked_add_signed(delta))
            .ok_or(CalendarError::DaysOutOfRange { days })?;
        Self::from_datetime(date.and_time(NaiveTime::MIN))
    }

    /// Creates an instant from milliseconds since the Unix epoch.
    ///
    /// Sub-second precision is truncated toward the past.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DaysOutOfRange`] or
    /// [`CalendarError::YearOutOfRange`] if the resulting date is not
    /// supported.
    pub fn from_timestamp_millis(millis: i64) -> Result<Self, CalendarError> {
        let datetime = DateTime::from_timestamp(millis.div_euclid(1000), 0)
            .ok_or(CalendarError::DaysOutOfRange {
                days: millis.div_euclid(MILLIS_PER_DAY),
            })?
            .naive_utc();
        Self::from_datetime(datetime)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.datetime.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.datetime.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.datetime.day() as u8
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.datetime.hour() as u8
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.datetime.minute() as u8
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.datetime.second() as u8
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        Weekday::from_sunday(self.datetime.weekday().num_days_from_sunday() as u8)
    }

    /// Returns the day of the year (1..=366).
    pub fn ordinal(self) -> u16 {
        self.datetime.ordinal() as u16
    }

    /// Returns `true` if the instant's year is a leap year.
    pub fn is_leap_year(self) -> bool {
        math::is_leap_year(self.year())
    }

    /// Returns the number of days in the instant's month.
    pub fn days_in_month(self) -> u8 {
        math::month_length(self.month(), self.year())
    }

    /// Returns the quarter of the year (1..=4).
    pub fn quarter(self) -> u8 {
        (self.month() - 1) / 3 + 1
    }

    /// Returns the ISO-8601 week date of this instant.
    pub fn iso_week(self) -> IsoWeek {
        week::iso_week(self)
    }

    /// Returns the number of whole days since 1970-01-01.
    pub fn days_since_epoch(self) -> i64 {
        (self.datetime.date() - unix_epoch()).num_days()
    }

    /// Returns the seconds elapsed since midnight.
    pub fn seconds_of_day(self) -> i64 {
        i64::from(self.datetime.num_seconds_from_midnight())
    }

    /// Returns milliseconds since 1970-01-01T00:00:00Z.
    pub fn timestamp_millis(self) -> i64 {
        self.datetime.and_utc().timestamp_millis()
    }

    /// Returns the instant `days` calendar days later (or earlier when negative),
    /// keeping the time of day. Returns `None` if the year leaves the
    /// supported range.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let datetime = self
            .datetime
            .checked_add_signed(TimeDelta::try_days(days)?)?;
        Self::from_datetime(datetime).ok()
    }

    /// Returns the instant `days` calendar days later (or earlier when negative),
    /// keeping the time of day.
    ///
    /// # Panics
    ///
    /// Panics if the resulting year is outside [`MIN_YEAR`]..=[`MAX_YEAR`].
    /// Use [`checked_add_days`](Self::checked_add_days) near the range edges.
    pub fn add_days(self, days: i64) -> Self {
        self.checked_add_days(days)
            .expect("date arithmetic left the supported year range")
    }

    fn from_datetime(datetime: NaiveDateTime) -> Result<Self, CalendarError> {
        check_year(i64::from(datetime.year()))?;
        Ok(Self { datetime })
    }
}

/// Renders ISO-8601 `YYYY-MM-DDTHH:MM:SSZ`. Years past 9999 carry a `+` sign,
/// which the ISO parser accepts back.
impl fmt::Display for CalendarInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format(DISPLAY_FORMAT))
    }
}

fn unix_epoch() -> NaiveDate {
    DateTime::UNIX_EPOCH.date_naive()
}

fn check_year(year: i64) -> Result<i32, CalendarError> {
    if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
        return Err(year_out_of_range(year));
    }
    Ok(year as i32)
}

fn year_out_of_range(year: i64) -> CalendarError {
    CalendarError::YearOutOfRange {
        year,
        min: MIN_YEAR,
        max: MAX_YEAR,
    }
}
