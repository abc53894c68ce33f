//! Error types for the almanac-calendar crate.

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// Calendar edge cases such as leap days or month-end rollovers are never
/// errors. These variants cover out-of-range components, unparseable
/// strings and schedule cycles that would never produce a working day.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when an hour, minute or second is out of range.
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// Hour component (must be 0..=23).
        hour: u8,
        /// Minute component (must be 0..=59).
        minute: u8,
        /// Second component (must be 0..=59).
        second: u8,
    },

    /// Returned when a year falls outside the supported range.
    #[error("year {year} outside supported range {min}..={max}")]
    YearOutOfRange {
        /// The offending year.
        year: i64,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// Returned when a day offset from 1970-01-01 cannot be represented as a date.
    #[error("day offset {days} from 1970-01-01 is outside the supported date range")]
    DaysOutOfRange {
        /// The offending offset in days.
        days: i64,
    },

    /// Returned when a string cannot be parsed into a calendar instant.
    #[error("invalid instant {input:?}: {reason}")]
    InvalidInstant {
        /// The input string as provided by the caller.
        input: String,
        /// Description from the underlying parser.
        reason: String,
    },

    /// Returned when a schedule cycle has no working days.
    #[error("invalid schedule cycle: work_days must be at least 1, got {work_days}")]
    InvalidCycle {
        /// The invalid number of working days.
        work_days: u32,
    },
}
