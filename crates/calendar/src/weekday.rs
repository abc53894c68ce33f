//! Days of the week and their fixed English names.

use std::fmt;

/// English weekday names indexed by [`Weekday::number_from_sunday`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A day of the week.
///
/// Discriminants follow the Sunday-first convention (Sunday = 0, Saturday = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// Sunday (0).
    Sunday,
    /// Monday (1).
    Monday,
    /// Tuesday (2).
    Tuesday,
    /// Wednesday (3).
    Wednesday,
    /// Thursday (4).
    Thursday,
    /// Friday (5).
    Friday,
    /// Saturday (6).
    Saturday,
}

impl Weekday {
    /// All weekdays in Sunday-first order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the weekday for a Sunday-based number, taken modulo 7.
    pub fn from_sunday(n: u8) -> Self {
        Self::ALL[usize::from(n % 7)]
    }

    /// Returns 0 for Sunday through 6 for Saturday.
    pub fn number_from_sunday(self) -> u8 {
        self as u8
    }

    /// Returns 0 for Monday through 6 for Sunday.
    pub fn number_from_monday(self) -> u8 {
        (self as u8 + 6) % 7
    }

    /// Returns the English name of the weekday.
    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// Returns `true` for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Returns the weekday `days` days later.
    pub fn offset(self, days: u8) -> Self {
        Self::from_sunday(((self as u16 + u16::from(days)) % 7) as u8)
    }

    /// Number of days (0..=6) from `self` forward to `other`.
    pub fn days_until(self, other: Weekday) -> u8 {
        (other as u8 + 7 - self as u8) % 7
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
