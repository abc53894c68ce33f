//! Inclusive date ranges.

use crate::error::CalendarError;
use crate::instant::CalendarInstant;
use crate::parse;

/// An inclusive range of instants.
///
/// Construction never reorders or rejects the endpoints. A range whose start
/// lies after its end is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: CalendarInstant,
    end: CalendarInstant,
}

impl DateRange {
    /// Creates a range from `start` to `end`, both included.
    pub fn new(start: CalendarInstant, end: CalendarInstant) -> Self {
        Self { start, end }
    }

    /// Parses ISO-8601 endpoints (`YYYY-MM-DD` or full date-time).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidInstant`] if either endpoint fails to parse.
    pub fn parse_iso(start: &str, end: &str) -> Result<Self, CalendarError> {
        Ok(Self::new(parse::parse_iso(start)?, parse::parse_iso(end)?))
    }

    /// Parses `DD-MM-YYYY` endpoints, the layout used for work schedules.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidInstant`] if either endpoint fails to parse.
    pub fn parse_dmy(start: &str, end: &str) -> Result<Self, CalendarError> {
        Ok(Self::new(parse::parse_dmy(start)?, parse::parse_dmy(end)?))
    }

    /// Returns the first instant of the range.
    pub fn start(&self) -> CalendarInstant {
        self.start
    }

    /// Returns the last instant of the range.
    pub fn end(&self) -> CalendarInstant {
        self.end
    }

    /// Returns `true` if the start lies after the end.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Returns `true` if `start <= instant <= end`.
    pub fn contains(&self, instant: CalendarInstant) -> bool {
        self.start <= instant && instant <= self.end
    }
}
