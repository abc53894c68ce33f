//! Work-schedule generation from a repeating work/off cycle.

use std::iter::FusedIterator;

use tracing::debug;

use crate::error::CalendarError;
use crate::format::format_schedule_label;
use crate::instant::CalendarInstant;
use crate::range::DateRange;

/// A repeating cycle of consecutive working days followed by days off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleCycle {
    work_days: u32,
    off_days: u32,
}

impl ScheduleCycle {
    /// Creates a cycle of `work_days` working days followed by `off_days` days off.
    ///
    /// `off_days = 0` means every day in the range is a working day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidCycle`] if `work_days` is zero.
    pub fn new(work_days: u32, off_days: u32) -> Result<Self, CalendarError> {
        if work_days == 0 {
            return Err(CalendarError::InvalidCycle { work_days });
        }
        Ok(Self {
            work_days,
            off_days,
        })
    }

    /// Returns the number of consecutive working days.
    pub fn work_days(self) -> u32 {
        self.work_days
    }

    /// Returns the number of days off after each working block.
    pub fn off_days(self) -> u32 {
        self.off_days
    }

    /// Returns the length of one full cycle in days.
    pub fn period(self) -> u64 {
        u64::from(self.work_days) + u64::from(self.off_days)
    }
}

/// Iterator over the working dates of a range under a [`ScheduleCycle`].
///
/// Starting at the range start, yields `work_days` consecutive dates, then
/// skips `off_days` dates, and repeats until the cursor passes the range end.
/// The skip happens after every block, including one cut short by the end of
/// the range. A range whose start lies after its end yields nothing.
#[derive(Debug, Clone)]
pub struct WorkSchedule {
    cursor: Option<CalendarInstant>,
    end: CalendarInstant,
    cycle: ScheduleCycle,
    left_in_block: u32,
}

impl WorkSchedule {
    /// Creates the schedule iterator for `range`.
    pub fn new(range: DateRange, cycle: ScheduleCycle) -> Self {
        Self {
            cursor: Some(range.start()),
            end: range.end(),
            cycle,
            left_in_block: cycle.work_days(),
        }
    }
}

impl Iterator for WorkSchedule {
    type Item = CalendarInstant;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.filter(|c| *c <= self.end)?;
        self.left_in_block -= 1;
        let step = if self.left_in_block == 0 {
            self.left_in_block = self.cycle.work_days();
            1 + i64::from(self.cycle.off_days())
        } else {
            1
        };
        // Every yielded date moves the cursor forward by at least one day.
        self.cursor = current.checked_add_days(step);
        Some(current)
    }
}

impl FusedIterator for WorkSchedule {}

/// Generates the working dates of `range` as `DD-MM-YYYY` labels.
///
/// # Examples
///
/// ```
/// use almanac_calendar::{DateRange, ScheduleCycle, generate_schedule};
///
/// let range = DateRange::parse_dmy("01-01-2024", "15-01-2024").unwrap();
/// let cycle = ScheduleCycle::new(1, 3).unwrap();
/// assert_eq!(
///     generate_schedule(range, cycle),
///     ["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]
/// );
/// ```
#[tracing::instrument(
    skip(range, cycle),
    fields(
        start = %range.start(),
        end = %range.end(),
        work_days = cycle.work_days(),
        off_days = cycle.off_days()
    )
)]
pub fn generate_schedule(range: DateRange, cycle: ScheduleCycle) -> Vec<String> {
    if range.is_empty() {
        debug!("range start is after its end");
    }
    let labels: Vec<String> = WorkSchedule::new(range, cycle)
        .map(format_schedule_label)
        .collect();
    debug!(n_dates = labels.len(), "schedule generated");
    labels
}

/// Parses `DD-MM-YYYY` endpoints and generates the schedule.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidInstant`] if either endpoint fails to parse.
pub fn generate_schedule_str(
    start: &str,
    end: &str,
    cycle: ScheduleCycle,
) -> Result<Vec<String>, CalendarError> {
    let range = DateRange::parse_dmy(start, end)?;
    Ok(generate_schedule(range, cycle))
}
