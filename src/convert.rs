//! Pure conversion functions: TOML config structs -> library types.

use anyhow::{Context, Result, bail};

use almanac_calendar::{DateRange, ScheduleCycle};

use crate::config::ScheduleToml;

/// Builds a [`ScheduleCycle`] from the TOML schedule configuration.
pub fn build_cycle(schedule: &ScheduleToml) -> Result<ScheduleCycle> {
    ScheduleCycle::new(schedule.work_days, schedule.off_days)
        .context("invalid [schedule] work/off cycle")
}

/// Builds the inclusive [`DateRange`] from the TOML schedule configuration.
///
/// Both `start` and `end` must be set.
pub fn build_range(schedule: &ScheduleToml) -> Result<DateRange> {
    let (start, end) = match (&schedule.start, &schedule.end) {
        (Some(start), Some(end)) => (start, end),
        (None, _) => bail!("no schedule start: set [schedule].start in config or use --start"),
        (_, None) => bail!("no schedule end: set [schedule].end in config or use --end"),
    };
    DateRange::parse_dmy(start, end).context("invalid [schedule] date range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_calendar::CalendarInstant;

    fn schedule(start: Option<&str>, end: Option<&str>, work: u32, off: u32) -> ScheduleToml {
        ScheduleToml {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            work_days: work,
            off_days: off,
            output: None,
        }
    }

    #[test]
    fn cycle_from_toml() {
        let cycle = build_cycle(&schedule(None, None, 2, 5)).unwrap();
        assert_eq!(cycle.work_days(), 2);
        assert_eq!(cycle.off_days(), 5);
    }

    #[test]
    fn zero_work_days_fails() {
        let err = build_cycle(&schedule(None, None, 0, 1)).unwrap_err();
        assert!(format!("{err:#}").contains("work_days must be at least 1"));
    }

    #[test]
    fn range_from_toml() {
        let range = build_range(&schedule(Some("01-01-2024"), Some("15-01-2024"), 1, 0)).unwrap();
        assert_eq!(range.start(), CalendarInstant::from_ymd(2024, 1, 1).unwrap());
        assert_eq!(range.end(), CalendarInstant::from_ymd(2024, 1, 15).unwrap());
    }

    #[test]
    fn missing_endpoints() {
        let err = build_range(&schedule(None, Some("15-01-2024"), 1, 0)).unwrap_err();
        assert!(err.to_string().contains("no schedule start"));
        let err = build_range(&schedule(Some("01-01-2024"), None, 1, 0)).unwrap_err();
        assert!(err.to_string().contains("no schedule end"));
    }

    #[test]
    fn malformed_endpoint() {
        let err = build_range(&schedule(Some("2024-01-01"), Some("15-01-2024"), 1, 0)).unwrap_err();
        assert!(format!("{err:#}").contains("2024-01-01"));
    }
}
