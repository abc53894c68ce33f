//! Display formats for calendar instants.

use crate::instant::CalendarInstant;

/// Formats the time of day as zero-padded 24-hour `HH:MM:SS`.
pub fn format_time(instant: CalendarInstant) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        instant.hour(),
        instant.minute(),
        instant.second()
    )
}

/// Returns the English name of the instant's weekday.
pub fn weekday_name(instant: CalendarInstant) -> &'static str {
    instant.weekday().name()
}

/// Formats as US long form `M/D/YYYY, h:mm:ss AM|PM`.
///
/// Month, day and hour are not padded. Midnight and noon render as hour 12.
///
/// # Examples
///
/// ```
/// use almanac_calendar::{CalendarInstant, format_us_long};
///
/// let instant = CalendarInstant::from_ymd_hms(2024, 2, 1, 15, 0, 0).unwrap();
/// assert_eq!(format_us_long(instant), "2/1/2024, 3:00:00 PM");
/// ```
pub fn format_us_long(instant: CalendarInstant) -> String {
    let (hour, meridiem) = match instant.hour() {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!(
        "{}/{}/{:04}, {}:{:02}:{:02} {}",
        instant.month(),
        instant.day(),
        instant.year(),
        hour,
        instant.minute(),
        instant.second(),
        meridiem
    )
}

/// Formats the date as `DD-MM-YYYY`, the layout of work-schedule entries.
pub fn format_schedule_label(instant: CalendarInstant) -> String {
    format!(
        "{:02}-{:02}-{:04}",
        instant.day(),
        instant.month(),
        instant.year()
    )
}
