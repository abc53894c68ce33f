//! # almanac-calendar
//!
//! Pure calendar arithmetic for the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str"] -->|"parse_iso() / parse_dmy()"| B["CalendarInstant"]
//!     B -->|".weekday()"| C["Weekday"]
//!     B -->|"iso_week()"| D["IsoWeek"]
//!     B -->|"next_friday()"| B
//!     E["(month, year)"] -->|"weekend_days_in_month()"| F["u8"]
//!     G["DateRange + ScheduleCycle"] -->|"WorkSchedule"| B
//!     B -->|"format_*()"| H["String"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{
//!     CalendarInstant, DateRange, ScheduleCycle, generate_schedule, iso_week_number,
//!     next_friday_the_13th, parse_iso, weekend_days_in_month,
//! };
//!
//! let date = parse_iso("2024-01-31").unwrap();
//! assert_eq!(iso_week_number(date), 5);
//!
//! let next = next_friday_the_13th(CalendarInstant::from_ymd(2024, 1, 13).unwrap());
//! assert_eq!(next, CalendarInstant::from_ymd(2024, 9, 13).unwrap());
//!
//! assert_eq!(weekend_days_in_month(12, 2023).unwrap(), 10);
//!
//! let range = DateRange::parse_dmy("01-01-2024", "10-01-2024").unwrap();
//! let labels = generate_schedule(range, ScheduleCycle::new(1, 1).unwrap());
//! assert_eq!(labels.len(), 5);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `instant` | Date and time value with epoch-day arithmetic |
//! | `weekday` | Weekday enum and English names |
//! | `math` | Leap years, month lengths, quarters, day counts |
//! | `range` | Inclusive date ranges |
//! | `search` | Next weekday and next Friday the 13th |
//! | `week` | ISO-8601 week numbering |
//! | `weekend` | Weekend-day count per month |
//! | `schedule` | Work/off cycle schedule generation |
//! | `parse` | String parsing into instants |
//! | `format` | Display formats |
//! | `error` | Error types |

mod error;
mod format;
mod instant;
mod math;
mod parse;
mod range;
mod schedule;
mod search;
mod week;
mod weekday;
mod weekend;

pub use error::CalendarError;
pub use format::{format_schedule_label, format_time, format_us_long, weekday_name};
pub use instant::{CalendarInstant, MAX_YEAR, MIN_YEAR};
pub use math::{
    days_between_inclusive, days_in_month, is_in_period, is_leap_year, quarter_of, weekday_of,
};
pub use parse::{
    format_us_long_str, parse_dmy, parse_instant, parse_iso, parse_utc_text, to_timestamp_millis,
};
pub use range::DateRange;
pub use schedule::{ScheduleCycle, WorkSchedule, generate_schedule, generate_schedule_str};
pub use search::{
    checked_next_friday, checked_next_friday_the_13th, checked_next_weekday, next_friday,
    next_friday_the_13th, next_weekday,
};
pub use week::{IsoWeek, iso_week, iso_week_number, iso_weeks_in_year};
pub use weekday::{WEEKDAY_NAMES, Weekday};
pub use weekend::weekend_days_in_month;
