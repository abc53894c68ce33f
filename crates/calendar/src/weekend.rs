//! Weekend-day counting without per-day iteration.

use crate::error::CalendarError;
use crate::math;

/// Every run of 28 consecutive days holds exactly four Saturdays and four Sundays.
const FOUR_WEEKS: u8 = 28;
const WEEKEND_DAYS_IN_FOUR_WEEKS: u8 = 8;

/// Returns the number of Saturdays and Sundays in `month` of `year`.
///
/// The first 28 days always contribute eight weekend days. Only the 0 to 3
/// trailing days (29th onward) depend on the weekday of the 1st, and they
/// continue the weekday sequence of the 1st.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12, or
/// [`CalendarError::YearOutOfRange`] if `year` is not supported.
///
/// # Examples
///
/// ```
/// use almanac_calendar::weekend_days_in_month;
///
/// assert_eq!(weekend_days_in_month(5, 2022).unwrap(), 9);
/// assert_eq!(weekend_days_in_month(12, 2023).unwrap(), 10);
/// assert_eq!(weekend_days_in_month(1, 2024).unwrap(), 8);
/// ```
pub fn weekend_days_in_month(month: u8, year: i32) -> Result<u8, CalendarError> {
    let days = math::days_in_month(month, year)?;
    let first = math::weekday_of(year, month, 1)?;
    let trailing = (0..days - FOUR_WEEKS)
        .filter(|&k| first.offset(k).is_weekend())
        .count() as u8;
    Ok(WEEKEND_DAYS_IN_FOUR_WEEKS + trailing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn brute_force(month: u8, year: i32) -> u8 {
        let days = math::days_in_month(month, year).unwrap();
        (1..=days)
            .filter(|&d| math::weekday_of(year, month, d).unwrap().is_weekend())
            .count() as u8
    }

    #[test]
    fn reference_months() {
        assert_eq!(weekend_days_in_month(5, 2022).unwrap(), 9);
        assert_eq!(weekend_days_in_month(12, 2023).unwrap(), 10);
        assert_eq!(weekend_days_in_month(1, 2024).unwrap(), 8);
    }

    #[test]
    fn leap_february_starting_saturday() {
        // 2020-02-01 is a Saturday and February 2020 has 29 days.
        assert_eq!(math::weekday_of(2020, 2, 1).unwrap(), Weekday::Saturday);
        assert_eq!(weekend_days_in_month(2, 2020).unwrap(), 9);
    }

    #[test]
    fn common_february_is_always_eight() {
        for year in [2015, 2021, 2022, 2023, 2025, 2026, 2027] {
            assert_eq!(weekend_days_in_month(2, year).unwrap(), 8);
        }
    }

    #[test]
    fn matches_brute_force_over_four_centuries() {
        for year in 1800..=2200 {
            for month in 1..=12u8 {
                assert_eq!(
                    weekend_days_in_month(month, year).unwrap(),
                    brute_force(month, year),
                    "mismatch for {year}-{month:02}"
                );
            }
        }
    }

    #[test]
    fn invalid_month() {
        assert_eq!(
            weekend_days_in_month(0, 2024).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn unsupported_year() {
        assert!(matches!(
            weekend_days_in_month(1, crate::instant::MAX_YEAR + 1),
            Err(CalendarError::YearOutOfRange { .. })
        ));
    }
}
