use almanac_calendar::{CalendarInstant, iso_week, iso_week_number, iso_weeks_in_year};
use chrono::{Datelike, NaiveDate};

fn instant(date: NaiveDate) -> CalendarInstant {
    CalendarInstant::from_ymd(date.year(), date.month() as u8, date.day() as u8).unwrap()
}

#[test]
fn reference_dates() {
    let cases: &[(i32, u8, u8, u8)] = &[
        (2024, 1, 3, 1),
        (2024, 1, 31, 5),
        (2024, 2, 23, 8),
    ];
    for &(y, m, d, expected) in cases {
        let date = CalendarInstant::from_ymd(y, m, d).unwrap();
        assert_eq!(
            iso_week_number(date),
            expected,
            "iso_week_number({y}-{m:02}-{d:02})"
        );
    }
}

#[test]
fn matches_chrono_every_day_1990_to_2040() {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2040, 12, 31).unwrap();
    for date in start.iter_days().take_while(|d| *d <= end) {
        let expected = date.iso_week();
        let got = iso_week(instant(date));
        assert_eq!(
            (got.year(), u32::from(got.week())),
            (expected.year(), expected.week()),
            "ISO week mismatch for {date}"
        );
    }
}

#[test]
fn every_year_start_weekday_is_handled() {
    // 2018..=2024 covers January 1 on every weekday.
    for year in 2018..=2024 {
        let jan4 = CalendarInstant::from_ymd(year, 1, 4).unwrap();
        assert_eq!(iso_week(jan4).week(), 1, "Jan 4 {year} must be in week 1");
        assert_eq!(iso_week(jan4).year(), year);
    }
}

#[test]
fn weeks_in_year_matches_last_week() {
    for year in 1990..=2040 {
        let dec28 = NaiveDate::from_ymd_opt(year, 12, 28).unwrap();
        assert_eq!(
            u32::from(iso_weeks_in_year(year).unwrap()),
            dec28.iso_week().week(),
            "weeks in {year}"
        );
    }
}
