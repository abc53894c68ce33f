use almanac_calendar::{
    CalendarInstant, MAX_YEAR, Weekday, checked_next_friday, checked_next_friday_the_13th,
    next_friday, next_friday_the_13th, parse_instant,
};

fn date(y: i32, m: u8, d: u8) -> CalendarInstant {
    CalendarInstant::from_ymd(y, m, d).unwrap()
}

#[test]
fn next_friday_reference() {
    assert_eq!(next_friday(date(2024, 2, 3)), date(2024, 2, 9));
    assert_eq!(next_friday(date(2024, 2, 13)), date(2024, 2, 16));
    assert_eq!(next_friday(date(2024, 2, 16)), date(2024, 2, 23));
}

#[test]
fn next_friday_twice_is_one_week_apart() {
    let mut day = date(2023, 12, 1);
    for _ in 0..400 {
        let first = next_friday(day);
        let second = next_friday(first);
        assert_eq!(first.weekday(), Weekday::Friday);
        assert!(first > day);
        assert!(first.days_since_epoch() - day.days_since_epoch() <= 7);
        assert_eq!(second.days_since_epoch() - first.days_since_epoch(), 7);
        day = day.add_days(1);
    }
}

#[test]
fn friday_13th_reference() {
    assert_eq!(next_friday_the_13th(date(2024, 1, 13)), date(2024, 9, 13));
    assert_eq!(next_friday_the_13th(date(2023, 2, 1)), date(2023, 10, 13));
}

#[test]
fn friday_13th_is_always_strictly_later() {
    let mut day = date(1999, 1, 1);
    while day < date(2031, 1, 1) {
        let found = next_friday_the_13th(day);
        assert!(found > day, "{found} not after {day}");
        assert_eq!(found.day(), 13);
        assert_eq!(found.weekday(), Weekday::Friday);
        // Nothing in between qualifies.
        let mut candidate = day.add_days(1);
        while candidate < found {
            assert!(
                !(candidate.day() == 13 && candidate.weekday() == Weekday::Friday),
                "skipped {candidate} searching from {day}"
            );
            candidate = candidate.add_days(1);
        }
        day = day.add_days(17);
    }
}

#[test]
fn searches_at_the_last_supported_year() {
    let last_day = parse_instant("+262142-12-31").unwrap();
    assert_eq!(last_day, date(MAX_YEAR, 12, 31));
    assert_eq!(checked_next_friday(last_day), None);

    let late_december = parse_instant("+262142-12-20").unwrap();
    assert_eq!(checked_next_friday_the_13th(late_december), None);

    // Searches that stay inside the range still succeed.
    let found = checked_next_friday(date(MAX_YEAR, 12, 1)).unwrap();
    assert_eq!(found.year(), MAX_YEAR);
    assert_eq!(found.weekday(), Weekday::Friday);
}
