//! Single-value calendar queries: info, next-friday, days, in-period, weekends.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use almanac_calendar::{
    CalendarInstant, DateRange, checked_next_friday, checked_next_friday_the_13th,
    days_between_inclusive, format_time, format_us_long, is_in_period, iso_weeks_in_year,
    parse_instant, weekend_days_in_month,
};

use crate::cli::{DaysArgs, InPeriodArgs, InfoArgs, NextFridayArgs, WeekendsArgs};

fn parse_arg(input: &str, what: &str) -> Result<CalendarInstant> {
    parse_instant(input).with_context(|| format!("failed to parse {what}"))
}

/// Print every derived field of one instant.
pub fn info(args: InfoArgs) -> Result<()> {
    let _cmd = info_span!("info").entered();
    let instant = parse_arg(&args.instant, "instant")?;
    debug!(%instant, "parsed");

    let week = instant.iso_week();
    let weekends = weekend_days_in_month(instant.month(), instant.year())
        .context("failed to count weekend days")?;
    let weeks_in_year =
        iso_weeks_in_year(instant.year()).context("failed to count ISO weeks in year")?;
    println!("instant:        {instant}");
    println!("timestamp_ms:   {}", instant.timestamp_millis());
    println!("time:           {}", format_time(instant));
    println!("weekday:        {}", instant.weekday());
    println!("quarter:        {}", instant.quarter());
    println!("iso_week:       {}-W{:02}", week.year(), week.week());
    println!("iso_weeks:      {weeks_in_year}");
    println!("leap_year:      {}", instant.is_leap_year());
    println!("days_in_month:  {}", instant.days_in_month());
    println!("weekend_days:   {weekends}");
    println!("us_long:        {}", format_us_long(instant));
    Ok(())
}

/// Print the next Friday, or the next Friday the 13th.
pub fn next_friday_cmd(args: NextFridayArgs) -> Result<()> {
    let _cmd = info_span!("next_friday", thirteenth = args.thirteenth).entered();
    let from = parse_arg(&args.instant, "instant")?;
    let found = find_next_friday(from, args.thirteenth)?;
    println!("{found}");
    Ok(())
}

fn find_next_friday(from: CalendarInstant, thirteenth: bool) -> Result<CalendarInstant> {
    let found = if thirteenth {
        checked_next_friday_the_13th(from)
    } else {
        checked_next_friday(from)
    };
    found.with_context(|| format!("no Friday after {from} within the supported year range"))
}

/// Print the inclusive day count between two instants.
pub fn days(args: DaysArgs) -> Result<()> {
    let _cmd = info_span!("days").entered();
    let start = parse_arg(&args.start, "start")?;
    let end = parse_arg(&args.end, "end")?;
    println!("{}", days_between_inclusive(start, end));
    Ok(())
}

/// Print whether an instant falls inside a period.
pub fn in_period(args: InPeriodArgs) -> Result<()> {
    let _cmd = info_span!("in_period").entered();
    let instant = parse_arg(&args.instant, "instant")?;
    let period = DateRange::new(
        parse_arg(&args.start, "period start")?,
        parse_arg(&args.end, "period end")?,
    );
    if period.is_empty() {
        debug!(start = %period.start(), end = %period.end(), "period is empty");
    }
    println!("{}", is_in_period(instant, &period));
    Ok(())
}

/// Print the number of weekend days in a month.
pub fn weekends(args: WeekendsArgs) -> Result<()> {
    let _cmd = info_span!("weekends", month = args.month, year = args.year).entered();
    let count = weekend_days_in_month(args.month, args.year).with_context(|| {
        format!(
            "failed to count weekend days for {}-{:02}",
            args.year, args.month
        )
    })?;
    println!("{count}");
    Ok(())
}
