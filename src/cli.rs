use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Almanac calendar arithmetic toolkit.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Calendar arithmetic: week numbers, weekends, Friday searches and work schedules"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print every derived calendar field of an instant.
    Info(InfoArgs),
    /// Find the next Friday (or Friday the 13th) after an instant.
    NextFriday(NextFridayArgs),
    /// Count the days between two instants, both endpoints included.
    Days(DaysArgs),
    /// Check whether an instant falls inside a period.
    InPeriod(InPeriodArgs),
    /// Count the Saturdays and Sundays in a month.
    Weekends(WeekendsArgs),
    /// Generate working dates from a repeating work/off cycle.
    Schedule(ScheduleArgs),
}

/// Arguments for the `info` subcommand.
#[derive(clap::Args)]
pub struct InfoArgs {
    /// Instant as ISO-8601, DD-MM-YYYY or "DD Mon YYYY HH:MM:SS UTC".
    pub instant: String,
}

/// Arguments for the `next-friday` subcommand.
#[derive(clap::Args)]
pub struct NextFridayArgs {
    /// Instant to search from (exclusive).
    pub instant: String,

    /// Search for the next Friday that falls on the 13th.
    #[arg(long)]
    pub thirteenth: bool,
}

/// Arguments for the `days` subcommand.
#[derive(clap::Args)]
pub struct DaysArgs {
    /// First day of the span.
    pub start: String,

    /// Last day of the span.
    pub end: String,
}

/// Arguments for the `in-period` subcommand.
#[derive(clap::Args)]
pub struct InPeriodArgs {
    /// Instant to test.
    pub instant: String,

    /// Period start (inclusive).
    #[arg(long)]
    pub start: String,

    /// Period end (inclusive).
    #[arg(long)]
    pub end: String,
}

/// Arguments for the `weekends` subcommand.
#[derive(clap::Args)]
pub struct WeekendsArgs {
    /// Month number (1-12).
    pub month: u8,

    /// Calendar year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

/// Arguments for the `schedule` subcommand.
#[derive(clap::Args)]
pub struct ScheduleArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override first day of the range (DD-MM-YYYY).
    #[arg(long)]
    pub start: Option<String>,

    /// Override last day of the range (DD-MM-YYYY).
    #[arg(long)]
    pub end: Option<String>,

    /// Override consecutive working days per cycle.
    #[arg(long = "work", visible_alias = "work-days")]
    pub work_days: Option<u32>,

    /// Override days off per cycle.
    #[arg(long = "off", visible_alias = "off-days")]
    pub off_days: Option<u32>,

    /// Override output file; dates go to stdout when absent.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
