mod cli;
mod config;
mod convert;
mod logging;
mod query_cmd;
mod schedule_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Info(args) => query_cmd::info(args),
        Command::NextFriday(args) => query_cmd::next_friday_cmd(args),
        Command::Days(args) => query_cmd::days(args),
        Command::InPeriod(args) => query_cmd::in_period(args),
        Command::Weekends(args) => query_cmd::weekends(args),
        Command::Schedule(args) => schedule_cmd::run(args),
    }
}
