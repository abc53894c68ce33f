//! Schedule command: list working dates of a work/off cycle over a range.

use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use almanac_calendar::generate_schedule;

use crate::cli::ScheduleArgs;
use crate::config::AlmanacConfig;
use crate::convert;

/// Run the schedule generator.
pub fn run(args: ScheduleArgs) -> Result<()> {
    let _cmd = info_span!("schedule").entered();

    // 1. Load optional TOML config
    let mut config = match args.config {
        Some(ref path) => {
            let toml_str = fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<AlmanacConfig>(&toml_str)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => AlmanacConfig::default(),
    };

    // 2. CLI flags override config file values
    let schedule = &mut config.schedule;
    if let Some(start) = args.start {
        schedule.start = Some(start);
    }
    if let Some(end) = args.end {
        schedule.end = Some(end);
    }
    if let Some(work) = args.work_days {
        schedule.work_days = work;
    }
    if let Some(off) = args.off_days {
        schedule.off_days = off;
    }
    if let Some(output) = args.output {
        schedule.output = Some(output);
    }

    // 3. Build library types and generate
    let range = convert::build_range(schedule)?;
    let cycle = convert::build_cycle(schedule)?;
    info!(
        start = %range.start(),
        end = %range.end(),
        work_days = cycle.work_days(),
        off_days = cycle.off_days(),
        "generating schedule"
    );
    let labels = generate_schedule(range, cycle);
    info!(n_dates = labels.len(), "schedule complete");

    // 4. Emit
    match schedule.output {
        Some(ref path) => {
            let mut body = labels.join("\n");
            if !body.is_empty() {
                body.push('\n');
            }
            fs::write(path, body)
                .with_context(|| format!("failed to write schedule: {}", path.display()))?;
            info!(path = %path.display(), "schedule written");
        }
        None => {
            for label in &labels {
                println!("{label}");
            }
        }
    }
    Ok(())
}
