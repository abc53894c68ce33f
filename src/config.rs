use std::path::PathBuf;

use serde::Deserialize;

/// Top-level almanac configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Work-schedule settings.
    #[serde(default)]
    pub schedule: ScheduleToml,
}

/// `[schedule]` table. Dates use the `DD-MM-YYYY` layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default = "default_work_days")]
    pub work_days: u32,
    #[serde(default)]
    pub off_days: u32,
    pub output: Option<PathBuf>,
}

impl Default for ScheduleToml {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            work_days: default_work_days(),
            off_days: 0,
            output: None,
        }
    }
}

fn default_work_days() -> u32 {
    1
}
