use tracing_subscriber::EnvFilter;

/// The binary and the calendar library; other crates stay silent by default.
const CRATE_TARGETS: &[&str] = &["almanac", "almanac_calendar"];

/// Installs the global subscriber for the `almanac` binary.
///
/// A set `RUST_LOG` replaces the flag-derived filter entirely. Logs go to
/// stderr; command results own stdout.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `-v` enables command progress (`info`), `-vv` adds schedule generation
/// events from the library (`debug`), and `-vvv` adds the month-by-month
/// Friday-the-13th search (`trace`). Without flags only warnings are shown.
fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
