//! Formatting utilities used for CLI and report output.

use chrono::TimeDelta;

/// Fractional hours with two decimals, e.g. `1.50`.
pub fn hours(d: TimeDelta) -> String {
    format!("{:.2}", d.num_seconds() as f64 / 3600.0)
}

/// Elapsed time as `HH:MM:SS` for the live timer.
pub fn hhmmss(d: TimeDelta) -> String {
    let secs = d.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}
