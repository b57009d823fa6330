//! Banner and closing lines printed around a run.

use chrono::{DateTime, TimeZone};
use crossterm::style::{style, Stylize};
use std::fmt::Display;
use std::path::Path;

/// Start banner: when the run started and what it will do.
#[must_use]
pub fn start_banner<Tz>(started: &DateTime<Tz>, count: u32, host_count: usize) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let when = format!("Ping test started at: {}", started.format("%Y-%m-%d %H:%M:%S"));
    format!(
        "{}\nStarting ping test ({count} packets each to {host_count} hosts)...",
        style(when).blue().bold()
    )
}

/// Closing note pointing at the log directory.
#[must_use]
pub fn closing_note(log_dir: &Path) -> String {
    let note = format!(
        "Detailed logs have been saved to the '{}' directory.",
        log_dir.display()
    );
    format!("\n{}", style(note).green().bold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_start_banner() {
        let started = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 5).unwrap();
        let banner = start_banner(&started, 10, 3);

        assert!(banner.contains("Ping test started at: 2024-05-01 08:30:05"));
        assert!(banner.ends_with("Starting ping test (10 packets each to 3 hosts)..."));
    }

    #[test]
    fn test_closing_note() {
        let note = closing_note(Path::new("ping_logs"));
        assert!(note.contains("Detailed logs have been saved to the 'ping_logs' directory."));
    }
}
