//! Command-line interface (CLI) argument parsing module.
//!
//! This module provides CLI argument parsing using `clap`. There are no
//! subcommands: a run pings every configured host once.

use clap::Parser;
use std::path::PathBuf;

/// Default number of echo requests per host.
pub const DEFAULT_COUNT: u32 = 10;

/// CLI argument parser using clap derive macro.
///
/// # Example
///
/// ```ignore
/// let cli = Cli::parse();
/// println!("sending {} packets to each host", cli.count);
/// ```
#[derive(Parser, Debug)]
#[command(
    name = "pingcheck",
    version,
    about = "A concurrent ping tool to diagnose network latency",
    long_about = "Pings the modem, the router and an Internet DNS server at the same time, \
                  saves each raw ping output under ping_logs/ and prints a summary table."
)]
pub struct Cli {
    /// The number of ping packets to send to each host
    #[arg(short, long, default_value_t = DEFAULT_COUNT, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Host list file (JSON format)
    #[arg(short, long, env = "PINGCHECK_HOSTS")]
    pub file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Parse CLI arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_count() {
        let cli = Cli::try_parse_from(["pingcheck"]).unwrap();
        assert_eq!(cli.count, 10);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_count_flag() {
        let cli = Cli::try_parse_from(["pingcheck", "-c", "3"]).unwrap();
        assert_eq!(cli.count, 3);

        let cli = Cli::try_parse_from(["pingcheck", "--count", "25"]).unwrap();
        assert_eq!(cli.count, 25);
    }

    #[test]
    fn test_count_must_be_positive() {
        assert!(Cli::try_parse_from(["pingcheck", "-c", "0"]).is_err());
        assert!(Cli::try_parse_from(["pingcheck", "-c", "-2"]).is_err());
        assert!(Cli::try_parse_from(["pingcheck", "-c", "ten"]).is_err());
    }

    #[test]
    fn test_file_flag() {
        let cli = Cli::try_parse_from(["pingcheck", "-f", "hosts.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("hosts.json")));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["pingcheck", "-v", "-q"]).is_err());
    }
}
