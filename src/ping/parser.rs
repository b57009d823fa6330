//! Ping output parsing.
//!
//! The text printed by `ping` is not a format we control, so each statistic
//! is extracted by its own pattern. A pattern that does not match only
//! degrades its own field to a placeholder; the rest of the output is still
//! used.
//!
//! Patterns (macOS `ping` wording):
//!
//! | Field | Pattern |
//! |-------|---------|
//! | packet loss | `<decimal>% packet loss` |
//! | packet counts | `<N> packets transmitted, <M> packets received` |
//! | round-trip time | `round-trip min/avg/max/stddev = <a>/<b>/<c>/<d> ms` |
//! | timeouts | every `Request timeout for icmp_seq` |

use crate::ping::types::{Metric, PacketLoss, ParsedStats, RttStats};
use regex::Regex;
use std::sync::OnceLock;

const PACKET_LOSS_PATTERN: &str = r"(\d+\.?\d*)% packet loss";
const PACKET_COUNTS_PATTERN: &str = r"(\d+) packets transmitted, (\d+) packets received";
const RTT_PATTERN: &str =
    r"round-trip min/avg/max/stddev = ([\d.]+)/([\d.]+)/([\d.]+)/([\d.]+) ms";
const TIMEOUT_MARKER: &str = "Request timeout for icmp_seq";

/// Compiled extraction patterns.
#[derive(Debug, Clone)]
pub struct OutputParser {
    packet_loss: Regex,
    packet_counts: Regex,
    rtt: Regex,
}

impl OutputParser {
    /// Compile the extraction patterns.
    ///
    /// # Panics
    ///
    /// Never in practice: the patterns are constants covered by tests.
    #[must_use]
    pub fn new() -> Self {
        Self {
            packet_loss: Regex::new(PACKET_LOSS_PATTERN).expect("valid packet loss pattern"),
            packet_counts: Regex::new(PACKET_COUNTS_PATTERN).expect("valid packet count pattern"),
            rtt: Regex::new(RTT_PATTERN).expect("valid round-trip pattern"),
        }
    }

    /// Extract statistics from raw ping output.
    ///
    /// Never fails: any input, including an empty string, yields a fully
    /// populated `ParsedStats`.
    #[must_use]
    pub fn parse(&self, output: &str) -> ParsedStats {
        let (packets_transmitted, packets_received) = self.packet_counts(output);

        ParsedStats {
            packets_transmitted,
            packets_received,
            packet_loss: self.packet_loss(output),
            rtt: self.rtt(output),
            timeout_count: output.matches(TIMEOUT_MARKER).count() as u32,
        }
    }

    fn packet_loss(&self, output: &str) -> PacketLoss {
        self.packet_loss
            .captures(output)
            .and_then(|caps| caps[1].parse::<f64>().ok())
            .map_or(PacketLoss::Error, PacketLoss::Percent)
    }

    fn packet_counts(&self, output: &str) -> (Metric<u32>, Metric<u32>) {
        let counts = self.packet_counts.captures(output).and_then(|caps| {
            let transmitted = caps[1].parse::<u32>().ok()?;
            let received = caps[2].parse::<u32>().ok()?;
            Some((transmitted, received))
        });

        match counts {
            Some((transmitted, received)) => (Metric::Value(transmitted), Metric::Value(received)),
            None => (Metric::NotAvailable, Metric::NotAvailable),
        }
    }

    fn rtt(&self, output: &str) -> RttStats {
        let Some(caps) = self.rtt.captures(output) else {
            return RttStats::not_available();
        };

        let token = |idx: usize| Metric::Value(caps[idx].to_string());
        RttStats {
            min: token(1),
            avg: token(2),
            max: token(3),
            stddev: token(4),
        }
    }
}

impl Default for OutputParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse ping output with a shared, lazily compiled parser.
#[must_use]
pub fn parse_output(output: &str) -> ParsedStats {
    static PARSER: OnceLock<OutputParser> = OnceLock::new();
    PARSER.get_or_init(OutputParser::new).parse(output)
}
