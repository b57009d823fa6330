//! Ping types and data structures.
//!
//! This module provides the value records that flow through one run:
//! a host, the task built for it, the raw command output, the statistics
//! extracted from that output, and the row finally rendered in the table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown when a statistic is missing from the ping output.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder shown when the packet loss line is missing.
pub const PARSE_ERROR: &str = "Error";

/// A named network endpoint to be pinged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostEntry {
    /// Human label, unique within a registry (e.g., "Router")
    pub name: String,
    /// IP address or hostname handed to `ping`
    pub address: String,
}

impl HostEntry {
    /// Create a new host entry.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let host = HostEntry::new("Google DNS", "8.8.8.8");
    /// ```
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// File name of this host's log, with spaces replaced by underscores.
    #[must_use]
    pub fn log_file_name(&self) -> String {
        format!("{}_ping_results.txt", self.name.replace(' ', "_"))
    }
}

impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.address)
    }
}

/// One unit of work: ping `host` with `count` echo requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingTask {
    pub host: HostEntry,
    pub count: u32,
}

impl PingTask {
    #[must_use]
    pub fn new(host: HostEntry, count: u32) -> Self {
        Self { host, count }
    }
}

/// Output captured from one ping invocation.
///
/// `output` is either the command's stdout and stderr, or a synthetic
/// diagnostic when the command timed out or could not be started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPingResult {
    pub host: HostEntry,
    pub output: String,
}

impl RawPingResult {
    pub fn new(host: HostEntry, output: impl Into<String>) -> Self {
        Self {
            host,
            output: output.into(),
        }
    }
}

/// A statistic that may be missing from the ping output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metric<T> {
    /// Value extracted from the output
    Value(T),
    /// The pattern was absent, rendered as "N/A"
    NotAvailable,
}

impl<T: fmt::Display> fmt::Display for Metric<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => v.fmt(f),
            Self::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Packet loss percentage, the primary health signal of a host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PacketLoss {
    /// Percentage as reported by ping (0.0 - 100.0)
    Percent(f64),
    /// The packet loss line was absent, rendered as "Error"
    Error,
}

impl PacketLoss {
    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        match self {
            Self::Percent(p) => Some(*p),
            Self::Error => None,
        }
    }
}

impl fmt::Display for PacketLoss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p:.1}"),
            Self::Error => f.write_str(PARSE_ERROR),
        }
    }
}

/// Round-trip time figures, kept as the exact tokens ping printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RttStats {
    pub min: Metric<String>,
    pub avg: Metric<String>,
    pub max: Metric<String>,
    pub stddev: Metric<String>,
}

impl RttStats {
    /// All four figures missing.
    #[must_use]
    pub fn not_available() -> Self {
        Self {
            min: Metric::NotAvailable,
            avg: Metric::NotAvailable,
            max: Metric::NotAvailable,
            stddev: Metric::NotAvailable,
        }
    }
}

/// Statistics extracted from one host's ping output.
///
/// Every field always holds either a genuine value or its placeholder, so
/// formatting a row never has to deal with a missing field.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStats {
    pub packets_transmitted: Metric<u32>,
    pub packets_received: Metric<u32>,
    pub packet_loss: PacketLoss,
    pub rtt: RttStats,
    /// Number of "Request timeout for icmp_seq" lines
    pub timeout_count: u32,
}

/// A host together with its statistics, one line of the summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub address: String,
    pub stats: ParsedStats,
}

impl ReportRow {
    #[must_use]
    pub fn new(host: HostEntry, stats: ParsedStats) -> Self {
        Self {
            name: host.name,
            address: host.address,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name_replaces_spaces() {
        let host = HostEntry::new("Google DNS", "8.8.8.8");
        assert_eq!(host.log_file_name(), "Google_DNS_ping_results.txt");

        let host = HostEntry::new("Router", "192.168.1.1");
        assert_eq!(host.log_file_name(), "Router_ping_results.txt");
    }

    #[test]
    fn test_host_display() {
        let host = HostEntry::new("Modem", "10.0.0.1");
        assert_eq!(host.to_string(), "Modem (10.0.0.1)");
    }

    #[test]
    fn test_metric_display() {
        assert_eq!(Metric::Value(10).to_string(), "10");
        assert_eq!(Metric::<u32>::NotAvailable.to_string(), "N/A");
        assert_eq!(Metric::Value("1.234".to_string()).to_string(), "1.234");
    }

    #[test]
    fn test_packet_loss_display() {
        assert_eq!(PacketLoss::Percent(0.0).to_string(), "0.0");
        assert_eq!(PacketLoss::Percent(33.333).to_string(), "33.3");
        assert_eq!(PacketLoss::Error.to_string(), "Error");
        assert_eq!(PacketLoss::Error.percent(), None);
    }
}
