//! pingcheck - A concurrent ping tool to diagnose network latency.
//!
//! This crate provides both a library API and a CLI tool for:
//! - Pinging the modem, router and an Internet DNS server at the same time
//! - Parsing the output of the system `ping` into packet and round-trip stats
//! - Saving each host's raw output to `ping_logs/`
//! - Printing a color-coded summary table in a fixed host order
//!
//! # Library Usage
//!
//! ```ignore
//! use pingcheck::{ConfigLoader, LogWriter, Orchestrator, SystemPinger};
//!
//! let registry = ConfigLoader::load(None)?;
//! let orchestrator = Orchestrator::new(SystemPinger::new(), LogWriter::create("ping_logs")?);
//! let rows = orchestrator.run_all(registry.hosts(), 10, |_| {}).await?;
//! println!("{}", pingcheck::report::render(rows, registry.display_order()));
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # 10 packets to each host
//! pingcheck
//!
//! # 30 packets to each host
//! pingcheck -c 30
//!
//! # Custom host list
//! pingcheck --file hosts.json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ping;
pub mod report;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{ConfigLoader, HostRegistry};
pub use error::{Error, Result};
pub use ping::types::{HostEntry, Metric, PacketLoss, ParsedStats, PingTask, RawPingResult, ReportRow};
pub use ping::{LogWriter, Orchestrator, OutputParser, PingRunner, SystemPinger};
