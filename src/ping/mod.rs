//! Ping module.
//!
//! This module provides everything between a host list and report rows:
//! - Running the system `ping` utility with a timeout
//! - Parsing its output into statistics
//! - Running all hosts concurrently and logging raw output

pub mod log;
pub mod orchestrator;
pub mod parser;
pub mod runner;
pub mod types;

pub use log::LogWriter;
pub use orchestrator::{Orchestrator, Progress};
pub use parser::{parse_output, OutputParser};
pub use runner::{PingRunner, SystemPinger};
pub use types::*;
