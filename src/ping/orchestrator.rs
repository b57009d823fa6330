//! Concurrent ping of every configured host.
//!
//! One task per host is run through a worker pool as wide as the host list.
//! Results are handled in completion order: a progress event is emitted, the
//! raw output is logged, and the output is parsed into a report row. Rows
//! come back in completion order and must be sorted before display.

use crate::error::Result;
use crate::ping::log::LogWriter;
use crate::ping::parser::OutputParser;
use crate::ping::runner::PingRunner;
use crate::ping::types::{HostEntry, PingTask, RawPingResult, ReportRow};
use futures::stream::{self, StreamExt};
use std::path::Path;

/// Progress notifications emitted while hosts are pinged.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// A ping task was launched.
    Started(&'a HostEntry),
    /// A ping task finished (successfully or not).
    Finished(&'a RawPingResult),
}

/// Print a progress event as a one-line message on stdout.
pub fn print_progress(event: Progress<'_>) {
    match event {
        Progress::Started(host) => println!("Pinging {host}..."),
        Progress::Finished(result) => println!("  -> Finished pinging {}.", result.host),
    }
}

/// Runs one ping per host concurrently and collects the report rows.
pub struct Orchestrator<R> {
    runner: R,
    parser: OutputParser,
    log: LogWriter,
}

impl<R: PingRunner> Orchestrator<R> {
    #[must_use]
    pub fn new(runner: R, log: LogWriter) -> Self {
        Self {
            runner,
            parser: OutputParser::new(),
            log,
        }
    }

    /// Directory the raw logs are written to.
    #[must_use]
    pub fn log_dir(&self) -> &Path {
        self.log.dir()
    }

    /// Ping every host with `count` echo requests and wait for all of them.
    ///
    /// Returns exactly one row per host, in completion order. A host whose
    /// ping fails or times out still gets a row, with placeholder values.
    ///
    /// # Errors
    ///
    /// Returns an error if a log file cannot be written.
    pub async fn run_all<F>(
        &self,
        hosts: &[HostEntry],
        count: u32,
        on_progress: F,
    ) -> Result<Vec<ReportRow>>
    where
        F: Fn(Progress<'_>),
    {
        let pool_size = hosts.len().max(1);
        let tasks: Vec<PingTask> = hosts
            .iter()
            .cloned()
            .map(|host| PingTask::new(host, count))
            .collect();

        let mut pending = stream::iter(tasks)
            .map(|task| {
                on_progress(Progress::Started(&task.host));
                self.runner.run(task)
            })
            .buffer_unordered(pool_size);

        let mut rows = Vec::with_capacity(hosts.len());
        while let Some(result) = pending.next().await {
            on_progress(Progress::Finished(&result));
            self.log.write(&result)?;

            let stats = self.parser.parse(&result.output);
            rows.push(ReportRow::new(result.host, stats));
        }

        tracing::info!("collected {} of {} hosts", rows.len(), hosts.len());
        Ok(rows)
    }
}
