//! Ping runner invoking the system `ping` utility.
//!
//! Each invocation is bounded by an overall timeout of `count + 10` seconds.
//! Per-packet timeout flags differ between platforms, so none are passed and
//! the overall timeout is the only bound.

use crate::ping::types::{PingTask, RawPingResult};
use futures::future::BoxFuture;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Seconds added to the packet count to form the invocation timeout.
pub const TIMEOUT_MARGIN_SECS: u64 = 10;

/// Default ping program.
const PING_PROGRAM: &str = "ping";

/// Something that turns a `PingTask` into raw ping output.
///
/// Implementations must not fail: any problem is reported inside the
/// returned `RawPingResult`.
pub trait PingRunner: Send + Sync {
    /// Ping the task's host and capture the output.
    fn run(&self, task: PingTask) -> BoxFuture<'_, RawPingResult>;
}

/// Overall timeout for an invocation sending `count` echo requests.
#[must_use]
pub fn invocation_timeout(count: u32) -> Duration {
    Duration::from_secs(u64::from(count) + TIMEOUT_MARGIN_SECS)
}

/// Diagnostic substituted for the output of a timed out invocation.
#[must_use]
pub fn timeout_message(limit: Duration) -> String {
    format!("Ping command timed out after {} seconds.", limit.as_secs())
}

/// Diagnostic substituted for the output of a failed invocation.
#[must_use]
pub fn failure_message(err: &std::io::Error) -> String {
    format!("An error occurred: {err}")
}

/// Runs `ping -c <count> <address>` as a child process.
///
/// # Example
///
/// ```ignore
/// let pinger = SystemPinger::new();
/// let task = PingTask::new(HostEntry::new("Router", "192.168.1.1"), 10);
/// let result = pinger.run(task).await;
/// println!("{}", result.output);
/// ```
#[derive(Debug, Clone)]
pub struct SystemPinger {
    program: String,
}

impl SystemPinger {
    /// Create a runner using the `ping` found on `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(PING_PROGRAM)
    }

    /// Create a runner using a specific ping program.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn ping(&self, task: PingTask) -> RawPingResult {
        let limit = invocation_timeout(task.count);
        let host = task.host;

        tracing::debug!(
            "spawning {} -c {} {} (timeout {}s)",
            self.program,
            task.count,
            host.address,
            limit.as_secs()
        );

        let child = Command::new(&self.program)
            .arg("-c")
            .arg(task.count.to_string())
            .arg(&host.address)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = match timeout(limit, child).await {
            Ok(Ok(out)) => {
                tracing::debug!("ping for {host} exited with {}", out.status);
                let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&out.stderr));
                text
            }
            Ok(Err(e)) => {
                tracing::warn!("failed to run {} for {host}: {e}", self.program);
                failure_message(&e)
            }
            Err(_) => {
                tracing::warn!("ping for {host} timed out after {}s", limit.as_secs());
                timeout_message(limit)
            }
        };

        RawPingResult::new(host, output)
    }
}

impl Default for SystemPinger {
    fn default() -> Self {
        Self::new()
    }
}

impl PingRunner for SystemPinger {
    fn run(&self, task: PingTask) -> BoxFuture<'_, RawPingResult> {
        Box::pin(self.ping(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ping::types::HostEntry;

    #[test]
    fn test_invocation_timeout() {
        assert_eq!(invocation_timeout(10), Duration::from_secs(20));
        assert_eq!(invocation_timeout(1), Duration::from_secs(11));
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(
            timeout_message(invocation_timeout(10)),
            "Ping command timed out after 20 seconds."
        );
    }

    #[tokio::test]
    async fn test_missing_program_degrades_to_message() {
        let pinger = SystemPinger::with_program("pingcheck-no-such-program");
        let task = PingTask::new(HostEntry::new("Router", "192.168.1.1"), 1);
        let result = pinger.run(task).await;

        assert_eq!(result.host.name, "Router");
        assert!(result.output.starts_with("An error occurred: "));
    }

    #[tokio::test]
    async fn test_ping_localhost() {
        // Needs a ping binary and ICMP permissions, not available in CI
        if std::env::var("CI").is_ok() {
            return;
        }

        let pinger = SystemPinger::new();
        let task = PingTask::new(HostEntry::new("localhost", "127.0.0.1"), 1);
        let result = pinger.run(task).await;

        assert!(!result.output.is_empty());
    }
}
