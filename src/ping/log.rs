//! Per-host raw output logs.

use crate::error::Result;
use crate::ping::types::RawPingResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory for raw ping logs, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "ping_logs";

/// Writes each host's raw output to its own file in a log directory.
///
/// Files are overwritten on every run. Host names are unique, so no two
/// hosts share a file.
#[derive(Debug, Clone)]
pub struct LogWriter {
    dir: PathBuf,
}

impl LogWriter {
    /// Create the log directory if needed and return a writer for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The log directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one host's output, preceded by a header naming the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, result: &RawPingResult) -> Result<PathBuf> {
        let path = self.dir.join(result.host.log_file_name());
        let contents = format!(
            "--- Ping results for {} ({}) ---\n\n{}",
            result.host.name, result.host.address, result.output
        );
        fs::write(&path, contents)?;
        tracing::debug!("wrote {}", path.display());
        Ok(path)
    }
}
