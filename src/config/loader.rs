//! Host configuration loader.
//!
//! The host registry comes from, in order of preference:
//! 1. an explicit file given on the command line
//! 2. `$CONFIG_DIR/pingcheck/hosts.json`
//! 3. the compiled-in defaults (modem, router, Google DNS)

use crate::config::hosts::{HostFile, HostRegistry};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Host configuration loader.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a host registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// describes an invalid registry.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let registry = ConfigLoader::load_from_file("hosts.json")?;
    /// for host in registry.hosts() {
    ///     println!("{}: {}", host.name, host.address);
    /// }
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<HostRegistry> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let file: HostFile = serde_json::from_str(&content)?;
        HostRegistry::try_from(file)
    }

    /// Path of the per-user host file.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pingcheck")
            .join("hosts.json")
    }

    /// Resolve the host registry for this run.
    ///
    /// An explicit `file` must load successfully. Without one, the per-user
    /// host file is used if present, otherwise the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be loaded.
    pub fn load(file: Option<&Path>) -> Result<HostRegistry> {
        if let Some(path) = file {
            tracing::info!("loading hosts from {}", path.display());
            return Self::load_from_file(path);
        }

        let user_file = Self::default_path();
        if user_file.is_file() {
            tracing::info!("loading hosts from {}", user_file.display());
            return Self::load_from_file(user_file);
        }

        tracing::debug!("using built-in hosts");
        Ok(HostRegistry::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"{
                "hosts": [
                    { "name": "Router", "address": "192.168.1.1" },
                    { "name": "Cloudflare", "address": "1.1.1.1" }
                ],
                "display_order": ["Cloudflare", "Router"]
            }"#,
        );

        let registry = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.hosts()[1].address, "1.1.1.1");
        assert_eq!(registry.display_order(), ["Cloudflare", "Router"]);
    }

    #[test]
    fn test_load_explicit_file() {
        let file = write_config(r#"{ "hosts": [{ "name": "Local", "address": "127.0.0.1" }] }"#);
        let registry = ConfigLoader::load(Some(file.path())).unwrap();
        assert_eq!(registry.display_order(), ["Local"]);
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let file = write_config("{ not json");
        let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_rejects_duplicate_names() {
        let file = write_config(
            r#"{ "hosts": [
                { "name": "DNS", "address": "8.8.8.8" },
                { "name": "DNS", "address": "1.1.1.1" }
            ] }"#,
        );
        let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConfigLoader::load(Some(Path::new("/nonexistent/pingcheck/hosts.json")))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_default_path() {
        let path = ConfigLoader::default_path();
        assert!(path.ends_with("pingcheck/hosts.json"));
    }
}
