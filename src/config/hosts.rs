//! Host registry: which hosts to ping and in which order to show them.

use crate::error::{Error, Result};
use crate::ping::types::HostEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The hosts to ping plus the order they appear in the summary table.
///
/// A registry obtained from [`HostRegistry::new`] or `Default` has been
/// validated: names are unique and the display order lists every host
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRegistry {
    hosts: Vec<HostEntry>,
    display_order: Vec<String>,
}

impl HostRegistry {
    /// Build and validate a registry.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the host list is empty, a name or address
    /// is blank, a name is repeated, or `display_order` is not exactly a
    /// permutation of the host names.
    pub fn new(hosts: Vec<HostEntry>, display_order: Vec<String>) -> Result<Self> {
        let registry = Self {
            hosts,
            display_order,
        };
        registry.validate()?;
        Ok(registry)
    }

    /// Build a registry shown in the same order the hosts are listed.
    ///
    /// # Errors
    ///
    /// Same as [`HostRegistry::new`].
    pub fn in_listed_order(hosts: Vec<HostEntry>) -> Result<Self> {
        let display_order = hosts.iter().map(|h| h.name.clone()).collect();
        Self::new(hosts, display_order)
    }

    /// Hosts in configuration order.
    #[must_use]
    pub fn hosts(&self) -> &[HostEntry] {
        &self.hosts
    }

    /// Host names in the order they are displayed.
    #[must_use]
    pub fn display_order(&self) -> &[String] {
        &self.display_order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.hosts.is_empty() {
            return Err(Error::config("no hosts configured"));
        }

        let mut names = HashSet::new();
        for host in &self.hosts {
            if host.name.trim().is_empty() {
                return Err(Error::config("host name must not be empty"));
            }
            if host.address.trim().is_empty() {
                return Err(Error::config(format!(
                    "host '{}' has an empty address",
                    host.name
                )));
            }
            if !names.insert(host.name.as_str()) {
                return Err(Error::config(format!("duplicate host name: {}", host.name)));
            }
        }

        let mut ordered = HashSet::new();
        for name in &self.display_order {
            if !names.contains(name.as_str()) {
                return Err(Error::config(format!(
                    "display order names unknown host: {name}"
                )));
            }
            if !ordered.insert(name.as_str()) {
                return Err(Error::config(format!(
                    "display order lists {name} more than once"
                )));
            }
        }

        if let Some(missing) = self
            .hosts
            .iter()
            .find(|h| !ordered.contains(h.name.as_str()))
        {
            return Err(Error::config(format!(
                "host missing from display order: {}",
                missing.name
            )));
        }

        Ok(())
    }
}

impl Default for HostRegistry {
    /// Modem, router and Google DNS, shown router first.
    fn default() -> Self {
        Self {
            hosts: vec![
                HostEntry::new("Modem", "10.0.0.1"),
                HostEntry::new("Router", "192.168.1.1"),
                HostEntry::new("Google DNS", "8.8.8.8"),
            ],
            display_order: vec!["Router".into(), "Modem".into(), "Google DNS".into()],
        }
    }
}

/// On-disk form of a host registry.
///
/// ```json
/// {
///   "hosts": [{ "name": "Router", "address": "192.168.1.1" }],
///   "display_order": ["Router"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostFile {
    pub hosts: Vec<HostEntry>,
    /// Defaults to the order of `hosts` when omitted
    #[serde(default)]
    pub display_order: Option<Vec<String>>,
}

impl TryFrom<HostFile> for HostRegistry {
    type Error = Error;

    fn try_from(file: HostFile) -> Result<Self> {
        match file.display_order {
            Some(order) => Self::new(file.hosts, order),
            None => Self::in_listed_order(file.hosts),
        }
    }
}
