//! Configuration module.
//!
//! This module provides the host registry and loads it from a file or the
//! built-in defaults.

pub mod hosts;
pub mod loader;

pub use hosts::{HostFile, HostRegistry};
pub use loader::ConfigLoader;
