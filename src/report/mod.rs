//! Report module.
//!
//! This module turns collected rows into what the user sees:
//! - Severity classification of packet loss and timeouts
//! - The summary table, sorted by display order
//! - The start banner and closing note

pub mod console;
pub mod severity;
pub mod table;

pub use console::{closing_note, start_banner};
pub use severity::Severity;
pub use table::{render, sort_rows};
