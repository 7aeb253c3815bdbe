//! Shared utilities for bucket-tree CLI binaries.
//!
//! Argument types, logging setup, exit codes and number formatting used by
//! `bt-browse`.

pub mod args;
pub mod exit;
pub mod format;
pub mod logging;

pub use args::{LogLevel, parse_positive_usize};
pub use exit::exit_code;
pub use format::{format_bytes, format_duration_ms, format_number};
pub use logging::init_logging;
