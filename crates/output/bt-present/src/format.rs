//! Human-readable sizes and timestamps.

use std::fmt::Write;

use bt_error::{BtError, Result};
use chrono::{DateTime, Utc};

/// Default timestamp layout: day.month.year, hours:minutes:seconds.
pub const DEFAULT_TIME_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const GB: u64 = 1024 * MB;

/// Format a byte count for display.
///
/// Zero is shown as an empty string. Below 1 KiB the exact count is shown,
/// kilobytes are whole numbers, megabytes and gigabytes carry two decimals.
/// Halves round away from zero.
pub fn format_size(size: u64) -> String {
    if size == 0 {
        String::new()
    } else if size < KB {
        format!("{size} B")
    } else if size < MB {
        format!("{:.0} KB", (size as f64 / KB as f64).round())
    } else if size < GB {
        format!("{:.2} MB", round2(size as f64 / MB as f64))
    } else {
        format!("{:.2} GB", round2(size as f64 / GB as f64))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a timestamp with a `chrono` strftime layout.
///
/// An invalid layout is a render error rather than a panic.
pub fn format_timestamp(timestamp: &DateTime<Utc>, layout: &str) -> Result<String> {
    let mut formatted = String::new();
    write!(formatted, "{}", timestamp.format(layout))
        .map_err(|_| BtError::Render(format!("Invalid timestamp format '{layout}'")))?;
    Ok(formatted)
}
