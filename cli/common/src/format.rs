//! Number formatting for run summaries.

const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Format a byte total for the run summary.
///
/// Unlike the per-file sizes in rendered documents, zero is shown and two
/// decimals are always used above 1 KiB.
///
/// ```
/// use bt_cli_common::format_bytes;
///
/// assert_eq!(format_bytes(0), "0 bytes");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// assert_eq!(format_bytes(1_099_511_627_776), "1.00 TB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} bytes");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2} {}", UNITS[unit])
}

/// Format a count with thousands separators.
///
/// ```
/// use bt_cli_common::format_number;
///
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Format milliseconds as seconds with two decimals.
pub fn format_duration_ms(millis: i64) -> String {
    format!("{:.2}s", millis as f64 / 1000.0)
}
