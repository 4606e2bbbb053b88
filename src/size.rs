//! Human-readable byte counts for stat descriptors.
//!
//! Sizes use binary units and keep the raw byte count alongside the scaled
//! value, e.g. `1.5 KiB (1536 B)`.

const UNITS: [(u64, &str); 4] = [
    (1 << 40, "TiB"),
    (1 << 30, "GiB"),
    (1 << 20, "MiB"),
    (1 << 10, "KiB"),
];

/// Formats a byte count with the largest binary unit the count reaches.
///
/// The scaled value is rounded to two decimal places and printed with at
/// least one fractional digit. Counts below 1 KiB are printed as plain bytes.
///
/// # Examples
///
/// ```rust
/// use treeclone::size::format_size;
///
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1536), "1.5 KiB (1536 B)");
/// ```
pub fn format_size(size: u64) -> String {
    for (threshold, unit) in UNITS {
        if size >= threshold {
            let value = size as f64 / threshold as f64;
            return format!("{} {} ({} B)", trim_quotient(value), unit, size);
        }
    }
    format!("{} B", size)
}

/// Rounds to two decimals, then drops trailing zeros down to one digit.
fn trim_quotient(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}
