//! Utility helpers shared across the WASM frontend.

use chrono::{Local, TimeZone};

/// Return the current timestamp in **milliseconds** since UNIX epoch.
pub fn now_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// Render a millisecond timestamp the way history rows show it, e.g.
/// `"3/14/2026, 9:05:07 AM"` in the browser's local time zone.
pub fn format_local_timestamp(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => String::new(),
    }
}

/// Shorten `text` to at most `max_chars` characters, appending an ellipsis
/// when something was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push('…');
    out
}
