//! Text utilities for TUI rendering.

use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthChar;

/// Truncate a string to fit within a given width, adding ellipsis if needed.
pub fn truncate(text: &str, max_width: usize) -> String {
    if max_width < 3 {
        return text.chars().take(max_width).collect();
    }

    let total: usize = text
        .chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(1))
        .sum();
    if total <= max_width {
        return text.to_string();
    }

    let mut width = 0;
    let mut result = String::new();

    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width - 3 {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str("...");
    result
}

/// Format a duration in human-readable form.
pub fn format_duration(seconds: i64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    }
}

/// Format a timestamp for overlay display.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello world", 8), "Hello...");
        assert_eq!(truncate("Hi", 10), "Hi");
        assert_eq!(truncate("exactly8", 8), "exactly8");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(30), "30s");
        assert_eq!(format_duration(90), "1m 30s");
        assert_eq!(format_duration(3700), "1h 1m");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-09 07:05:00");
    }
}
