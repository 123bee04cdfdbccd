//! Millisecond timestamp helpers.

use chrono::{DateTime, Local, TimeZone};

/// Formats a millisecond timestamp as local `YYYY-MM-DD HH:MM:SS`.
///
/// Out-of-range values are rendered as the raw number.
pub fn format_millis(ts: i64) -> String {
    format_millis_in(ts, &Local)
}

/// Formats a millisecond timestamp in `tz`.
pub fn format_millis_in<Tz: TimeZone>(ts: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.with_timezone(tz).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_millis_in_utc() {
        assert_eq!(format_millis_in(1_773_582_330_250, &Utc), "2026-03-15 13:45:30");
        assert_eq!(format_millis_in(0, &Utc), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_format_millis_out_of_range() {
        assert_eq!(format_millis_in(i64::MAX, &Utc), i64::MAX.to_string());
    }
}
