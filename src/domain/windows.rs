//! Fixed reporting windows (day, week, month, all time).
//!
//! Everything here is pure: callers pass "now" and the time zone whose calendar
//! defines midnight. The server uses [`chrono::Local`].

use chrono::{Duration, LocalResult, NaiveTime, TimeZone};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Named reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Day,
    Week,
    Month,
    All,
}

/// Inclusive millisecond range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub kind: WindowKind,
    pub start: i64,
    pub end: i64,
}

impl Window {
    pub fn contains(&self, ts: i64) -> bool {
        self.start <= ts && ts <= self.end
    }
}

/// Truncates `ts` (ms since epoch) to midnight of the same calendar day in `tz`.
///
/// When midnight does not exist on that day (a DST gap), the first representable
/// instant after it is used. Timestamps outside chrono's range are returned unchanged.
pub fn start_of_day<Tz: TimeZone>(ts: i64, tz: &Tz) -> i64 {
    let LocalResult::Single(local) = tz.timestamp_millis_opt(ts) else {
        return ts;
    };

    let mut midnight = local.date_naive().and_time(NaiveTime::MIN);
    // DST gaps are at most a couple of hours; step forward until the wall time exists.
    for _ in 0..=4 * 3 {
        if let Some(resolved) = tz.from_local_datetime(&midnight).earliest() {
            return resolved.timestamp_millis();
        }
        midnight += Duration::minutes(15);
    }

    ts
}

/// Computes the four reporting windows ending at `now`.
///
/// - day: `[start_of_day(now), now]`
/// - week: `[start_of_day(now) - 6 days, now]`
/// - month: `[start_of_day(now) - 29 days, now]`
/// - all: `[0, now]`
pub fn windows_at<Tz: TimeZone>(now: i64, tz: &Tz) -> [Window; 4] {
    let day_start = start_of_day(now, tz);

    [
        Window {
            kind: WindowKind::Day,
            start: day_start,
            end: now,
        },
        Window {
            kind: WindowKind::Week,
            start: day_start - 6 * DAY_MS,
            end: now,
        },
        Window {
            kind: WindowKind::Month,
            start: day_start - 29 * DAY_MS,
            end: now,
        },
        Window {
            kind: WindowKind::All,
            start: 0,
            end: now,
        },
    ]
}
