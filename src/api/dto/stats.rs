//! DTOs for the windowed statistics endpoint.

use serde::Serialize;

use crate::domain::entities::{CountryCount, StatsReport, WindowStats};

/// Statistics for the day, week, month and all-time windows.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub day: WindowStatsDto,
    pub week: WindowStatsDto,
    pub month: WindowStatsDto,
    pub all: WindowStatsDto,
}

/// Visit total and top countries of a single window.
#[derive(Debug, Serialize)]
pub struct WindowStatsDto {
    pub visits: i64,
    pub countries: Vec<CountryCountDto>,
}

/// Visits from one country; `c` is the count.
#[derive(Debug, Serialize)]
pub struct CountryCountDto {
    pub country: String,
    pub c: i64,
}

impl From<CountryCount> for CountryCountDto {
    fn from(value: CountryCount) -> Self {
        Self {
            country: value.country,
            c: value.count,
        }
    }
}

impl From<WindowStats> for WindowStatsDto {
    fn from(value: WindowStats) -> Self {
        Self {
            visits: value.visits,
            countries: value.countries.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<StatsReport> for StatsResponse {
    fn from(report: StatsReport) -> Self {
        Self {
            day: report.day.into(),
            week: report.week.into(),
            month: report.month.into(),
            all: report.all.into(),
        }
    }
}
