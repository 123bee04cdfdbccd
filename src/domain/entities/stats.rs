//! Aggregated visit statistics.

/// Number of visits attributed to one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCount {
    pub country: String,
    pub count: i64,
}

impl CountryCount {
    pub fn new(country: impl Into<String>, count: i64) -> Self {
        Self {
            country: country.into(),
            count,
        }
    }
}

/// Totals for a single time window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowStats {
    pub visits: i64,
    pub countries: Vec<CountryCount>,
}

/// Statistics for every fixed window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsReport {
    pub day: WindowStats,
    pub week: WindowStats,
    pub month: WindowStats,
    pub all: WindowStats,
}
