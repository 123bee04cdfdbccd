//! Visit recording and statistics service.

use std::sync::Arc;

use chrono::{Local, TimeZone, Utc};

use crate::domain::entities::{NewVisit, StatsReport, Visit, WindowStats, clamp_recent_limit};
use crate::domain::repositories::VisitRepository;
use crate::domain::windows::{Window, WindowKind, windows_at};
use crate::error::AppError;

/// Number of countries reported per window.
pub const TOP_COUNTRIES_LIMIT: i64 = 10;

/// Service for recording visits and building the windowed statistics report.
pub struct VisitService<R: VisitRepository> {
    repository: Arc<R>,
}

impl<R: VisitRepository> VisitService<R> {
    /// Creates a new visit service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Appends a visit and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record(&self, new_visit: NewVisit) -> Result<i64, AppError> {
        self.repository.append(new_visit).await
    }

    /// Builds the statistics report for the current moment in the server's
    /// local time zone.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn report(&self) -> Result<StatsReport, AppError> {
        self.report_at(Utc::now().timestamp_millis(), &Local).await
    }

    /// Builds the statistics report for the windows ending at `now`, with day
    /// boundaries taken from `tz`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn report_at<Tz: TimeZone>(&self, now: i64, tz: &Tz) -> Result<StatsReport, AppError> {
        let mut report = StatsReport::default();

        for window in windows_at(now, tz) {
            let stats = self.window_stats(&window).await?;
            match window.kind {
                WindowKind::Day => report.day = stats,
                WindowKind::Week => report.week = stats,
                WindowKind::Month => report.month = stats,
                WindowKind::All => report.all = stats,
            }
        }

        Ok(report)
    }

    async fn window_stats(&self, window: &Window) -> Result<WindowStats, AppError> {
        let visits = self
            .repository
            .count_in_range(window.start, window.end)
            .await?;
        let countries = self
            .repository
            .top_countries(window.start, window.end, TOP_COUNTRIES_LIMIT)
            .await?;

        Ok(WindowStats { visits, countries })
    }

    /// Lists the most recent visits, newest first.
    ///
    /// A missing or negative `limit` falls back to the default of 100; larger
    /// values are capped at 500.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn recent(&self, limit: Option<i64>) -> Result<Vec<Visit>, AppError> {
        self.repository.recent(clamp_recent_limit(limit)).await
    }
}
