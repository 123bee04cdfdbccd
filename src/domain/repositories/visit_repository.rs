//! Repository trait for the visit log.

use crate::domain::entities::{CountryCount, NewVisit, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recording and aggregating visits.
///
/// All timestamps are milliseconds since the Unix epoch and all ranges are
/// inclusive on both ends.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteVisitRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_visit.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Appends a visit stamped with the current time and returns its id.
    ///
    /// The row is durably written before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn append(&self, new_visit: NewVisit) -> Result<i64, AppError>;

    /// Counts visits with `start <= timestamp <= end`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_in_range(&self, start: i64, end: i64) -> Result<i64, AppError>;

    /// Groups visits in `[start, end]` by country.
    ///
    /// Ordered by count descending, ties by country name ascending, truncated
    /// to `limit` entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn top_countries(
        &self,
        start: i64,
        end: i64,
        limit: i64,
    ) -> Result<Vec<CountryCount>, AppError>;

    /// Returns the most recent visits, newest first by id.
    ///
    /// At most `min(limit, MAX_RECENT_LIMIT)` rows are returned; a negative
    /// limit yields no rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn recent(&self, limit: i64) -> Result<Vec<Visit>, AppError>;
}
