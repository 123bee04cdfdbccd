//! Repository trait for keyed settings documents.

use crate::domain::entities::StoredSettings;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Repository interface for JSON settings documents stored by key.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteSettingsRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads the document stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(StoredSettings))` if a document exists
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or if the stored value
    /// is not valid JSON.
    async fn get(&self, key: &str) -> Result<Option<StoredSettings>, AppError>;

    /// Inserts or fully replaces the document under `key`.
    ///
    /// Last writer wins; there is no concurrency check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, key: &str, value: &Value, updated_at: i64) -> Result<(), AppError>;
}
