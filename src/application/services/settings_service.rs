//! Link settings service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::domain::entities::{LINKS_KEY, default_links, merge_links};
use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;

/// Service for reading and writing the `links` settings document.
///
/// Holds the default document it backfills from; it is built once at
/// construction and never mutated.
pub struct SettingsService<R: SettingsRepository> {
    repository: Arc<R>,
    defaults: Value,
}

impl<R: SettingsRepository> SettingsService<R> {
    /// Creates a settings service using the built-in default links.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_defaults(repository, default_links())
    }

    /// Creates a settings service with an explicit default document.
    pub fn with_defaults(repository: Arc<R>, defaults: Value) -> Self {
        Self {
            repository,
            defaults,
        }
    }

    /// The default links document.
    pub fn defaults(&self) -> &Value {
        &self.defaults
    }

    /// Writes the default document if nothing is stored yet.
    ///
    /// Returns `true` when the defaults were written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn seed_defaults(&self) -> Result<bool, AppError> {
        if self.repository.get(LINKS_KEY).await?.is_some() {
            return Ok(false);
        }

        self.repository
            .upsert(LINKS_KEY, &self.defaults, Utc::now().timestamp_millis())
            .await?;

        tracing::info!("Seeded default links document");
        Ok(true)
    }

    /// Returns the stored links document, or the defaults if none is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_links(&self) -> Result<Value, AppError> {
        Ok(self
            .repository
            .get(LINKS_KEY)
            .await?
            .map(|stored| stored.value)
            .unwrap_or_else(|| self.defaults.clone()))
    }

    /// Merges `payload` onto the defaults and stores the result, replacing the
    /// previous document entirely.
    ///
    /// Malformed fields degrade to their defaults instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn set_links(&self, payload: Value) -> Result<Value, AppError> {
        let merged = merge_links(payload, &self.defaults);

        self.repository
            .upsert(LINKS_KEY, &merged, Utc::now().timestamp_millis())
            .await?;

        Ok(merged)
    }
}
