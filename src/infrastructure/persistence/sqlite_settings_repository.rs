//! SQLite implementation of the settings repository.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::StoredSettings;
use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct SettingsRow {
    value_json: String,
    updated_at: i64,
}

/// SQLite repository for keyed JSON settings documents.
///
/// Documents are stored serialized in `settings.value_json`.
pub struct SqliteSettingsRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSettingsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for SqliteSettingsRepository {
    async fn get(&self, key: &str) -> Result<Option<StoredSettings>, AppError> {
        let row: Option<SettingsRow> = sqlx::query_as(
            r#"
            SELECT value_json, updated_at
            FROM settings
            WHERE key = ?1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(StoredSettings {
            value: serde_json::from_str(&row.value_json)?,
            updated_at: row.updated_at,
        }))
    }

    async fn upsert(&self, key: &str, value: &Value, updated_at: i64) -> Result<(), AppError> {
        let value_json = value.to_string();

        sqlx::query(
            r#"
            INSERT INTO settings (key, value_json, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE
            SET value_json = excluded.value_json,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value_json)
        .bind(updated_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
