//! SQLite implementation of the visit repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{CountryCount, MAX_RECENT_LIMIT, NewVisit, UNKNOWN_COUNTRY, Visit};
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct VisitRow {
    id: i64,
    ts: i64,
    ip: Option<String>,
    ua: Option<String>,
    country: Option<String>,
    path: Option<String>,
    referrer: Option<String>,
}

impl From<VisitRow> for Visit {
    fn from(r: VisitRow) -> Self {
        Self {
            id: r.id,
            timestamp: r.ts,
            ip: r.ip.unwrap_or_default(),
            user_agent: r.ua.unwrap_or_default(),
            country: r.country.unwrap_or_else(|| UNKNOWN_COUNTRY.to_string()),
            path: r.path.unwrap_or_else(|| "/".to_string()),
            referrer: r.referrer.unwrap_or_default(),
        }
    }
}

#[derive(FromRow)]
struct CountryRow {
    country: Option<String>,
    c: i64,
}

/// SQLite repository for the append-only visit log.
///
/// Range queries hit the `idx_visits_ts` index; recent listings walk the
/// primary key backwards.
pub struct SqliteVisitRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for SqliteVisitRepository {
    async fn append(&self, new_visit: NewVisit) -> Result<i64, AppError> {
        let ts = Utc::now().timestamp_millis();

        let result = sqlx::query(
            r#"
            INSERT INTO visits (ts, ip, ua, country, path, ref)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(ts)
        .bind(new_visit.ip)
        .bind(new_visit.user_agent)
        .bind(new_visit.country)
        .bind(new_visit.path)
        .bind(new_visit.referrer)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn count_in_range(&self, start: i64, end: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM visits
            WHERE ts BETWEEN ?1 AND ?2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn top_countries(
        &self,
        start: i64,
        end: i64,
        limit: i64,
    ) -> Result<Vec<CountryCount>, AppError> {
        let rows: Vec<CountryRow> = sqlx::query_as(
            r#"
            SELECT country, COUNT(*) AS c
            FROM visits
            WHERE ts BETWEEN ?1 AND ?2
            GROUP BY country
            ORDER BY c DESC, country ASC
            LIMIT ?3
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(limit.max(0))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                CountryCount::new(
                    r.country.unwrap_or_else(|| UNKNOWN_COUNTRY.to_string()),
                    r.c,
                )
            })
            .collect())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<Visit>, AppError> {
        let limit = limit.clamp(0, MAX_RECENT_LIMIT);

        let rows: Vec<VisitRow> = sqlx::query_as(
            r#"
            SELECT id, ts, ip, ua, country, path, ref AS referrer
            FROM visits
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }
}
