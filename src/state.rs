//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AuthService, SettingsService, VisitService};
use crate::infrastructure::persistence::{SqliteSettingsRepository, SqliteVisitRepository};

/// Handles shared by all requests. Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub visit_service: Arc<VisitService<SqliteVisitRepository>>,
    pub settings_service: Arc<SettingsService<SqliteSettingsRepository>>,
    pub auth_service: Arc<AuthService>,
    pub db: Arc<SqlitePool>,
}

impl AppState {
    /// Wires repositories and services on top of `pool`.
    pub fn new(pool: Arc<SqlitePool>, auth_service: AuthService) -> Self {
        let visit_repository = Arc::new(SqliteVisitRepository::new(pool.clone()));
        let settings_repository = Arc::new(SqliteSettingsRepository::new(pool.clone()));

        Self {
            visit_service: Arc::new(VisitService::new(visit_repository)),
            settings_service: Arc::new(SettingsService::new(settings_repository)),
            auth_service: Arc::new(auth_service),
            db: pool,
        }
    }
}
