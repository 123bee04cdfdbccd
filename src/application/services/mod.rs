//! Business logic services for the application layer.

pub mod auth_service;
pub mod settings_service;
pub mod visit_service;

pub use auth_service::AuthService;
pub use settings_service::SettingsService;
pub use visit_service::VisitService;
