//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file is honored through `dotenvy` (loaded in `main.rs`).
//!
//! ```bash
//! export DATABASE_URL="sqlite://data.sqlite"
//! export PORT="3000"
//! export ADMIN_USER="admin"
//! export ADMIN_PASS="a-long-random-password"
//! ```
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://data.sqlite`, created if missing)
//! - `PORT` - Listening port (default: `3000`)
//! - `LISTEN` - Full bind address, overrides `PORT` (default: `0.0.0.0:$PORT`)
//! - `ADMIN_USER` / `ADMIN_PASS` - Admin Basic credentials (placeholders by default)
//! - `PUBLIC_DIR` - Static files and `admin.html` (default: `public`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)

use anyhow::Result;
use std::env;

/// Admin username used when `ADMIN_USER` is unset.
pub const DEFAULT_ADMIN_USER: &str = "admin";

/// Admin password used when `ADMIN_PASS` is unset. Must be overridden in production.
pub const DEFAULT_ADMIN_PASS: &str = "change_me_strong_pass";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub admin_user: String,
    pub admin_pass: String,
    pub public_dir: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this only fails on values that cannot be parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `DB_MAX_CONNECTIONS` is not a number.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data.sqlite".to_string());

        let listen_addr = Self::load_listen_addr()?;

        let admin_user = env::var("ADMIN_USER").unwrap_or_else(|_| DEFAULT_ADMIN_USER.to_string());
        let admin_pass = env::var("ADMIN_PASS").unwrap_or_else(|_| DEFAULT_ADMIN_PASS.to_string());

        let public_dir = env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("DB_MAX_CONNECTIONS must be a number, got '{v}'"))?,
            Err(_) => 5,
        };

        Ok(Self {
            database_url,
            listen_addr,
            admin_user,
            admin_pass,
            public_dir,
            log_level,
            log_format,
            db_max_connections,
        })
    }

    /// Resolves the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT`, with `PORT` defaulting to 3000
    fn load_listen_addr() -> Result<String> {
        if let Ok(listen) = env::var("LISTEN") {
            return Ok(listen);
        }

        let port: u16 = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a number, got '{v}'"))?,
            Err(_) => 3000,
        };

        Ok(format!("0.0.0.0:{port}"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - admin credentials are empty
    /// - the pool size is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.admin_user.is_empty() {
            anyhow::bail!("ADMIN_USER must not be empty");
        }
        if self.admin_pass.is_empty() {
            anyhow::bail!("ADMIN_PASS must not be empty");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Returns whether the placeholder admin credentials are still in use.
    pub fn uses_default_credentials(&self) -> bool {
        self.admin_pass == DEFAULT_ADMIN_PASS
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Public dir: {}", self.public_dir);
        tracing::info!("  Admin user: {}", self.admin_user);
        tracing::info!("  Admin password: {}", mask_secret(&self.admin_pass));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.uses_default_credentials() {
            tracing::warn!("ADMIN_PASS is the built-in placeholder; set a real password");
        }
    }
}

/// Masks a secret for logging, keeping only its length visible.
fn mask_secret(secret: &str) -> String {
    format!("*** ({} chars)", secret.chars().count())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config() -> Config {
        Config {
            database_url: "sqlite://data.sqlite".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            admin_user: "admin".to_string(),
            admin_pass: "secret".to_string(),
            public_dir: "public".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("hunter2"), "*** (7 chars)");
        assert!(!mask_secret("hunter2").contains("hunter2"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:8080".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());
        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.admin_pass = String::new();
        assert!(config.validate().is_err());
        config.admin_pass = "secret".to_string();

        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_uses_default_credentials() {
        let mut config = config();
        assert!(!config.uses_default_credentials());

        config.admin_pass = DEFAULT_ADMIN_PASS.to_string();
        assert!(config.uses_default_credentials());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for key in [
                "DATABASE_URL",
                "LISTEN",
                "PORT",
                "ADMIN_USER",
                "ADMIN_PASS",
                "PUBLIC_DIR",
                "LOG_FORMAT",
                "DB_MAX_CONNECTIONS",
            ] {
                env::remove_var(key);
            }
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite://data.sqlite");
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.admin_user, DEFAULT_ADMIN_USER);
        assert_eq!(config.admin_pass, DEFAULT_ADMIN_PASS);
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.db_max_connections, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_port_builds_listen_addr() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("LISTEN");
            env::set_var("PORT", "8081");
        }

        assert_eq!(Config::load_listen_addr().unwrap(), "0.0.0.0:8081");

        unsafe {
            env::set_var("PORT", "eighty");
        }
        assert!(Config::load_listen_addr().is_err());

        // Cleanup
        unsafe {
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_listen_takes_priority_over_port() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("PORT", "8081");
        }

        assert_eq!(Config::load_listen_addr().unwrap(), "127.0.0.1:9000");

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_credentials_from_env() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("ADMIN_USER", "boss");
            env::set_var("ADMIN_PASS", "p4ss");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.admin_user, "boss");
        assert_eq!(config.admin_pass, "p4ss");
        assert!(!config.uses_default_credentials());

        // Cleanup
        unsafe {
            env::remove_var("ADMIN_USER");
            env::remove_var("ADMIN_PASS");
        }
    }
}
