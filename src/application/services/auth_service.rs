//! Authentication service for the admin area.

use crate::error::AppError;
use serde_json::json;

/// Service checking HTTP Basic credentials against the configured admin account.
///
/// Stateless: every request is authenticated on its own, there are no sessions,
/// tokens or lockouts.
pub struct AuthService {
    username: String,
    password: String,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Authenticates a username and optional password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if either value does not match.
    pub fn authenticate(&self, username: &str, password: Option<&str>) -> Result<(), AppError> {
        let valid = username == self.username && password == Some(self.password.as_str());

        if !valid {
            tracing::debug!(username, "Rejected admin credentials");
            return Err(AppError::unauthorized(
                "Auth required",
                json!({"reason": "Invalid credentials"}),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new("admin", "s3cret")
    }

    #[test]
    fn test_authenticate_success() {
        assert!(service().authenticate("admin", Some("s3cret")).is_ok());
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let result = service().authenticate("admin", Some("nope"));
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_authenticate_wrong_username() {
        assert!(service().authenticate("root", Some("s3cret")).is_err());
    }

    #[test]
    fn test_authenticate_missing_password() {
        assert!(service().authenticate("admin", None).is_err());
    }

    #[test]
    fn test_authenticate_empty_password_only_matches_empty() {
        let svc = AuthService::new("admin", "");
        assert!(svc.authenticate("admin", Some("")).is_ok());
        assert!(svc.authenticate("admin", None).is_err());
    }
}
