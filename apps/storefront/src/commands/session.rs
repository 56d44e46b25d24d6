//! # Session Commands
//!
//! ## Login Checks
//! ```text
//! login(username, password)
//!   │
//!   ├─ 1. both present after trimming?      no ─► "username and password are required"
//!   ├─ 2. username ≥ 3, password ≥ 6 chars? no ─► "username must be at least 3 characters"
//!   └─ 3. SessionStore::login                no ─► "Invalid login credentials"
//! ```
//!
//! This is a demo login: there is no account database and no password is
//! ever verified or stored.

use serde::Serialize;
use shoptime_core::validation::validate_credentials;
use shoptime_store::SessionStore;
use tracing::debug;

use crate::error::ApiError;

/// The signed-in user as shown to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub username: String,
    pub signed_in_at: String,
}

/// Signs in.
///
/// Length checks run on the input as typed; only the "required" check
/// ignores surrounding whitespace.
pub fn login(session: &SessionStore, username: &str, password: &str) -> Result<UserResponse, ApiError> {
    debug!(username = %username, "login command");

    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(ApiError::validation("username and password are required"));
    }

    validate_credentials(username, password)?;

    if !session.login(username, password) {
        return Err(ApiError::validation("Invalid login credentials"));
    }

    current_user(session).ok_or_else(|| ApiError::internal("Session was not recorded"))
}

/// Signs out. Safe to call while signed out.
pub fn logout(session: &SessionStore) {
    debug!("logout command");
    session.logout();
}

pub fn current_user(session: &SessionStore) -> Option<UserResponse> {
    session.current_user().map(|record| UserResponse {
        username: record.username,
        signed_in_at: record.signed_in_at.to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shoptime_store::MemoryStore;
    use std::sync::Arc;

    fn session() -> SessionStore {
        SessionStore::open(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_login_messages() {
        let session = session();

        let err = login(&session, "   ", "password1").unwrap_err();
        assert_eq!(err.message, "username and password are required");

        let err = login(&session, "ab", "whatever123").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "username must be at least 3 characters");

        let err = login(&session, "abc", "short").unwrap_err();
        assert_eq!(err.message, "password must be at least 6 characters");

        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_logout() {
        let session = session();

        let user = login(&session, "abc", "longenough").unwrap();
        assert_eq!(user.username, "abc");
        assert_eq!(current_user(&session), Some(user));

        logout(&session);
        assert_eq!(current_user(&session), None);
        logout(&session);
    }
}
