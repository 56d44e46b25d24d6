//! # Session State
//!
//! Two-state authentication machine.
//!
//! ```text
//!                  login (shape ok)
//!   ┌───────────┐ ─────────────────► ┌──────────────────────────────┐
//!   │ Anonymous │                    │ Authenticated(SessionRecord) │
//!   └───────────┘ ◄───────────────── └──────────────────────────────┘
//!        ▲             logout               │
//!        └── login (shape bad): unchanged   └── login again: record replaced
//! ```
//!
//! The login gate is the placeholder policy from [`crate::validation`]. It
//! never verifies a password.

use crate::types::SessionRecord;
use crate::validation::{validate_credentials, ValidationResult};

/// Authentication state of the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(SessionRecord),
}

impl SessionState {
    /// Restores a state from a persisted record without re-checking its
    /// shape. Persisted sessions are trusted.
    pub fn restore(record: Option<SessionRecord>) -> Self {
        match record {
            Some(record) => SessionState::Authenticated(record),
            None => SessionState::Anonymous,
        }
    }

    /// Attempts a login. On failure the state is left untouched.
    ///
    /// A second successful login replaces the current record.
    ///
    /// ## Returns
    /// `Err(ValidationError)` naming the first failing field
    pub fn login(&mut self, username: &str, password: &str) -> ValidationResult<()> {
        validate_credentials(username, password)?;
        *self = SessionState::Authenticated(SessionRecord::new(username));
        Ok(())
    }

    /// Returns to `Anonymous`. Idempotent.
    pub fn logout(&mut self) {
        *self = SessionState::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn current_user(&self) -> Option<&SessionRecord> {
        match self {
            SessionState::Authenticated(record) => Some(record),
            SessionState::Anonymous => None,
        }
    }
}
