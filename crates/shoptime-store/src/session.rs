//! # Session Store
//!
//! Durable authentication state.
//!
//! ## Persistence
//! ```text
//! login ok   ──► session.json = { username, credentialMarker, signedInAt }
//! logout     ──► session.json removed
//! open       ──► session.json present → Authenticated, else Anonymous
//! ```

use std::sync::{Arc, Mutex};

use shoptime_core::{SessionRecord, SessionState};
use tracing::{debug, info};

use crate::adapter::{DurableStore, StorageKey};
use crate::{lock, snapshot};

/// Current user, restored on open and written through on every change.
#[derive(Debug)]
pub struct SessionStore {
    state: Mutex<SessionState>,
    adapter: Arc<dyn DurableStore>,
}

impl SessionStore {
    /// Restores the persisted session before returning.
    pub fn open(adapter: Arc<dyn DurableStore>) -> Self {
        let record: Option<SessionRecord> = snapshot::restore(adapter.as_ref(), StorageKey::Session);
        if let Some(record) = &record {
            info!(username = %record.username, "Restored session");
        }

        SessionStore {
            state: Mutex::new(SessionState::restore(record)),
            adapter,
        }
    }

    /// Signs in when the credentials pass the shape check.
    ///
    /// Returns `false` and leaves the state untouched otherwise. A second
    /// successful login replaces the current user.
    pub fn login(&self, username: &str, password: &str) -> bool {
        let mut state = lock(&self.state);

        if let Err(e) = state.login(username, password) {
            debug!(reason = %e, "Login rejected");
            return false;
        }

        if let Some(record) = state.current_user() {
            snapshot::persist(self.adapter.as_ref(), StorageKey::Session, record);
            info!(username = %record.username, "Signed in");
        }
        true
    }

    /// Signs out. Safe to call while anonymous.
    pub fn logout(&self) {
        let mut state = lock(&self.state);
        let was_authenticated = state.is_authenticated();
        state.logout();
        snapshot::erase(self.adapter.as_ref(), StorageKey::Session);

        if was_authenticated {
            info!("Signed out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        lock(&self.state).is_authenticated()
    }

    pub fn current_user(&self) -> Option<SessionRecord> {
        lock(&self.state).current_user().cloned()
    }
}
