//! # Durable Store Adapter
//!
//! The minimal key-value contract every persistent store writes through,
//! plus the in-memory implementation.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load(key)        → Some(raw) | None   (absent OR unreadable)           │
//! │  save(key, raw)   → Ok | Err           (replaces the whole value)       │
//! │  clear(key)       → Ok | Err           (absent key is Ok)               │
//! │                                                                         │
//! │  Values are opaque strings. Encoding is the caller's job.              │
//! │  Each key has exactly one owning store.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::lock;

// =============================================================================
// Trait
// =============================================================================

/// Key-value persistence medium that outlives the process.
///
/// Implementations must be safe to share between threads. Reads never
/// fail: anything that cannot be read is reported as absent.
pub trait DurableStore: Send + Sync + fmt::Debug {
    /// Returns the raw value for `key`, or `None` if absent or unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Replaces the value for `key`.
    fn save(&self, key: &str, raw: &str) -> StoreResult<()>;

    /// Removes `key`. Removing an absent key succeeds.
    fn clear(&self, key: &str) -> StoreResult<()>;
}

/// The three storage slots, one per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Session,
    Cart,
    Favorites,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [StorageKey::Session, StorageKey::Cart, StorageKey::Favorites];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Session => "session",
            StorageKey::Cart => "cart",
            StorageKey::Favorites => "favorites",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejects keys that cannot name a storage slot.
///
/// Keys become file names in [`crate::FileStore`], so path separators and
/// leading dots are refused as well.
pub(crate) fn validate_key(key: &str) -> StoreResult<()> {
    let valid = !key.trim().is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if !valid {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

// =============================================================================
// In-Memory Adapter
// =============================================================================

/// Process-local adapter.
///
/// Used when no durable medium is available and in tests. Write failures
/// can be injected to simulate a full or disabled medium.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Optional failure-injection mode for tests.
    pub fn with_fail_writes(self, fail_writes: bool) -> Self {
        self.set_fail_writes(fail_writes);
        self
    }

    /// Toggles failure injection on a shared instance.
    pub fn set_fail_writes(&self, fail_writes: bool) {
        self.fail_writes.store(fail_writes, Ordering::SeqCst);
    }

    /// Number of successful `save` and `clear` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "write failure injected".to_string(),
            ));
        }
        Ok(())
    }
}

impl DurableStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    fn save(&self, key: &str, raw: &str) -> StoreResult<()> {
        validate_key(key)?;
        self.check_writable()?;

        lock(&self.entries).insert(key.to_string(), raw.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn clear(&self, key: &str) -> StoreResult<()> {
        validate_key(key)?;
        self.check_writable()?;

        lock(&self.entries).remove(key);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
