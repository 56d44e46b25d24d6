//! Snapshot encode/decode shared by the stores.
//!
//! Every helper here is fail-open: decode problems become "nothing
//! persisted" and write problems are logged, so a broken medium can never
//! take a store down.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::adapter::{DurableStore, StorageKey};
use crate::error::StoreResult;

/// Reads and decodes the snapshot under `key`.
///
/// Returns `None` when the key is absent or the document does not decode
/// into `T`.
pub(crate) fn restore<T: DeserializeOwned>(adapter: &dyn DurableStore, key: StorageKey) -> Option<T> {
    let raw = adapter.load(key.as_str())?;

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key = %key, error = %e, "Malformed snapshot, starting empty");
            None
        }
    }
}

fn try_persist<T: Serialize + ?Sized>(
    adapter: &dyn DurableStore,
    key: StorageKey,
    value: &T,
) -> StoreResult<()> {
    let raw = serde_json::to_string(value)?;
    adapter.save(key.as_str(), &raw)
}

/// Writes the full snapshot for `key`. Failures are logged and dropped.
pub(crate) fn persist<T: Serialize + ?Sized>(adapter: &dyn DurableStore, key: StorageKey, value: &T) {
    match try_persist(adapter, key, value) {
        Ok(()) => debug!(key = %key, "Snapshot persisted"),
        Err(e) => warn!(key = %key, error = %e, "Failed to persist snapshot"),
    }
}

/// Removes the snapshot for `key`. Failures are logged and dropped.
pub(crate) fn erase(adapter: &dyn DurableStore, key: StorageKey) {
    if let Err(e) = adapter.clear(key.as_str()) {
        warn!(key = %key, error = %e, "Failed to clear snapshot");
    }
}
