//! # shoptime-store: Persistent State for ShoppingTime
//!
//! Stateful stores that survive restarts. Each store owns one storage key,
//! restores from it when opened and writes its whole snapshot back after
//! every change.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         shoptime-store                                  │
//! │                                                                         │
//! │   ┌──────────────┐   ┌────────────────┐   ┌─────────────┐              │
//! │   │ SessionStore │   │ FavoritesStore │   │  CartStore  │              │
//! │   │  "session"   │   │  "favorites"   │   │   "cart"    │              │
//! │   └──────┬───────┘   └───────┬────────┘   └──────┬──────┘              │
//! │          │   Mutex<pure state from shoptime-core> │                     │
//! │          └───────────────────┼────────────────────┘                     │
//! │                              ▼                                          │
//! │                 Arc<dyn DurableStore>                                   │
//! │                   ├── FileStore   (<dir>/<key>.json)                    │
//! │                   └── MemoryStore (process-local, tests)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! Storage is best effort. A missing or malformed snapshot opens as the
//! empty state; a failed write is logged and the in-memory state stays
//! authoritative for the rest of the process.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use shoptime_core::Catalog;
//! use shoptime_store::{CartStore, MemoryStore};
//!
//! let adapter = Arc::new(MemoryStore::new());
//! let cart = CartStore::open(adapter.clone());
//! cart.add_item(Catalog::builtin().get(1).unwrap());
//!
//! // A second store over the same medium sees the write
//! let reopened = CartStore::open(adapter);
//! assert_eq!(reopened.total_item_count(), 1);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod adapter;
pub mod cart;
pub mod error;
pub mod favorites;
pub mod file;
pub mod session;
mod snapshot;

pub use adapter::{DurableStore, MemoryStore, StorageKey};
pub use cart::CartStore;
pub use error::{StoreError, StoreResult};
pub use favorites::FavoritesStore;
pub use file::FileStore;
pub use session::SessionStore;

/// Locks a mutex, recovering the data if a previous holder panicked.
///
/// Every mutation is applied before its snapshot is written, so the guarded
/// state is consistent even after a poisoned unlock.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
