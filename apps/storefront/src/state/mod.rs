//! # State Module
//!
//! Long-lived storefront state, built once at startup.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────┐ ┌──────────────┐ ┌────────────────┐ ┌─────────────┐   │
//! │  │ ConfigState │ │ SessionStore │ │ FavoritesStore │ │  CartStore  │   │
//! │  │ read-only   │ │  Mutex<..>   │ │   Mutex<..>    │ │  Mutex<..>  │   │
//! │  └─────────────┘ └──────┬───────┘ └───────┬────────┘ └──────┬──────┘   │
//! │  ┌─────────────┐        └─────────────────┼─────────────────┘          │
//! │  │   Catalog   │                          ▼                            │
//! │  │ read-only   │            Arc<dyn DurableStore>                      │
//! │  └─────────────┘   FileStore(data_dir) or MemoryStore fallback         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take only the pieces they need, so each is testable with a
//! `MemoryStore` and nothing else.

mod config;

use std::sync::Arc;

use shoptime_core::Catalog;
use shoptime_store::{CartStore, DurableStore, FavoritesStore, FileStore, MemoryStore, SessionStore};
use tracing::{info, warn};

pub use config::{ConfigError, ConfigResult, ConfigState};

/// Everything the shell needs, opened and restored.
#[derive(Debug)]
pub struct AppState {
    pub config: ConfigState,
    pub catalog: Catalog,
    pub session: SessionStore,
    pub favorites: FavoritesStore,
    pub cart: CartStore,
}

impl AppState {
    /// Opens the stores over the configured data directory.
    ///
    /// If the directory is unusable the stores run on a `MemoryStore` and
    /// nothing outlives the process.
    pub fn open(config: ConfigState) -> Self {
        let adapter = open_adapter(&config);
        Self::with_adapter(config, adapter)
    }

    /// Opens the stores over an explicit adapter.
    pub fn with_adapter(config: ConfigState, adapter: Arc<dyn DurableStore>) -> Self {
        AppState {
            config,
            catalog: Catalog::builtin(),
            session: SessionStore::open(adapter.clone()),
            favorites: FavoritesStore::open(adapter.clone()),
            cart: CartStore::open(adapter),
        }
    }
}

fn open_adapter(config: &ConfigState) -> Arc<dyn DurableStore> {
    let Some(dir) = config.resolve_data_dir() else {
        warn!("No data directory available, state will not persist");
        return Arc::new(MemoryStore::new());
    };

    match FileStore::open(&dir) {
        Ok(store) => {
            info!(data_dir = %dir.display(), "Using file store");
            Arc::new(store)
        }
        Err(e) => {
            warn!(data_dir = %dir.display(), error = %e, "Data directory unusable, state will not persist");
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_uses_data_dir() {
        let dir = TempDir::new().unwrap();
        let config = ConfigState {
            data_dir: Some(dir.path().join("state")),
            ..ConfigState::default()
        };

        {
            let state = AppState::open(config.clone());
            let item = state.catalog.get(1).unwrap();
            state.cart.add_item(item);
        }

        assert!(dir.path().join("state").join("cart.json").is_file());
        let reopened = AppState::open(config);
        assert_eq!(reopened.cart.total_item_count(), 1);
    }

    #[test]
    fn test_unusable_data_dir_falls_back_to_memory() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let state = AppState::open(ConfigState {
            data_dir: Some(blocker.join("state")),
            ..ConfigState::default()
        });

        let item = state.catalog.get(2).unwrap();
        state.cart.add_item(item);
        assert_eq!(state.cart.total_item_count(), 1);
    }
}
