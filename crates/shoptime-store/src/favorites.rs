//! # Favorites Store
//!
//! Durable favorites set. Every real change rewrites `favorites.json` with
//! the full list; no-ops skip the write.

use std::sync::{Arc, Mutex};

use shoptime_core::{CatalogItem, Favorites, ProductId};
use tracing::{debug, info};

use crate::adapter::{DurableStore, StorageKey};
use crate::{lock, snapshot};

#[derive(Debug)]
pub struct FavoritesStore {
    favorites: Mutex<Favorites>,
    adapter: Arc<dyn DurableStore>,
}

impl FavoritesStore {
    /// Restores persisted favorites before returning. Duplicate ids in the
    /// snapshot keep their first occurrence.
    pub fn open(adapter: Arc<dyn DurableStore>) -> Self {
        let items: Vec<CatalogItem> =
            snapshot::restore(adapter.as_ref(), StorageKey::Favorites).unwrap_or_default();
        let favorites = Favorites::from_items(items);
        info!(count = favorites.len(), "Restored favorites");

        FavoritesStore {
            favorites: Mutex::new(favorites),
            adapter,
        }
    }

    /// Applies `f` and writes the snapshot if it reported a change.
    fn mutate(&self, f: impl FnOnce(&mut Favorites) -> bool) -> bool {
        let mut favorites = lock(&self.favorites);
        let changed = f(&mut favorites);
        if changed {
            snapshot::persist(self.adapter.as_ref(), StorageKey::Favorites, favorites.items());
        }
        changed
    }

    /// Adds the item. Idempotent; returns whether it was inserted.
    pub fn add(&self, item: &CatalogItem) -> bool {
        debug!(product_id = item.id, "Favorite add");
        self.mutate(|f| f.add(item))
    }

    /// Removes the item. Returns whether it was present.
    pub fn remove(&self, id: ProductId) -> bool {
        debug!(product_id = id, "Favorite remove");
        self.mutate(|f| f.remove(id))
    }

    /// Flips membership and returns the new membership.
    pub fn toggle(&self, item: &CatalogItem) -> bool {
        debug!(product_id = item.id, "Favorite toggle");
        let mut favorites = lock(&self.favorites);
        let member = favorites.toggle(item);
        snapshot::persist(self.adapter.as_ref(), StorageKey::Favorites, favorites.items());
        member
    }

    pub fn contains(&self, id: ProductId) -> bool {
        lock(&self.favorites).contains(id)
    }

    /// Snapshot of the current favorites in insertion order.
    pub fn list(&self) -> Vec<CatalogItem> {
        lock(&self.favorites).items().to_vec()
    }

    pub fn len(&self) -> usize {
        lock(&self.favorites).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.favorites).is_empty()
    }
}
