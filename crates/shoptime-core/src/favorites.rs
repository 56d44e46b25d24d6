//! # Favorites
//!
//! A set of catalog items keyed by product id. Adding is idempotent and
//! the list keeps insertion order so repeated reads render the same way.

use crate::types::{CatalogItem, ProductId};

/// Favorited catalog items.
///
/// ## Invariants
/// - At most one entry per product id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    items: Vec<CatalogItem>,
}

impl Favorites {
    pub fn new() -> Self {
        Favorites { items: Vec::new() }
    }

    /// Rebuilds from persisted items. Later duplicates of an id are
    /// dropped.
    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut favorites = Favorites::new();
        for item in items {
            favorites.add(&item);
        }
        favorites
    }

    /// Inserts the item unless its id is already present. Returns whether
    /// it was inserted.
    pub fn add(&mut self, item: &CatalogItem) -> bool {
        if self.contains(item.id) {
            return false;
        }
        self.items.push(item.clone());
        true
    }

    /// Deletes the entry for `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != initial_len
    }

    /// Removes the item if present, adds it otherwise. Returns the new
    /// membership.
    pub fn toggle(&mut self, item: &CatalogItem) -> bool {
        if self.remove(item.id) {
            false
        } else {
            self.add(item)
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn test_add_twice_keeps_one_entry() {
        let catalog = Catalog::builtin();
        let item = catalog.get(2).unwrap();
        let mut favorites = Favorites::new();

        assert!(favorites.add(item));
        assert!(!favorites.add(item));

        let matching: Vec<_> = favorites.items().iter().filter(|i| i.id == 2).collect();
        assert_eq!(matching.len(), 1);
    }

    #[test]
    fn test_add_then_remove_then_contains() {
        let catalog = Catalog::builtin();
        let item = catalog.get(1).unwrap();
        let mut favorites = Favorites::new();

        favorites.add(item);
        favorites.remove(item.id);

        assert!(!favorites.contains(item.id));
    }

    #[test]
    fn test_contains_unseen_ids() {
        let favorites = Favorites::new();
        assert!(!favorites.contains(0));
        assert!(!favorites.contains(u32::MAX));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let catalog = Catalog::builtin();
        let mut favorites = Favorites::new();
        favorites.add(catalog.get(3).unwrap());

        assert!(!favorites.remove(99));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_toggle() {
        let catalog = Catalog::builtin();
        let item = catalog.get(5).unwrap();
        let mut favorites = Favorites::new();

        assert!(favorites.toggle(item));
        assert!(favorites.contains(5));
        assert!(!favorites.toggle(item));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let catalog = Catalog::builtin();
        let mut favorites = Favorites::new();
        for id in [6, 1, 4] {
            favorites.add(catalog.get(id).unwrap());
        }

        let ids: Vec<_> = favorites.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![6, 1, 4]);
    }

    #[test]
    fn test_from_items_dedupes() {
        let catalog = Catalog::builtin();
        let a = catalog.get(1).unwrap().clone();
        let b = catalog.get(2).unwrap().clone();

        let favorites = Favorites::from_items(vec![a.clone(), b, a]);
        let ids: Vec<_> = favorites.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
