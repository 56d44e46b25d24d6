//! Restart scenarios against the file adapter: state written by one set of
//! stores must be what a fresh set of stores over the same directory sees.

use std::fs;
use std::sync::Arc;

use shoptime_core::Catalog;
use shoptime_store::{CartStore, DurableStore, FavoritesStore, FileStore, SessionStore};
use tempfile::TempDir;

fn adapter(dir: &TempDir) -> Arc<dyn DurableStore> {
    Arc::new(FileStore::open(dir.path()).unwrap())
}

#[test]
fn test_full_state_survives_restart() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::builtin();

    {
        let store = adapter(&dir);
        let session = SessionStore::open(store.clone());
        let favorites = FavoritesStore::open(store.clone());
        let cart = CartStore::open(store);

        assert!(session.login("alice", "password1"));
        favorites.add(catalog.get(4).unwrap());
        favorites.add(catalog.get(1).unwrap());
        cart.add_item(catalog.get(2).unwrap());
        cart.add_item(catalog.get(2).unwrap());
        cart.add_item(catalog.get(8).unwrap());
    }

    let store = adapter(&dir);
    let session = SessionStore::open(store.clone());
    let favorites = FavoritesStore::open(store.clone());
    let cart = CartStore::open(store);

    assert_eq!(
        session.current_user().map(|r| r.username),
        Some("alice".to_string())
    );

    let favorite_ids: Vec<_> = favorites.list().iter().map(|i| i.id).collect();
    assert_eq!(favorite_ids, vec![4, 1]);

    assert_eq!(cart.total_item_count(), 3);
    assert_eq!(cart.total_price().cents(), 2 * 3999 + 4999);
    let cart_ids: Vec<_> = cart.lines().iter().map(|l| l.id()).collect();
    assert_eq!(cart_ids, vec![2, 8]);
}

#[test]
fn test_session_reload_after_logout() {
    let dir = TempDir::new().unwrap();

    {
        let session = SessionStore::open(adapter(&dir));
        session.login("alice", "password1");
        session.logout();
    }

    assert!(!SessionStore::open(adapter(&dir)).is_authenticated());
    assert!(!dir.path().join("session.json").exists());
}

#[test]
fn test_reload_after_clear_and_remove() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::builtin();

    {
        let store = adapter(&dir);
        let cart = CartStore::open(store.clone());
        let favorites = FavoritesStore::open(store);

        cart.add_item(catalog.get(5).unwrap());
        cart.clear();
        favorites.add(catalog.get(6).unwrap());
        favorites.remove(6);
    }

    let store = adapter(&dir);
    assert!(CartStore::open(store.clone()).is_empty());
    assert!(FavoritesStore::open(store).is_empty());
}

#[test]
fn test_corrupt_files_open_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cart.json"), "{\"truncated\": [").unwrap();
    fs::write(dir.path().join("favorites.json"), "42").unwrap();
    fs::write(dir.path().join("session.json"), "null").unwrap();

    let store = adapter(&dir);
    let cart = CartStore::open(store.clone());
    let favorites = FavoritesStore::open(store.clone());
    let session = SessionStore::open(store);

    assert!(cart.is_empty());
    assert!(favorites.is_empty());
    assert!(!session.is_authenticated());

    // The next write replaces the corrupt document
    cart.add_item(Catalog::builtin().get(1).unwrap());
    assert_eq!(CartStore::open(adapter(&dir)).total_item_count(), 1);
}

#[test]
fn test_hand_edited_snapshot_is_repaired() {
    let dir = TempDir::new().unwrap();
    let raw = r#"[
        {"id":3,"title":"Vintage Denim Jacket","description":"","priceCents":8995,
         "category":"men's clothing","imageRef":"","rating":{"rate":4.6,"count":378},
         "quantity":-2,"addedAt":"2024-05-01T10:00:00Z"},
        {"id":7,"title":"Smart Fitness Tracker","description":"","priceCents":7995,
         "category":"electronics","imageRef":"","rating":{"rate":4.6,"count":298},
         "quantity":2,"addedAt":"2024-05-01T10:00:00Z"}
    ]"#;
    fs::write(dir.path().join("cart.json"), raw).unwrap();

    let cart = CartStore::open(adapter(&dir));
    assert_eq!(cart.total_item_count(), 2);
    assert!(cart.line(3).is_none());
    assert_eq!(cart.total_price().cents(), 2 * 7995);
}
