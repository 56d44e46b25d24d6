//! # Cart Store
//!
//! Durable cart. Wraps the pure [`Cart`] in a mutex, the same way the
//! desktop till held its cart, and writes `cart.json` through on every
//! change while the lock is still held.
//!
//! ## Write-Through Ordering
//! ```text
//!   caller A: add_item(x) ──► lock ─► cart.add_item ─► persist ─► unlock
//!   caller B: remove_item(y)                                      lock ─► ...
//!
//!   The snapshot on disk always matches the last completed call.
//! ```

use std::sync::{Arc, Mutex};

use shoptime_core::{Cart, CartLine, CartTotals, CatalogItem, Money, ProductId};
use tracing::{debug, info, warn};

use crate::adapter::{DurableStore, StorageKey};
use crate::{lock, snapshot};

#[derive(Debug)]
pub struct CartStore {
    cart: Mutex<Cart>,
    adapter: Arc<dyn DurableStore>,
}

impl CartStore {
    /// Restores the persisted cart before returning.
    ///
    /// Lines with a non-positive quantity are dropped and repeated ids are
    /// merged.
    pub fn open(adapter: Arc<dyn DurableStore>) -> Self {
        let lines: Vec<CartLine> =
            snapshot::restore(adapter.as_ref(), StorageKey::Cart).unwrap_or_default();
        let persisted = lines.len();
        let cart = Cart::from_lines(lines);

        if cart.line_count() != persisted {
            warn!(
                persisted,
                kept = cart.line_count(),
                "Repaired cart snapshot"
            );
        }
        info!(
            lines = cart.line_count(),
            quantity = cart.total_item_count(),
            "Restored cart"
        );

        CartStore {
            cart: Mutex::new(cart),
            adapter,
        }
    }

    /// Applies `f` and writes the snapshot if it reported a change.
    fn mutate(&self, f: impl FnOnce(&mut Cart) -> bool) -> bool {
        let mut cart = lock(&self.cart);
        let changed = f(&mut cart);
        if changed {
            snapshot::persist(self.adapter.as_ref(), StorageKey::Cart, cart.lines());
        }
        changed
    }

    /// Adds one unit of `item`.
    pub fn add_item(&self, item: &CatalogItem) {
        debug!(product_id = item.id, "Cart add");
        self.mutate(|cart| cart.add_item(item));
    }

    /// Adds `units` units in one step and writes once.
    ///
    /// Equivalent to `units` calls of [`CartStore::add_item`].
    pub fn add_units(&self, item: &CatalogItem, units: u32) {
        debug!(product_id = item.id, units, "Cart add units");
        self.mutate(|cart| cart.add_units(item, units));
    }

    /// Replaces a line's quantity; `quantity <= 0` removes the line.
    pub fn set_quantity(&self, id: ProductId, quantity: i64) {
        debug!(product_id = id, quantity, "Cart set quantity");
        self.mutate(|cart| cart.set_quantity(id, quantity));
    }

    pub fn remove_item(&self, id: ProductId) {
        debug!(product_id = id, "Cart remove");
        self.mutate(|cart| cart.remove_item(id));
    }

    pub fn clear(&self) {
        debug!("Cart clear");
        self.mutate(Cart::clear);
    }

    pub fn total_item_count(&self) -> i64 {
        lock(&self.cart).total_item_count()
    }

    pub fn total_price(&self) -> Money {
        lock(&self.cart).total_price()
    }

    pub fn totals(&self) -> CartTotals {
        lock(&self.cart).totals()
    }

    /// Snapshot of the lines in the order they were first added.
    pub fn lines(&self) -> Vec<CartLine> {
        lock(&self.cart).lines().to_vec()
    }

    pub fn line(&self, id: ProductId) -> Option<CartLine> {
        lock(&self.cart).line(id).cloned()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.cart).is_empty()
    }

    /// Copies the cart and empties it in one step.
    ///
    /// Used by checkout so no call can slip in between reading the totals
    /// and clearing.
    pub fn take(&self) -> Cart {
        let mut cart = lock(&self.cart);
        let taken = std::mem::take(&mut *cart);
        if !taken.is_empty() {
            snapshot::persist(self.adapter.as_ref(), StorageKey::Cart, cart.lines());
        }
        taken
    }
}
