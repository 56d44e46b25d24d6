//! # Cart
//!
//! The quantity-annotated cart collection. Pure: persistence is the
//! store's job, this module only enforces the collection rules.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  View Action              Cart Method             Collection Change     │
//! │  ───────────              ───────────             ─────────────────     │
//! │                                                                         │
//! │  Add to Cart ────────────► add_item() ──────────► qty += 1 or push     │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity() ──────► qty = n  (n ≤ 0      │
//! │                                                   removes the line)    │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ───────► lines.retain(..)     │
//! │                                                                         │
//! │  Checkout ───────────────► clear() ─────────────► lines.clear()        │
//! │                                                                         │
//! │  Badge / Summary ────────► totals() ────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutators return whether the collection changed, so callers can skip a
//! write when an operation was a no-op.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartLine, CatalogItem, ProductId};

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per product id (adding the same product increases
///   quantity)
/// - Every line has quantity ≥ 1 (setting 0 or less removes the line)
/// - Lines keep the order they were first added in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Rebuilds a cart from persisted lines, repairing anything that would
    /// break the invariants.
    ///
    /// - lines with quantity ≤ 0 are dropped
    /// - repeated ids are merged into the first occurrence by summing
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Cart::new();
        for line in lines {
            if line.quantity <= 0 {
                continue;
            }
            match cart.lines.iter_mut().find(|l| l.id() == line.id()) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: quantity + 1
    /// - Otherwise: a new line with quantity 1
    ///
    /// N calls always yield quantity N.
    pub fn add_item(&mut self, item: &CatalogItem) -> bool {
        self.add_units(item, 1)
    }

    /// Adds `units` units of a product in one step.
    ///
    /// Same result as `units` calls of [`Cart::add_item`]. Zero units is a
    /// no-op and never creates a line.
    pub fn add_units(&mut self, item: &CatalogItem, units: u32) -> bool {
        if units == 0 {
            return false;
        }
        let units = i64::from(units);

        if let Some(line) = self.lines.iter_mut().find(|l| l.id() == item.id) {
            line.quantity = line.quantity.saturating_add(units);
            return true;
        }

        self.lines.push(CartLine::from_item(item, units));
        true
    }

    /// Replaces the quantity of a line.
    ///
    /// ## Behavior
    /// - quantity ≤ 0: same as `remove_item`
    /// - product not in cart: no-op (lines are never created here)
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        match self.lines.iter_mut().find(|l| l.id() == id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Removes a line by product id. Removing an absent id is a no-op.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.id() != id);
        self.lines.len() != initial_len
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.clear();
        true
    }

    /// Sum of all line quantities (0 for an empty cart). Saturates at
    /// `i64::MAX` like [`Money`] does.
    pub fn total_item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum over lines of price × quantity.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Returns the line for a product, if present.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id() == id)
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Summary for badges and the cart footer.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

/// Cart totals summary for view responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct products.
    pub line_count: usize,

    /// Badge count: sum of quantities.
    pub total_quantity: i64,

    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_item_count(),
            total: cart.total_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn test_item(id: ProductId, price_cents: i64) -> CatalogItem {
        CatalogItem {
            id,
            title: format!("Product {}", id),
            description: String::new(),
            price_cents,
            category: "accessories".to_string(),
            image_ref: String::new(),
            rating: Rating {
                rate: 4.5,
                count: 10,
            },
        }
    }

    #[test]
    fn test_cart_scenario_two_products() {
        let mut cart = Cart::new();
        let item_a = test_item(1, 1000); // $10.00
        let item_b = test_item(2, 500); // $5.00

        cart.add_item(&item_a);
        cart.add_item(&item_a);
        cart.add_item(&item_b);

        assert_eq!(cart.total_item_count(), 3);
        assert_eq!(cart.total_price(), Money::from_cents(2500));
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_repeated_add_yields_exact_quantity() {
        for n in [1_i64, 2, 7, 50] {
            let mut cart = Cart::new();
            let item = test_item(9, 4999);
            for _ in 0..n {
                cart.add_item(&item);
            }

            assert_eq!(cart.total_item_count(), n);
            assert_eq!(cart.line_count(), 1);
            assert_eq!(cart.line(9).map(|l| l.quantity), Some(n));
        }
    }

    #[test]
    fn test_set_quantity_replaces_not_increments() {
        let mut cart = Cart::new();
        let item = test_item(1, 999);
        cart.add_item(&item);
        cart.add_item(&item);

        assert!(cart.set_quantity(1, 5));
        assert_eq!(cart.line(1).map(|l| l.quantity), Some(5));

        // Same value again changes nothing
        assert!(!cart.set_quantity(1, 5));
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let item = test_item(3, 8995);

        let mut by_zero = Cart::new();
        by_zero.add_item(&item);
        by_zero.set_quantity(3, 0);

        let mut by_remove = Cart::new();
        by_remove.add_item(&item);
        by_remove.remove_item(3);

        assert!(by_zero.line(3).is_none());
        assert!(by_remove.line(3).is_none());
        assert_eq!(by_zero, by_remove);

        let mut negative = Cart::new();
        negative.add_item(&item);
        assert!(negative.set_quantity(3, -4));
        assert!(negative.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id_does_not_create() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(77, 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&test_item(1, 100));

        assert!(cart.remove_item(1));
        assert!(!cart.remove_item(1));
        assert!(!cart.remove_item(404));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_price_is_order_independent() {
        let items = [test_item(1, 10995), test_item(2, 3999), test_item(3, 8995)];

        let mut forward = Cart::new();
        for item in &items {
            forward.add_item(item);
        }

        let mut backward = Cart::new();
        for item in items.iter().rev() {
            backward.add_item(item);
        }

        assert_eq!(forward.total_price(), backward.total_price());
        assert_eq!(forward.total_price(), Money::from_cents(10995 + 3999 + 8995));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_item(1, 999));
        assert!(!cart.is_empty());

        assert!(cart.clear());
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert!(cart.total_price().is_zero());
        assert!(!cart.clear());
    }

    #[test]
    fn test_from_lines_repairs_invariants() {
        let a = test_item(1, 1000);
        let b = test_item(2, 500);
        let cart = Cart::from_lines(vec![
            CartLine::from_item(&a, 2),
            CartLine::from_item(&b, 0),
            CartLine::from_item(&a, 3),
            CartLine::from_item(&b, -1),
        ]);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(1).map(|l| l.quantity), Some(5));
        assert!(cart.line(2).is_none());
    }

    #[test]
    fn test_add_units_matches_repeated_add() {
        let item = test_item(4, 1500);

        let mut bulk = Cart::new();
        assert!(bulk.add_units(&item, 3));
        bulk.add_units(&item, 2);

        let mut single = Cart::new();
        for _ in 0..5 {
            single.add_item(&item);
        }

        assert_eq!(bulk.line(4).map(|l| l.quantity), Some(5));
        assert_eq!(bulk.total_item_count(), single.total_item_count());

        assert!(!bulk.add_units(&test_item(5, 100), 0));
        assert!(bulk.line(5).is_none());
    }

    #[test]
    fn test_add_units_max_is_one_step() {
        let mut cart = Cart::new();
        let item = test_item(1, 100);

        cart.add_units(&item, u32::MAX);
        cart.add_units(&item, u32::MAX);
        assert_eq!(cart.total_item_count(), 2 * i64::from(u32::MAX));
    }

    #[test]
    fn test_item_count_saturates() {
        let mut cart = Cart::new();
        cart.add_item(&test_item(1, 100));
        cart.set_quantity(1, i64::MAX);
        cart.add_item(&test_item(2, 100));

        assert_eq!(cart.total_item_count(), i64::MAX);
        assert_eq!(cart.totals().total_quantity, i64::MAX);

        // Line quantity itself saturates too
        cart.add_item(&test_item(1, 100));
        assert_eq!(cart.line(1).map(|l| l.quantity), Some(i64::MAX));

        let restored = Cart::from_lines(vec![
            CartLine::from_item(&test_item(1, 100), i64::MAX),
            CartLine::from_item(&test_item(2, 100), 5),
            CartLine::from_item(&test_item(1, 100), 3),
        ]);
        assert_eq!(restored.line(1).map(|l| l.quantity), Some(i64::MAX));
        assert_eq!(restored.total_item_count(), i64::MAX);
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add_item(&test_item(1, 1000));
        cart.add_item(&test_item(1, 1000));

        let totals = cart.totals();
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.total, Money::from_cents(2000));
    }
}
