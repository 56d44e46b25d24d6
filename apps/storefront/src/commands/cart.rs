//! # Cart Commands
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shell              Command              CartStore          cart.json   │
//! │  ─────              ───────              ─────────          ─────────   │
//! │  add 1 3 ─────────► add_to_cart ───────► add_units(x, 3) ─► rewritten   │
//! │  qty 1 5 ─────────► update_cart_item ──► set_quantity ────► rewritten   │
//! │  rm 1 ────────────► remove_from_cart ──► remove_item ─────► rewritten   │
//! │  clear ───────────► clear_cart ────────► clear ───────────► rewritten   │
//! │  checkout ────────► checkout ──────────► take ────────────► rewritten   │
//! │  cart ────────────► get_cart ──────────► (read only)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every response carries the totals, so the badge count is always fresh.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shoptime_core::validation::validate_quantity;
use shoptime_core::{CartLine, CartTotals, Catalog, CoreError, ProductId};
use shoptime_store::{CartStore, SessionStore};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&CartStore> for CartResponse {
    fn from(cart: &CartStore) -> Self {
        CartResponse {
            lines: cart.lines(),
            totals: cart.totals(),
        }
    }
}

/// What was bought. Produced once; the cart is empty afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub receipt_id: String,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub placed_at: DateTime<Utc>,

    /// Signed-in user, if any.
    pub customer: Option<String>,
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - `quantity` defaults to 1 and must be positive
/// - Units are added one at a time, so adding N always yields N more
/// - The line keeps a copy of the product as it was when first added
///
/// ## Returns
/// Updated cart with all lines and totals
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &CartStore,
    product_id: ProductId,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id, quantity, "add_to_cart command");

    validate_quantity(quantity)?;
    let units = u32::try_from(quantity)
        .map_err(|_| ApiError::validation(format!("quantity {} is too large", quantity)))?;

    let item = catalog
        .get(product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;

    cart.add_units(item, units);
    Ok(CartResponse::from(cart))
}

/// Sets the quantity of a line already in the cart.
///
/// ## Behavior
/// - Quantity 0 or less: removes the line
/// - Product not in cart: `NotFound`
pub fn update_cart_item(
    cart: &CartStore,
    product_id: ProductId,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, quantity, "update_cart_item command");

    if cart.line(product_id).is_none() {
        return Err(ApiError::not_found("Cart item", product_id));
    }

    cart.set_quantity(product_id, quantity);
    Ok(CartResponse::from(cart))
}

/// Removes a line from the cart. Removing an absent product is a no-op.
pub fn remove_from_cart(cart: &CartStore, product_id: ProductId) -> CartResponse {
    debug!(product_id, "remove_from_cart command");

    cart.remove_item(product_id);
    CartResponse::from(cart)
}

/// Clears all lines from the cart.
pub fn clear_cart(cart: &CartStore) -> CartResponse {
    debug!("clear_cart command");

    cart.clear();
    CartResponse::from(cart)
}

/// Completes the purchase.
///
/// No payment is taken. The cart contents are captured in a receipt and
/// the cart is emptied in the same step.
pub fn checkout(cart: &CartStore, session: &SessionStore) -> Result<CheckoutReceipt, ApiError> {
    debug!("checkout command");

    let purchased = cart.take();
    if purchased.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    let receipt = CheckoutReceipt {
        receipt_id: Uuid::new_v4().to_string(),
        lines: purchased.lines().to_vec(),
        totals: purchased.totals(),
        placed_at: Utc::now(),
        customer: session.current_user().map(|r| r.username),
    };

    info!(
        receipt_id = %receipt.receipt_id,
        quantity = receipt.totals.total_quantity,
        total_cents = receipt.totals.total.cents(),
        "Checkout complete"
    );
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shoptime_core::Money;
    use shoptime_store::{DurableStore, MemoryStore};
    use std::sync::Arc;

    fn stores() -> (Arc<MemoryStore>, CartStore, SessionStore) {
        let adapter = Arc::new(MemoryStore::new());
        let cart = CartStore::open(adapter.clone());
        let session = SessionStore::open(adapter.clone());
        (adapter, cart, session)
    }

    #[test]
    fn test_add_to_cart_default_quantity() {
        let catalog = Catalog::builtin();
        let (_, cart, _) = stores();

        let response = add_to_cart(&catalog, &cart, 1, None).unwrap();
        assert_eq!(response.totals.total_quantity, 1);

        let response = add_to_cart(&catalog, &cart, 1, Some(3)).unwrap();
        assert_eq!(response.totals.total_quantity, 4);
        assert_eq!(response.totals.line_count, 1);
        assert_eq!(response.totals.total, Money::from_cents(4 * 10995));
    }

    #[test]
    fn test_add_to_cart_rejects_bad_input() {
        let catalog = Catalog::builtin();
        let (_, cart, _) = stores();

        let err = add_to_cart(&catalog, &cart, 1, Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_to_cart(&catalog, &cart, 99, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_to_cart_quantity_limit() {
        let catalog = Catalog::builtin();
        let (adapter, cart, _) = stores();
        let max = i64::from(u32::MAX);

        let response = add_to_cart(&catalog, &cart, 1, Some(max)).unwrap();
        assert_eq!(response.totals.total_quantity, max);
        assert_eq!(adapter.write_count(), 1);

        let err = add_to_cart(&catalog, &cart, 1, Some(max + 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(cart.total_item_count(), max);
    }

    #[test]
    fn test_update_cart_item() {
        let catalog = Catalog::builtin();
        let (_, cart, _) = stores();
        add_to_cart(&catalog, &cart, 2, None).unwrap();

        let response = update_cart_item(&cart, 2, 6).unwrap();
        assert_eq!(response.totals.total_quantity, 6);

        let response = update_cart_item(&cart, 2, 0).unwrap();
        assert!(response.lines.is_empty());

        let err = update_cart_item(&cart, 2, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_remove_and_clear() {
        let catalog = Catalog::builtin();
        let (_, cart, _) = stores();
        add_to_cart(&catalog, &cart, 2, None).unwrap();
        add_to_cart(&catalog, &cart, 5, None).unwrap();

        let response = remove_from_cart(&cart, 2);
        assert_eq!(response.totals.line_count, 1);
        assert_eq!(remove_from_cart(&cart, 2).totals.line_count, 1);

        let response = clear_cart(&cart);
        assert_eq!(response.totals.total_quantity, 0);
        assert!(response.totals.total.is_zero());
    }

    #[test]
    fn test_checkout_snapshots_then_clears() {
        let catalog = Catalog::builtin();
        let (adapter, cart, session) = stores();
        session.login("alice", "password1");
        add_to_cart(&catalog, &cart, 7, Some(2)).unwrap();

        let receipt = checkout(&cart, &session).unwrap();
        assert_eq!(receipt.totals.total_quantity, 2);
        assert_eq!(receipt.totals.total, Money::from_cents(2 * 7995));
        assert_eq!(receipt.customer.as_deref(), Some("alice"));

        assert!(cart.is_empty());
        assert_eq!(adapter.load("cart").as_deref(), Some("[]"));
    }

    #[test]
    fn test_checkout_empty_cart() {
        let (_, cart, session) = stores();
        let err = checkout(&cart, &session).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }
}
