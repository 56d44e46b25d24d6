//! # Domain Types
//!
//! Core domain types used throughout ShoppingTime.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │   │    CartLine     │   │ SessionRecord   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │◄──│  item (flat)    │   │  username       │       │
//! │  │  title          │   │  quantity ≥ 1   │   │  credential     │       │
//! │  │  price_cents    │   │  added_at       │   │    marker       │       │
//! │  │  rating         │   └─────────────────┘   │  signed_in_at   │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Shape
//! All types serialize camelCase. A `CartLine` flattens its item, so a
//! persisted cart is an array of catalog objects each carrying an extra
//! `quantity` and `addedAt`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

/// Stable catalog identity of a product.
pub type ProductId = u32;

// =============================================================================
// Catalog Item
// =============================================================================

/// Customer rating summary. Display only, never used in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average score, 0.0 to 5.0.
    pub rate: f64,

    /// Number of ratings.
    pub count: u32,
}

/// A product from the static catalog. Immutable once published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogItem {
    /// Unique, stable identifier.
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Long-form description shown on the detail view.
    pub description: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Category label, e.g. "accessories".
    pub category: String,

    /// Image location, opaque to the core.
    pub image_ref: String,

    pub rating: Rating,
}

impl CatalogItem {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A catalog item in the cart together with how many units were added.
///
/// ## Invariants
/// - `quantity >= 1` whenever the line is inside a `Cart`
/// - the item is a frozen copy taken when the line was created, so the
///   line keeps its price even if the catalog is swapped out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CatalogItem,

    /// Units in cart.
    pub quantity: i64,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line from a catalog item and quantity.
    pub fn from_item(item: &CatalogItem, quantity: i64) -> Self {
        CartLine {
            item: item.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Product id of this line.
    #[inline]
    pub fn id(&self) -> ProductId {
        self.item.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.item.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Session Record
// =============================================================================

/// The signed-in user.
///
/// The password is never kept. `credential_marker` is an opaque token
/// minted at login that only records that the shape check passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionRecord {
    pub username: String,

    pub credential_marker: String,

    #[ts(as = "String")]
    pub signed_in_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Creates a record for `username` with a fresh credential marker.
    pub fn new(username: impl Into<String>) -> Self {
        SessionRecord {
            username: username.into(),
            credential_marker: Uuid::new_v4().to_string(),
            signed_in_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn watch() -> CatalogItem {
        CatalogItem {
            id: 4,
            title: "Designer Watch - Gold Series".to_string(),
            description: "Luxury watch".to_string(),
            price_cents: 24999,
            category: "accessories".to_string(),
            image_ref: "watch.jpeg".to_string(),
            rating: Rating {
                rate: 4.7,
                count: 213,
            },
        }
    }

    #[test]
    fn test_line_total() {
        let line = CartLine::from_item(&watch(), 2);
        assert_eq!(line.id(), 4);
        assert_eq!(line.line_total().cents(), 49998);
    }

    #[test]
    fn test_cart_line_snapshot_is_flat() {
        let line = CartLine::from_item(&watch(), 3);
        let value = serde_json::to_value(&line).unwrap();

        assert_eq!(value["id"], 4);
        assert_eq!(value["priceCents"], 24999);
        assert_eq!(value["imageRef"], "watch.jpeg");
        assert_eq!(value["quantity"], 3);
        assert!(value.get("item").is_none());
        assert!(value.get("addedAt").is_some());

        let back: CartLine = serde_json::from_value(value).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn test_session_record_hides_password() {
        let record = SessionRecord::new("alice");
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"username\":\"alice\""));
        assert!(json.contains("credentialMarker"));
        assert!(!json.contains("password"));
        assert_ne!(
            SessionRecord::new("alice").credential_marker,
            record.credential_marker
        );
    }
}
