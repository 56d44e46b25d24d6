//! # shoptime-core: Pure Storefront Logic for ShoppingTime
//!
//! This crate is the **heart** of the storefront. It holds the data model
//! and every state rule of the cart, favorites and session as pure code
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ShoppingTime Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront (view layer)                      │   │
//! │  │    Home ──► Products ──► Favorites ──► Cart ──► Login           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               shoptime-store (stateful stores)                  │   │
//! │  │    SessionStore, FavoritesStore, CartStore, DurableStore        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shoptime-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │CatalogItem│  │   Money   │  │   Cart    │  │  shape    │  │   │
//! │  │   │ CartLine  │  │           │  │ Favorites │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, CartLine, SessionRecord)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Quantity-annotated cart collection
//! - [`favorites`] - Set of favorited catalog items
//! - [`session`] - Anonymous/Authenticated state machine
//! - [`catalog`] - The static product catalog
//! - [`error`] - Domain error types
//! - [`validation`] - Shape-only input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shoptime_core::{Cart, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let backpack = catalog.get(1).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(backpack);
//! cart.add_item(backpack);
//!
//! assert_eq!(cart.total_item_count(), 2);
//! assert_eq!(cart.total_price().cents(), 2 * 10995);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use catalog::Catalog;
pub use error::{CoreError, ValidationError};
pub use favorites::Favorites;
pub use money::Money;
pub use session::SessionState;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum username length accepted by the demo login.
///
/// Counted in characters, not bytes.
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length accepted by the demo login.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Category filter value that matches every product.
pub const ALL_CATEGORIES: &str = "all";
