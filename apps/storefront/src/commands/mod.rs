//! # Storefront Commands
//!
//! Every user action is a plain function over the state it needs,
//! returning a serializable response or an [`ApiError`](crate::error::ApiError).
//!
//! ```text
//! commands/
//! ├── catalog.rs    list_products, get_product, list_categories
//! ├── cart.rs       get_cart, add_to_cart, update_cart_item,
//! │                 remove_from_cart, clear_cart, checkout
//! ├── favorites.rs  get_favorites, toggle_favorite, remove_favorite
//! └── session.rs    login, logout, current_user
//! ```

pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod session;
