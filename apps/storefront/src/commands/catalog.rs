//! # Catalog Commands
//!
//! Product browsing. Read-only over the catalog, plus membership flags from
//! the favorites and cart stores for the detail view.

use serde::Serialize;
use shoptime_core::validation::validate_search_query;
use shoptime_core::{Catalog, CatalogItem, CoreError, ProductId, ALL_CATEGORIES};
use shoptime_store::{CartStore, FavoritesStore};
use tracing::debug;

use crate::error::ApiError;

/// Filtered product listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub items: Vec<CatalogItem>,
    pub query: String,
    pub category: String,
}

/// One product with the visitor's relationship to it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub item: CatalogItem,
    pub is_favorite: bool,

    /// Units of this product already in the cart.
    pub in_cart: i64,
}

/// Searches the catalog.
///
/// ## Arguments
/// * `query` - Case-insensitive text over title and description
/// * `category` - Exact category, or `"all"` / `None` for every category
pub fn list_products(
    catalog: &Catalog,
    query: Option<&str>,
    category: Option<&str>,
) -> Result<ProductListResponse, ApiError> {
    let query = validate_search_query(query.unwrap_or_default())?;
    let category = category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(ALL_CATEGORIES);
    debug!(query = %query, category = %category, "list_products command");

    let items = catalog
        .search(&query, Some(category))
        .into_iter()
        .cloned()
        .collect();

    Ok(ProductListResponse {
        items,
        query,
        category: category.to_string(),
    })
}

/// Gets a single product by id.
pub fn get_product(
    catalog: &Catalog,
    favorites: &FavoritesStore,
    cart: &CartStore,
    product_id: ProductId,
) -> Result<ProductDetail, ApiError> {
    debug!(product_id, "get_product command");

    let item = catalog
        .get(product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;

    Ok(ProductDetail {
        item: item.clone(),
        is_favorite: favorites.contains(product_id),
        in_cart: cart.line(product_id).map_or(0, |l| l.quantity),
    })
}

/// Category filter options, `"all"` first.
pub fn list_categories(catalog: &Catalog) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(catalog.categories())
        .collect()
}
