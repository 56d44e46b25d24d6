//! # Favorites Commands

use serde::Serialize;
use shoptime_core::{Catalog, CatalogItem, CoreError, ProductId};
use shoptime_store::FavoritesStore;
use tracing::debug;

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesResponse {
    pub items: Vec<CatalogItem>,
    pub count: usize,
}

impl From<&FavoritesStore> for FavoritesResponse {
    fn from(favorites: &FavoritesStore) -> Self {
        let items = favorites.list();
        FavoritesResponse {
            count: items.len(),
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteResponse {
    pub product_id: ProductId,
    pub is_favorite: bool,
    pub count: usize,
}

pub fn get_favorites(favorites: &FavoritesStore) -> FavoritesResponse {
    debug!("get_favorites command");
    FavoritesResponse::from(favorites)
}

/// Flips a product's favorite flag.
pub fn toggle_favorite(
    catalog: &Catalog,
    favorites: &FavoritesStore,
    product_id: ProductId,
) -> Result<ToggleFavoriteResponse, ApiError> {
    debug!(product_id, "toggle_favorite command");

    let item = catalog
        .get(product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;
    let is_favorite = favorites.toggle(item);

    Ok(ToggleFavoriteResponse {
        product_id,
        is_favorite,
        count: favorites.len(),
    })
}

/// Removes a favorite. Works for ids no longer in the catalog.
pub fn remove_favorite(favorites: &FavoritesStore, product_id: ProductId) -> FavoritesResponse {
    debug!(product_id, "remove_favorite command");

    favorites.remove(product_id);
    FavoritesResponse::from(favorites)
}
