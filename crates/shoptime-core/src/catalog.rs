//! # Catalog
//!
//! The static product catalog. Items are immutable; the cart and
//! favorites store their own copies, so swapping the catalog never
//! rewrites persisted lines.

use crate::types::{CatalogItem, ProductId, Rating};
use crate::ALL_CATEGORIES;

/// Product definition row: id, title, price in cents, category, image
/// photo id, rating, rating count, description.
type ProductRow = (
    ProductId,
    &'static str,
    i64,
    &'static str,
    u32,
    f64,
    u32,
    &'static str,
);

const BUILTIN_PRODUCTS: [ProductRow; 8] = [
    (
        1,
        "Modern Leather Backpack",
        10995,
        "accessories",
        1152077,
        4.8,
        432,
        "Stylish leather backpack perfect for daily use or weekend getaways. Features multiple compartments, laptop sleeve, and water-resistant exterior.",
    ),
    (
        2,
        "Premium Slim Fit T-Shirt",
        3999,
        "men's clothing",
        1656684,
        4.5,
        256,
        "Slim-fitting style, contrast raglan long sleeve, three-button henley placket, lightweight & soft fabric for breathable comfort.",
    ),
    (
        3,
        "Vintage Denim Jacket",
        8995,
        "men's clothing",
        1082529,
        4.6,
        378,
        "Classic denim jacket with a vintage wash. Features button closures, chest pockets, and adjustable waist tabs.",
    ),
    (
        4,
        "Designer Watch - Gold Series",
        24999,
        "accessories",
        9978717,
        4.7,
        213,
        "Luxury watch with gold-tone stainless steel band, quartz movement, and water-resistant design. Perfect for formal occasions.",
    ),
    (
        5,
        "Women's Summer Maxi Dress",
        5995,
        "women's clothing",
        985635,
        4.4,
        167,
        "Flowing maxi dress in a lightweight fabric, perfect for summer. Features adjustable straps and side slits for comfort.",
    ),
    (
        6,
        "Premium Running Shoes",
        12999,
        "footwear",
        2529148,
        4.9,
        542,
        "High-performance running shoes with responsive cushioning, breathable mesh upper, and durable rubber outsole for maximum traction.",
    ),
    (
        7,
        "Smart Fitness Tracker",
        7995,
        "electronics",
        437037,
        4.6,
        298,
        "Advanced fitness tracker with heart rate monitoring, sleep tracking, and smartphone notifications. Water-resistant design for all-day wear.",
    ),
    (
        8,
        "Minimalist Leather Wallet",
        4999,
        "accessories",
        2079438,
        4.7,
        184,
        "Sleek leather wallet with RFID protection, multiple card slots, and a slim profile. Perfect for the modern minimalist.",
    ),
];

fn image_url(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=800"
    )
}

/// Read-only product catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Wraps an arbitrary item list (tests, alternate catalogs).
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Catalog { items }
    }

    /// The eight demo products.
    pub fn builtin() -> Self {
        let items = BUILTIN_PRODUCTS
            .iter()
            .map(
                |&(id, title, price_cents, category, photo, rate, count, description)| {
                    CatalogItem {
                        id,
                        title: title.to_string(),
                        description: description.to_string(),
                        price_cents,
                        category: category.to_string(),
                        image_ref: image_url(photo),
                        rating: Rating { rate, count },
                    }
                },
            )
            .collect();

        Catalog { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in &self.items {
            if !categories.iter().any(|c| c == &item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Filters the catalog.
    ///
    /// ## Matching
    /// - `query`: case-insensitive substring of title or description;
    ///   empty matches everything
    /// - `category`: exact match; `None` or `"all"` disables the filter
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&CatalogItem> {
        let needle = query.trim().to_lowercase();
        let category = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);

        self.items
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .filter(|item| {
                needle.is_empty()
                    || item.title.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
