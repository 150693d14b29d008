//! # Catalog Search & Ordering
//!
//! Pure functions over product lists: substring search and the four
//! storefront sort orders. The store crate owns the list; this module
//! only filters and reorders.

use crate::types::Product;

// =============================================================================
// Sort Keys
// =============================================================================

/// The orderings the storefront's sort dropdown offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Cheapest first.
    PriceLowToHigh,
    /// Most expensive first.
    PriceHighToLow,
    /// Alphabetical by name, case-insensitive.
    Name,
    /// Most recently created first.
    Newest,
}

impl SortKey {
    /// Parses a UI sort key string. Unknown strings parse to `None`,
    /// which callers treat as "leave the order alone".
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "price-low" => Some(SortKey::PriceLowToHigh),
            "price-high" => Some(SortKey::PriceHighToLow),
            "name" => Some(SortKey::Name),
            "newest" => Some(SortKey::Newest),
            _ => None,
        }
    }
}

// =============================================================================
// Search
// =============================================================================

/// Case-insensitive substring search over name, description, and category.
///
/// An empty query matches everything. Result order follows the input order.
///
/// ## Example
/// ```rust
/// use shoplite_core::catalog::search_products;
/// # use chrono::Utc;
/// # use shoplite_core::types::Product;
/// # fn product(name: &str, category: &str) -> Product {
/// #     Product {
/// #         id: 1,
/// #         name: name.to_string(),
/// #         description: String::new(),
/// #         price_cents: 100,
/// #         category: category.to_string(),
/// #         stock: 1,
/// #         created_at: Utc::now(),
/// #         updated_at: None,
/// #     }
/// # }
///
/// let products = vec![product("Gaming Mouse", "Gaming")];
/// assert_eq!(search_products(&products, "MOUSE").len(), 1);
/// assert_eq!(search_products(&products, "keyboard").len(), 0);
/// ```
pub fn search_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();

    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

// =============================================================================
// Sort
// =============================================================================

/// Returns a sorted copy of the product list. The input is never mutated.
///
/// Unknown keys return the list in its original order. All orderings use a
/// stable sort, so products that compare equal keep their relative order.
pub fn sort_products(products: &[Product], key: &str) -> Vec<Product> {
    let mut sorted = products.to_vec();

    match SortKey::parse(key) {
        Some(SortKey::PriceLowToHigh) => {
            sorted.sort_by_key(|p| p.price_cents);
        }
        Some(SortKey::PriceHighToLow) => {
            sorted.sort_by_key(|p| std::cmp::Reverse(p.price_cents));
        }
        Some(SortKey::Name) => {
            sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        Some(SortKey::Newest) => {
            sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        None => {}
    }

    sorted
}

// =============================================================================
// Unit Tests
// =============================================================================
