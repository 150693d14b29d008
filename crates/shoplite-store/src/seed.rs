//! # Sample Catalog
//!
//! The six products a fresh store starts with. Kept as a const table so
//! the seed binary, `initialize`, and tests all agree on the data.

use chrono::{DateTime, TimeZone, Utc};

use shoplite_core::types::Product;

/// One row of the sample catalog.
struct SeedProduct {
    id: i64,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    category: &'static str,
    stock: i64,
}

/// Catalog launch date. Each sample product is stamped one day after the
/// previous one, so the "newest" ordering of a fresh store is stable and
/// seeding twice produces identical records.
const LAUNCH_EPOCH: i64 = 1_735_689_600; // 2025-01-01T00:00:00Z

const SAMPLE_CATALOG: &[SeedProduct] = &[
    SeedProduct {
        id: 1,
        name: "Wireless Headphones",
        description: "Premium noise-cancelling wireless headphones with 30-hour battery life and premium sound quality.",
        price_cents: 19999,
        category: "Electronics",
        stock: 15,
    },
    SeedProduct {
        id: 2,
        name: "Smart Watch",
        description: "Feature-rich smartwatch with fitness tracking, heart rate monitor, and 7-day battery life.",
        price_cents: 29999,
        category: "Electronics",
        stock: 8,
    },
    SeedProduct {
        id: 3,
        name: "Classic T-Shirt",
        description: "100% cotton comfortable t-shirt available in multiple colors and sizes.",
        price_cents: 2999,
        category: "Fashion",
        stock: 50,
    },
    SeedProduct {
        id: 4,
        name: "Programming Guide",
        description: "Comprehensive guide to web development with practical examples and best practices.",
        price_cents: 4999,
        category: "Books",
        stock: 20,
    },
    SeedProduct {
        id: 5,
        name: "Gaming Mouse",
        description: "High-precision gaming mouse with customizable buttons and RGB lighting.",
        price_cents: 7999,
        category: "Gaming",
        stock: 25,
    },
    SeedProduct {
        id: 6,
        name: "Keyboard Pro",
        description: "Mechanical gaming keyboard with mechanical switches and programmable keys.",
        price_cents: 14999,
        category: "Gaming",
        stock: 12,
    },
];

fn created_at(id: i64) -> DateTime<Utc> {
    match Utc.timestamp_opt(LAUNCH_EPOCH + id * 86_400, 0) {
        chrono::LocalResult::Single(ts) => ts,
        // LAUNCH_EPOCH plus a few days is always a valid UTC instant
        _ => Utc::now(),
    }
}

/// Builds the sample catalog as full product records.
pub fn sample_products() -> Vec<Product> {
    SAMPLE_CATALOG
        .iter()
        .map(|row| Product {
            id: row.id,
            name: row.name.to_string(),
            description: row.description.to_string(),
            price_cents: row.price_cents,
            category: row.category.to_string(),
            stock: row.stock,
            created_at: created_at(row.id),
            updated_at: None,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
