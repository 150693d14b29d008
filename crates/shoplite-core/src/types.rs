//! # Domain Types
//!
//! Core domain types used throughout Shoplite.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │    CartItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (product)   │       │
//! │  │  name           │   │  name           │   │  name (frozen)  │       │
//! │  │  price_cents    │   │  email          │   │  price_cents    │       │
//! │  │  category       │   │  is_admin       │   │  quantity       │       │
//! │  │  stock          │   │  created_at     │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │  ProductDraft   │   │   CartSummary   │       │
//! │  │  ─────────────  │   │  ProductPatch   │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  ─────────────  │   │  subtotal, tax  │       │
//! │  │  800 = 8.00%    │   │  inputs to the  │   │  shipping,total │       │
//! │  └─────────────────┘   │  catalog CRUD   │   │  item_count     │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Record ids are i64 millisecond timestamps allocated at creation time.
//! They are unique and monotonically increasing, which makes "newest first"
//! orderings and "largest id so far" checks trivial.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8.00% (the storefront's flat sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (millisecond timestamp at creation).
    pub id: i64,

    /// Display name shown in the product grid.
    pub name: String,

    /// Longer description for the product detail view.
    pub description: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Category label, e.g. "Electronics" or "Fashion".
    pub category: String,

    /// Units on hand.
    pub stock: i64,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated, if ever.
    #[ts(as = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Input for creating a product. The catalog assigns id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub category: String,
    /// Units on hand; a sensible default is applied when omitted.
    pub stock: Option<i64>,
}

/// Partial update for a product. `Some` fields replace the stored value,
/// `None` fields leave it untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
}

// =============================================================================
// User
// =============================================================================

/// A registered shopper account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    /// Unique identifier (millisecond timestamp at registration).
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Login email. Also the identity the admin policy inspects.
    pub email: String,

    /// Stored as plain text. This is a demo account store, not a vault;
    /// there is no hashing anywhere in the pipeline.
    pub password: String,

    /// When the account was registered.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Admin flag. Absent in older records, so deserialization defaults
    /// it to false.
    #[serde(default)]
    pub is_admin: bool,
}

/// Raw registration form input, validated before any account is created.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

// =============================================================================
// Cart
// =============================================================================

/// A line item in the shopping cart.
///
/// ## Design Notes
/// - `id` is the product id the line was created from (not enforced)
/// - `name` and `price_cents` are frozen copies taken when the line was
///   added, so later catalog edits do not reprice a cart in progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Product id this line refers to.
    pub id: i64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    pub price_cents: i64,

    /// Quantity in cart, always >= 1 for a stored line.
    pub quantity: i64,
}

impl CartItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

/// Checkout math for the whole cart, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
    /// Total quantity across all lines (not the number of lines).
    pub item_count: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
