//! # shoplite-core: Pure Business Logic for Shoplite
//!
//! This crate is the **heart** of the Shoplite storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shoplite Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI (JS)                           │   │
//! │  │    Product Grid ──► Cart Panel ──► Auth Forms ──► Admin Panel  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               shoplite-store (Persistence Layer)                │   │
//! │  │    ProductCatalog, AccountDirectory, SessionAuth, ShoppingCart │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shoplite-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  totals   │  │   rules   │  │   │
//! │  │   │   User    │  │  TaxCalc  │  │  summary  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, CartItem, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Registration and field validation
//! - [`policy`] - Who may do what (admin rules)
//! - [`cart`] - Cart arithmetic (totals, tax, shipping)
//! - [`catalog`] - Product search and ordering
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Store, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shoplite_core::money::Money;
//! use shoplite_core::types::TaxRate;
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(4000); // $40.00
//!
//! // Sales tax at 8.00%
//! let tax_rate = TaxRate::from_bps(800);
//! let tax = subtotal.calculate_tax(tax_rate);
//!
//! assert_eq!(tax.cents(), 320); // $3.20
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod policy;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shoplite_core::Money` instead of
// `use shoplite_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Reserved administrator address.
///
/// ## Why a constant?
/// The demo deployment grants admin rights to one well-known account in
/// addition to users carrying the admin flag. Only [`policy::is_admin`]
/// consumes this, so changing the rule touches exactly one function.
pub const ADMIN_EMAIL: &str = "admin@gmail.com";

/// Sales tax rate applied to cart subtotals, in basis points (8.00%).
pub const TAX_RATE_BPS: u32 = 800;

/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_cents(5_000);

/// Flat shipping fee charged below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: Money = Money::from_cents(1_000);

/// Stock level assigned to new products when the draft omits one.
pub const DEFAULT_STOCK: i64 = 10;

/// Minimum display-name length accepted at registration (after trimming).
pub const MIN_NAME_LEN: usize = 3;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;
