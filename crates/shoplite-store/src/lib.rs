//! # shoplite-store: Persistence Layer for Shoplite
//!
//! This crate provides durable storage for the Shoplite storefront.
//! Collections live as JSON documents in a key-value store, and four
//! components perform every read-modify-write cycle against it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shoplite Data Flow                               │
//! │                                                                         │
//! │  Storefront UI action (search, add to cart, login...)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  shoplite-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ KeyValueStore │    │  Components   │    │   Seeding    │  │   │
//! │  │   │  (store.rs)   │    │ (repository/) │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ JsonFileStore │◄───│ ProductCatalog│    │ 6 sample     │  │   │
//! │  │   │ MemoryStore   │    │ AccountDir... │    │ products     │  │   │
//! │  │   │               │    │ SessionAuth   │    │              │  │   │
//! │  │   │               │    │ ShoppingCart  │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Data directory (JSON files)                    │   │
//! │  │   products.json  users.json  cart.json  session.json           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `KeyValueStore` trait and its two backends
//! - [`seed`] - First-run sample catalog
//! - [`error`] - Store and unified data error types
//! - [`repository`] - The four storefront components
//!
//! ## Concurrency
//!
//! Everything here is synchronous, single-threaded read-modify-write.
//! Two processes pointed at the same data directory can silently overwrite
//! each other's writes; that hazard is accepted and not handled.
//!
//! ## Usage
//!
//! ```rust
//! use shoplite_store::{initialize, JsonFileStore, ProductCatalog};
//! # use tempfile::TempDir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = TempDir::new()?;
//! let store = JsonFileStore::open(dir.path())?;
//! initialize(&store)?;
//!
//! let catalog = ProductCatalog::new(&store);
//! let products = catalog.list_all()?;
//! assert_eq!(products.len(), 6);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DataError, DataResult, ErrorCode, StoreError, StoreResult};
pub use store::{initialize, JsonFileStore, KeyValueStore, MemoryStore, StoreKey};

// Component re-exports for convenience
pub use repository::account::AccountDirectory;
pub use repository::cart::ShoppingCart;
pub use repository::catalog::ProductCatalog;
pub use repository::session::SessionAuth;
