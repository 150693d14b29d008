//! # Product Catalog Component
//!
//! CRUD over the product collection, plus search and sort pass-throughs.
//!
//! ## Mutation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Mutation Pipeline                            │
//! │                                                                         │
//! │  add / update / delete                                                  │
//! │       │                                                                 │
//! │       ├── 1. Permission gate  ◄── policy::can_manage_catalog            │
//! │       │      (checked FIRST: a non-admin with bad input hears           │
//! │       │       "permission denied", not a validation message)            │
//! │       │                                                                 │
//! │       ├── 2. Input validation ◄── validation::validate_*                │
//! │       │                                                                 │
//! │       └── 3. Read, apply, write back                                    │
//! │                                                                         │
//! │  Reads (list_all, get_by_id, search, sorted) skip steps 1 and 2;       │
//! │  anyone may browse the catalog.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::debug;

use shoplite_core::catalog::{search_products, sort_products};
use shoplite_core::types::{Product, ProductDraft, ProductPatch, User};
use shoplite_core::validation::{validate_price_cents, validate_product_name};
use shoplite_core::{policy, CoreError, DEFAULT_STOCK};

use crate::error::DataResult;
use crate::repository::next_record_id;
use crate::store::{KeyValueStore, StoreKey};

// =============================================================================
// Product Catalog
// =============================================================================

/// Catalog operations over a key-value store.
///
/// Reads are open to everyone. Mutations require an admin principal and
/// reject before any store write happens, so a denied call leaves the
/// collection byte-for-byte unchanged.
pub struct ProductCatalog<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProductCatalog<S> {
    /// Creates a catalog over the given store.
    pub fn new(store: S) -> Self {
        ProductCatalog { store }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Returns every product, in stored order.
    pub fn list_all(&self) -> DataResult<Vec<Product>> {
        Ok(self.store.read_or_default(StoreKey::Products)?)
    }

    /// Returns the product with the given id, if present.
    pub fn get_by_id(&self, id: i64) -> DataResult<Option<Product>> {
        let products = self.list_all()?;
        Ok(products.into_iter().find(|p| p.id == id))
    }

    /// Case-insensitive substring search over name, description, and
    /// category. An empty query returns the full catalog.
    pub fn search(&self, query: &str) -> DataResult<Vec<Product>> {
        let products = self.list_all()?;
        Ok(search_products(&products, query))
    }

    /// Returns the catalog in the order named by `key`. Unknown keys
    /// return stored order.
    pub fn sorted(&self, key: &str) -> DataResult<Vec<Product>> {
        let products = self.list_all()?;
        Ok(sort_products(&products, key))
    }

    // -------------------------------------------------------------------------
    // Mutations (admin only)
    // -------------------------------------------------------------------------

    /// Adds a product to the catalog and returns the stored record.
    ///
    /// The catalog assigns the id and creation timestamp. A draft without
    /// a stock level gets [`DEFAULT_STOCK`].
    pub fn add(&self, draft: ProductDraft, principal: Option<&User>) -> DataResult<Product> {
        if !policy::can_manage_catalog(principal) {
            return Err(CoreError::PermissionDenied { action: "add" }.into());
        }

        validate_product_name(&draft.name)?;
        validate_price_cents(draft.price_cents)?;

        let mut products: Vec<Product> = self.store.read_or_default(StoreKey::Products)?;

        let product = Product {
            id: next_record_id(products.iter().map(|p| p.id)),
            name: draft.name,
            description: draft.description,
            price_cents: draft.price_cents,
            category: draft.category,
            stock: draft.stock.unwrap_or(DEFAULT_STOCK),
            created_at: Utc::now(),
            updated_at: None,
        };

        debug!(id = product.id, name = %product.name, "adding product");

        products.push(product.clone());
        self.store.write(StoreKey::Products, &products)?;

        Ok(product)
    }

    /// Applies a partial update to a product and returns the new record.
    ///
    /// `Some` fields replace the stored value; `None` fields are left
    /// alone. Any change stamps `updated_at`.
    pub fn update(
        &self,
        id: i64,
        patch: ProductPatch,
        principal: Option<&User>,
    ) -> DataResult<Product> {
        if !policy::can_manage_catalog(principal) {
            return Err(CoreError::PermissionDenied { action: "update" }.into());
        }

        if let Some(name) = &patch.name {
            validate_product_name(name)?;
        }
        if let Some(price_cents) = patch.price_cents {
            validate_price_cents(price_cents)?;
        }

        let mut products: Vec<Product> = self.store.read_or_default(StoreKey::Products)?;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price_cents) = patch.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        product.updated_at = Some(Utc::now());

        debug!(id, "updating product");

        let updated = product.clone();
        self.store.write(StoreKey::Products, &products)?;

        Ok(updated)
    }

    /// Removes a product from the catalog.
    ///
    /// Deleting an id that is not present is a no-op, not an error; the
    /// end state is the same either way. Cart lines created from the
    /// product are untouched, their snapshot stays valid.
    pub fn delete(&self, id: i64, principal: Option<&User>) -> DataResult<()> {
        if !policy::can_manage_catalog(principal) {
            return Err(CoreError::PermissionDenied { action: "delete" }.into());
        }

        let mut products: Vec<Product> = self.store.read_or_default(StoreKey::Products)?;

        let before = products.len();
        products.retain(|p| p.id != id);
        debug!(id, removed = before - products.len(), "deleting product");

        self.store.write(StoreKey::Products, &products)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DataError, ErrorCode};
    use crate::store::{initialize, MemoryStore};

    fn admin() -> User {
        User {
            id: 1,
            name: "Admin".to_string(),
            email: "admin@gmail.com".to_string(),
            password: "hunter22".to_string(),
            created_at: Utc::now(),
            is_admin: false, // the reserved address alone grants access
        }
    }

    fn shopper() -> User {
        User {
            id: 2,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "hunter22".to_string(),
            created_at: Utc::now(),
            is_admin: false,
        }
    }

    fn draft(name: &str, price_cents: i64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: "A test product".to_string(),
            price_cents,
            category: "Testing".to_string(),
            stock: None,
        }
    }

    fn seeded_catalog(store: &MemoryStore) -> ProductCatalog<&MemoryStore> {
        initialize(store).unwrap();
        ProductCatalog::new(store)
    }

    #[test]
    fn test_list_all_on_fresh_store() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);
        assert_eq!(catalog.list_all().unwrap().len(), 6);
    }

    #[test]
    fn test_list_all_on_empty_store_is_empty() {
        let store = MemoryStore::new();
        let catalog = ProductCatalog::new(&store);
        assert!(catalog.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);

        let found = catalog.get_by_id(1).unwrap().unwrap();
        assert_eq!(found.name, "Wireless Headphones");

        assert!(catalog.get_by_id(999).unwrap().is_none());
    }

    #[test]
    fn test_add_assigns_id_and_default_stock() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);
        let admin = admin();

        let product = catalog.add(draft("USB Cable", 999), Some(&admin)).unwrap();

        assert!(product.id > 6);
        assert_eq!(product.stock, DEFAULT_STOCK);
        assert!(product.updated_at.is_none());
        assert_eq!(catalog.list_all().unwrap().len(), 7);
    }

    #[test]
    fn test_add_keeps_explicit_stock() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);
        let admin = admin();

        let mut d = draft("USB Cable", 999);
        d.stock = Some(42);
        let product = catalog.add(d, Some(&admin)).unwrap();
        assert_eq!(product.stock, 42);
    }

    #[test]
    fn test_add_requires_admin() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);
        let shopper = shopper();

        let err = catalog.add(draft("USB Cable", 999), Some(&shopper)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::PermissionDenied);

        let err = catalog.add(draft("USB Cable", 999), None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::PermissionDenied);

        // A denied add leaves the catalog unchanged
        assert_eq!(catalog.list_all().unwrap().len(), 6);
    }

    #[test]
    fn test_permission_gate_runs_before_validation() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);

        // Invalid input AND no permission: the caller hears about permission
        let err = catalog.add(draft("", -1), None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::PermissionDenied);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);
        let admin = admin();

        let err = catalog.add(draft("   ", 999), Some(&admin)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);

        let err = catalog.add(draft("USB Cable", -1), Some(&admin)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[test]
    fn test_update_merges_patch_fields() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);
        let admin = admin();

        let patch = ProductPatch {
            price_cents: Some(17999),
            stock: Some(3),
            ..ProductPatch::default()
        };
        let updated = catalog.update(1, patch, Some(&admin)).unwrap();

        // Patched fields change, the rest stay
        assert_eq!(updated.price_cents, 17999);
        assert_eq!(updated.stock, 3);
        assert_eq!(updated.name, "Wireless Headphones");
        assert!(updated.updated_at.is_some());

        let stored = catalog.get_by_id(1).unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[test]
    fn test_update_missing_product() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);
        let admin = admin();

        let err = catalog.update(999, ProductPatch::default(), Some(&admin)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert!(matches!(
            err,
            DataError::Domain(CoreError::ProductNotFound(999))
        ));
    }

    #[test]
    fn test_update_rejects_bad_patch_values() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);
        let admin = admin();

        let patch = ProductPatch {
            name: Some("   ".to_string()),
            ..ProductPatch::default()
        };
        let err = catalog.update(1, patch, Some(&admin)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);

        let patch = ProductPatch {
            price_cents: Some(-5),
            ..ProductPatch::default()
        };
        let err = catalog.update(1, patch, Some(&admin)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[test]
    fn test_update_requires_admin() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);
        let shopper = shopper();

        let err = catalog
            .update(1, ProductPatch::default(), Some(&shopper))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::PermissionDenied);
    }

    #[test]
    fn test_delete_removes_product() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);
        let admin = admin();

        catalog.delete(3, Some(&admin)).unwrap();

        assert_eq!(catalog.list_all().unwrap().len(), 5);
        assert!(catalog.get_by_id(3).unwrap().is_none());
    }

    #[test]
    fn test_delete_missing_id_is_a_no_op() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);
        let admin = admin();

        catalog.delete(999, Some(&admin)).unwrap();
        assert_eq!(catalog.list_all().unwrap().len(), 6);
    }

    #[test]
    fn test_delete_requires_admin() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);

        let err = catalog.delete(1, None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::PermissionDenied);
        assert_eq!(catalog.list_all().unwrap().len(), 6);
    }

    #[test]
    fn test_flagged_admin_may_mutate() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);

        let mut user = shopper();
        user.is_admin = true;
        assert!(catalog.add(draft("USB Cable", 999), Some(&user)).is_ok());
    }

    #[test]
    fn test_search_and_sorted_pass_through() {
        let store = MemoryStore::new();
        let catalog = seeded_catalog(&store);

        let hits = catalog.search("gaming").unwrap();
        assert_eq!(hits.len(), 2);

        let cheap_first = catalog.sorted("price-low").unwrap();
        assert_eq!(cheap_first[0].name, "Classic T-Shirt");

        // Unknown keys keep stored order
        let unsorted = catalog.sorted("rating").unwrap();
        assert_eq!(unsorted[0].id, 1);
    }
}
