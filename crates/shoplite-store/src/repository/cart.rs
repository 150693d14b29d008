//! # Shopping Cart Component
//!
//! Cart line management and the checkout summary.
//!
//! ## Cart Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Line Semantics                                │
//! │                                                                         │
//! │  add(id, name, price) ──► line for that id exists?                      │
//! │                             yes ──► quantity += 1                       │
//! │                                     (snapshot stays frozen)             │
//! │                             no  ──► new line, quantity 1, with the      │
//! │                                     name and price passed in NOW        │
//! │                                                                         │
//! │  update_quantity(id, n)                                                 │
//! │     n >= 1 ──► set the line's quantity                                  │
//! │     n <= 0 ──► remove the line (same as remove(id))                     │
//! │                                                                         │
//! │  The snapshot is the point: editing or deleting a catalog product       │
//! │  never reprices a cart in progress.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is one cart per store, not one per account. Signing in or out
//! does not touch it.

use tracing::debug;

use shoplite_core::cart::{cart_total, item_count, summarize};
use shoplite_core::money::Money;
use shoplite_core::types::{CartItem, CartSummary};
use shoplite_core::CoreError;

use crate::error::DataResult;
use crate::store::{KeyValueStore, StoreKey};

// =============================================================================
// Shopping Cart
// =============================================================================

/// Cart operations over a key-value store.
pub struct ShoppingCart<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ShoppingCart<S> {
    /// Creates a cart over the given store.
    pub fn new(store: S) -> Self {
        ShoppingCart { store }
    }

    /// Returns every cart line, in stored order.
    pub fn list(&self) -> DataResult<Vec<CartItem>> {
        Ok(self.store.read_or_default(StoreKey::Cart)?)
    }

    /// Adds one unit of a product to the cart.
    ///
    /// A line already holding this product id grows by one; otherwise a
    /// new line freezes the name and price passed in. Returns the
    /// confirmation message the storefront flashes.
    pub fn add(&self, product_id: i64, name: &str, price: Money) -> DataResult<String> {
        let mut items: Vec<CartItem> = self.store.read_or_default(StoreKey::Cart)?;

        match items.iter_mut().find(|i| i.id == product_id) {
            Some(line) => {
                line.quantity += 1;
                debug!(id = product_id, quantity = line.quantity, "bumped cart line");
            }
            None => {
                items.push(CartItem {
                    id: product_id,
                    name: name.to_string(),
                    price_cents: price.cents(),
                    quantity: 1,
                });
                debug!(id = product_id, "new cart line");
            }
        }

        self.store.write(StoreKey::Cart, &items)?;
        Ok(format!("{name} added to cart!"))
    }

    /// Removes a line from the cart. Removing an absent id is a no-op.
    pub fn remove(&self, id: i64) -> DataResult<()> {
        let mut items: Vec<CartItem> = self.store.read_or_default(StoreKey::Cart)?;

        items.retain(|i| i.id != id);
        debug!(id, "removed cart line");

        self.store.write(StoreKey::Cart, &items)?;
        Ok(())
    }

    /// Sets a line's quantity. A quantity of zero or less removes the
    /// line instead, keeping the invariant that stored lines are >= 1.
    pub fn update_quantity(&self, id: i64, quantity: i64) -> DataResult<()> {
        if quantity <= 0 {
            return self.remove(id);
        }

        let mut items: Vec<CartItem> = self.store.read_or_default(StoreKey::Cart)?;

        let line = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CoreError::CartItemNotFound(id))?;

        line.quantity = quantity;
        debug!(id, quantity, "set cart line quantity");

        self.store.write(StoreKey::Cart, &items)?;
        Ok(())
    }

    /// Empties the cart (what checkout does after a "purchase").
    pub fn clear(&self) -> DataResult<()> {
        debug!("clearing cart");
        self.store.write(StoreKey::Cart, &Vec::<CartItem>::new())?;
        Ok(())
    }

    /// Sum of line totals across the cart.
    pub fn total(&self) -> DataResult<Money> {
        Ok(cart_total(&self.list()?))
    }

    /// Total quantity across all lines.
    pub fn item_count(&self) -> DataResult<i64> {
        Ok(item_count(&self.list()?))
    }

    /// Full checkout math: subtotal, shipping, tax, total.
    pub fn summary(&self) -> DataResult<CartSummary> {
        Ok(summarize(&self.list()?))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
