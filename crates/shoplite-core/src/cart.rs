//! # Cart Arithmetic
//!
//! Pure checkout math over a slice of cart lines. The store crate owns the
//! lines themselves; this module only computes.
//!
//! ## Checkout Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Summary Pipeline                              │
//! │                                                                         │
//! │  items ──► subtotal = Σ (price × quantity)                              │
//! │                │                                                        │
//! │                ├──► shipping = $0.00  if subtotal >= $50.00             │
//! │                │               $10.00 otherwise                         │
//! │                │                                                        │
//! │                ├──► tax = subtotal × 8.00% (half-up on cents)           │
//! │                │                                                        │
//! │                └──► total = subtotal + shipping + tax                   │
//! │                                                                         │
//! │  Shipping is NOT taxed. Tax applies to the subtotal only.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::{CartItem, CartSummary, TaxRate};
use crate::{FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD, TAX_RATE_BPS};

/// Sums line totals across the cart. Empty cart totals zero.
///
/// ## Example
/// ```rust
/// use shoplite_core::cart::cart_total;
/// use shoplite_core::types::CartItem;
///
/// let items = vec![CartItem {
///     id: 1,
///     name: "Wireless Headphones".to_string(),
///     price_cents: 19999,
///     quantity: 2,
/// }];
/// assert_eq!(cart_total(&items).cents(), 39998);
/// ```
pub fn cart_total(items: &[CartItem]) -> Money {
    items.iter().map(CartItem::line_total).sum()
}

/// Total quantity across all lines (not the number of lines).
pub fn item_count(items: &[CartItem]) -> i64 {
    items.iter().map(|i| i.quantity).sum()
}

/// Computes the full checkout summary for the cart.
///
/// ## Example
/// ```rust
/// use shoplite_core::cart::summarize;
/// use shoplite_core::types::CartItem;
///
/// let items = vec![CartItem {
///     id: 4,
///     name: "Programming Guide".to_string(),
///     price_cents: 4999,
///     quantity: 1,
/// }];
/// let summary = summarize(&items);
///
/// // $49.99 is below the free-shipping threshold
/// assert_eq!(summary.shipping.cents(), 1000);
/// ```
pub fn summarize(items: &[CartItem]) -> CartSummary {
    let subtotal = cart_total(items);

    let shipping = if subtotal >= FREE_SHIPPING_THRESHOLD {
        Money::zero()
    } else {
        FLAT_SHIPPING_FEE
    };

    let tax = subtotal.calculate_tax(TaxRate::from_bps(TAX_RATE_BPS));

    CartSummary {
        subtotal,
        shipping,
        tax,
        total: subtotal + shipping + tax,
        item_count: item_count(items),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, price_cents: i64, quantity: i64) -> CartItem {
        CartItem {
            id,
            name: format!("Product {id}"),
            price_cents,
            quantity,
        }
    }

    #[test]
    fn test_empty_cart() {
        let summary = summarize(&[]);
        assert!(summary.subtotal.is_zero());
        assert_eq!(summary.shipping.cents(), 1000);
        assert!(summary.tax.is_zero());
        assert_eq!(summary.total.cents(), 1000);
        assert_eq!(summary.item_count, 0);
    }

    #[test]
    fn test_total_and_count_across_lines() {
        let items = vec![item(1, 19999, 1), item(3, 2999, 3)];
        assert_eq!(cart_total(&items).cents(), 28996);
        assert_eq!(item_count(&items), 4);
    }

    #[test]
    fn test_summary_below_free_shipping() {
        // $40.00 subtotal: $10.00 shipping, $3.20 tax, $53.20 total
        let items = vec![item(1, 2000, 2)];
        let summary = summarize(&items);

        assert_eq!(summary.subtotal.cents(), 4000);
        assert_eq!(summary.shipping.cents(), 1000);
        assert_eq!(summary.tax.cents(), 320);
        assert_eq!(summary.total.cents(), 5320);
        assert_eq!(summary.item_count, 2);
    }

    #[test]
    fn test_summary_at_and_above_free_shipping() {
        // Exactly $50.00 ships free
        let at = summarize(&[item(1, 5000, 1)]);
        assert!(at.shipping.is_zero());
        assert_eq!(at.tax.cents(), 400);
        assert_eq!(at.total.cents(), 5400);

        // $60.00 subtotal: free shipping, $4.80 tax, $64.80 total
        let above = summarize(&[item(1, 3000, 2)]);
        assert!(above.shipping.is_zero());
        assert_eq!(above.tax.cents(), 480);
        assert_eq!(above.total.cents(), 6480);
    }

    #[test]
    fn test_one_cent_below_threshold_pays_shipping() {
        let summary = summarize(&[item(1, 4999, 1)]);
        assert_eq!(summary.shipping.cents(), 1000);
    }

    #[test]
    fn test_tax_rounds_half_up_on_cents() {
        // $29.99 × 8% = $2.3992 → $2.40
        let summary = summarize(&[item(3, 2999, 1)]);
        assert_eq!(summary.tax.cents(), 240);
    }
}
