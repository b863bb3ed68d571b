//! # Domain Types
//!
//! The artifacts a successful parse hands back to the caller.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────────────┐     ┌─────────────────┐               │
//! │  │            Cart             │     │    LineItem     │               │
//! │  │  ─────────────────────────  │ 1:N │  ─────────────  │               │
//! │  │  items: Vec<LineItem>  ─────┼────►│  id (opaque)    │               │
//! │  │  total = Σ price×quantity   │     │  name           │               │
//! │  └─────────────────────────────┘     │  price    > 0   │               │
//! │                                      │  quantity > 0   │               │
//! │                                      └─────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Floating Point
//! Prices and quantities are plain `f64` and the total is their native
//! floating point sum, with no rounding. Compare totals with a tolerance.

use serde::Serialize;
use ts_rs::TS;

// =============================================================================
// Line Item
// =============================================================================

/// One validated cart entry.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Opaque identifier from the injected [`IdSource`](crate::IdSource).
    pub id: String,

    /// Product name, trimmed.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Quantity ordered. Fractional quantities are allowed.
    pub quantity: f64,
}

impl LineItem {
    /// Line subtotal (price × quantity).
    #[inline]
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity
    }
}

// =============================================================================
// Aggregator
// =============================================================================

/// Sums `price * quantity` over `items`, in order. Zero for no items.
///
/// ## Example
/// ```rust
/// use cart_core::{calc_total, LineItem};
///
/// let items = vec![LineItem {
///     id: "a".into(),
///     name: "Tea".into(),
///     price: 2.5,
///     quantity: 4.0,
/// }];
/// assert_eq!(calc_total(&items), 10.0);
/// assert_eq!(calc_total(&[]), 0.0);
/// ```
pub fn calc_total(items: &[LineItem]) -> f64 {
    items.iter().fold(0.0, |total, item| total + item.subtotal())
}

// =============================================================================
// Cart
// =============================================================================

/// The result of a successful parse.
///
/// ## Invariants
/// - `total` always equals [`calc_total`] over `items`
/// - Built only through [`Cart::from_items`]; no mutation afterwards
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<LineItem>,
    total: f64,
}

impl Cart {
    /// Creates a cart and derives its total from the items.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let total = calc_total(&items);
        Cart { items, total }
    }

    /// Line items in file order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of item subtotals.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::from_items(Vec::new())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, quantity: f64) -> LineItem {
        LineItem {
            id: format!("id-{}", name),
            name: name.to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_calc_total_empty() {
        assert_eq!(calc_total(&[]), 0.0);
    }

    #[test]
    fn test_calc_total_matches_sum_of_subtotals() {
        let items = vec![
            item("a", 9.0, 2.0),
            item("b", 10.32, 1.0),
            item("c", 28.72, 10.0),
        ];

        let expected = 9.0 * 2.0 + 10.32 * 1.0 + 28.72 * 10.0;
        assert_eq!(calc_total(&items), expected);
        assert!((calc_total(&items) - 315.52).abs() < 1e-9);
    }

    #[test]
    fn test_cart_total_is_derived_from_items() {
        let cart = Cart::from_items(vec![item("a", 1.5, 2.0), item("b", 2.0, 3.0)]);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), calc_total(cart.items()));
        assert_eq!(cart.total(), 9.0);
    }

    #[test]
    fn test_default_cart_is_empty() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_cart_serializes_items_and_total() {
        let cart = Cart::from_items(vec![item("tea", 2.5, 2.0)]);
        let json = serde_json::to_value(&cart).unwrap();

        assert_eq!(json["total"], 5.0);
        assert_eq!(json["items"][0]["id"], "id-tea");
        assert_eq!(json["items"][0]["name"], "tea");
        assert_eq!(json["items"][0]["price"], 2.5);
        assert_eq!(json["items"][0]["quantity"], 2.0);
    }
}
