//! # Cart Module
//!
//! Line items and the cart that owns them.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operator Action           Cart Call              State Change          │
//! │  ───────────────           ─────────              ────────────          │
//! │                                                                         │
//! │  Click product ──────────► add_item() ──────────► merge or append      │
//! │                                                                         │
//! │  Click row "remove" ─────► remove_item(index) ──► items.remove(i)      │
//! │                                                                         │
//! │  Cancel / finalize ──────► clear() ─────────────► items.clear()        │
//! │                                                                         │
//! │  Render total ───────────► total() ─────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two items share a name (same-name adds merge into one line)
//! - Every quantity is > 0, every price is ≥ 0
//! - Insertion order is preserved except for removals

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::validate_quantity;

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart, uniquely keyed by product name.
///
/// ## Identity
/// The name is the identity, compared case-sensitively and exactly. The
/// product source supplies one configured price per name, so a repeated add
/// carries the same price; the item still records whatever price came last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product name as shown on the button and the cart row.
    pub name: String,

    /// Price per unit.
    pub unit_price: Money,

    /// Units in the cart, always positive.
    pub quantity: i64,
}

impl LineItem {
    /// The row total: unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart for the transaction in progress.
///
/// Owns its line items exclusively: they are created on first add, mutated
/// in place on repeat add, and dropped on removal or clear. One cart lives
/// per transaction; finalize and cancel both end with [`Cart::clear`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product to the cart, merging with an existing same-name line.
    ///
    /// ## Behavior
    /// - Name already present: quantities are summed and the unit price is
    ///   overwritten with the incoming one (last write wins)
    /// - New name: appended at the end of the sequence
    ///
    /// ## Errors
    /// [`ValidationError::InvalidQuantity`] when `quantity ≤ 0`; the cart is
    /// untouched in that case.
    ///
    /// ## Example
    /// ```rust
    /// use caixa_core::{Cart, Money};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item("Arroz 5kg", Money::from_centavos(500), 2).unwrap();
    /// cart.add_item("Arroz 5kg", Money::from_centavos(500), 3).unwrap();
    ///
    /// assert_eq!(cart.item_count(), 1);
    /// assert_eq!(cart.items()[0].quantity, 5);
    /// ```
    pub fn add_item(
        &mut self,
        name: &str,
        unit_price: Money,
        quantity: i64,
    ) -> Result<(), ValidationError> {
        validate_quantity(quantity)?;
        debug_assert!(!unit_price.is_negative(), "configured prices are never negative");

        if let Some(item) = self.items.iter_mut().find(|i| i.name == name) {
            item.quantity += quantity;
            item.unit_price = unit_price;
            return Ok(());
        }

        self.items.push(LineItem {
            name: name.to_string(),
            unit_price,
            quantity,
        });
        Ok(())
    }

    /// Removes the item at `index` (0-based, current display order).
    ///
    /// Out-of-range indexes are a no-op returning `None` rather than an
    /// error: the caller hands back an index from the last rendered
    /// snapshot, so a miss means the row is already gone.
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit price × quantity` over all items; zero for an empty cart.
    ///
    /// Centavo arithmetic keeps this exact no matter how many adds and
    /// removals led here.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, item| acc + item.line_total())
    }

    /// The current line items, in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn money(centavos: i64) -> Money {
        Money::from_centavos(centavos)
    }

    #[test]
    fn test_add_item_appends_in_order() {
        let mut cart = Cart::new();
        cart.add_item("Arroz 5kg", money(500), 2).unwrap();
        cart.add_item("Feijão 1kg", money(350), 1).unwrap();

        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Arroz 5kg", "Feijão 1kg"]);
    }

    #[test]
    fn test_add_same_name_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_item("Café 500g", money(1290), 2).unwrap();
        cart.add_item("Café 500g", money(1290), 3).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_merge_takes_latest_price() {
        let mut cart = Cart::new();
        cart.add_item("Leite 1L", money(425), 1).unwrap();
        cart.add_item("Leite 1L", money(450), 1).unwrap();

        assert_eq!(cart.items()[0].unit_price, money(450));
        assert_eq!(cart.total(), money(900));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut cart = Cart::new();
        cart.add_item("Pão", money(80), 1).unwrap();
        cart.add_item("pão", money(80), 1).unwrap();

        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        assert!(cart.add_item("Arroz 5kg", money(500), 0).is_err());
        assert!(cart.add_item("Arroz 5kg", money(500), -1).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item_by_index() {
        let mut cart = Cart::new();
        cart.add_item("Arroz 5kg", money(500), 2).unwrap();
        cart.add_item("Feijão 1kg", money(350), 1).unwrap();

        let removed = cart.remove_item(0).unwrap();
        assert_eq!(removed.name, "Arroz 5kg");
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].name, "Feijão 1kg");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add_item("Arroz 5kg", money(500), 2).unwrap();

        assert!(cart.remove_item(5).is_none());
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_total_example() {
        // Rice 5,00 × 2 + Beans 3,50 × 1 = 13,50
        let mut cart = Cart::new();
        cart.add_item("Rice", money(500), 2).unwrap();
        cart.add_item("Beans", money(350), 1).unwrap();

        assert_eq!(cart.total(), money(1350));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert_eq!(Cart::new().total(), Money::zero());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item("Arroz 5kg", money(500), 2).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_free_item_contributes_zero() {
        let mut cart = Cart::new();
        cart.add_item("Sacola", money(0), 3).unwrap();
        cart.add_item("Arroz 5kg", money(500), 1).unwrap();

        assert_eq!(cart.total(), money(500));
    }
}
