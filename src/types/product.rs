//! Product types for the checkout engine
//!
//! This module defines the Product structure owned by the catalog, along
//! with the derived stock status used for catalog display.

use rust_decimal::Decimal;

/// A single catalog product
///
/// Products are owned exclusively by the catalog. The quantity is mutated
/// only by the transaction engine when a sale commits; products are never
/// removed during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Display name, unique within the catalog case-insensitively
    pub name: String,

    /// Quantity on hand
    ///
    /// Decreases by the purchased amount when a sale commits; never negative.
    pub quantity: u32,

    /// Price per unit
    ///
    /// Non-negative exact decimal, so aggregate totals can carry sub-cent
    /// precision until display time.
    pub unit_price: Decimal,
}

impl Product {
    /// Create a new product
    pub fn new(name: &str, quantity: u32, unit_price: Decimal) -> Self {
        Product {
            name: name.to_string(),
            quantity,
            unit_price,
        }
    }

    /// Canonical key for case-insensitive lookups and duplicate checks
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether at least one unit is on hand
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Display status derived from the live quantity
    pub fn status_label(&self) -> &'static str {
        if self.in_stock() {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::in_stock(5, true, "In Stock")]
    #[case::single_unit(1, true, "In Stock")]
    #[case::out_of_stock(0, false, "Out of Stock")]
    fn test_stock_status(
        #[case] quantity: u32,
        #[case] expected_in_stock: bool,
        #[case] expected_label: &str,
    ) {
        let product = Product::new("Mouse", quantity, Decimal::new(1999, 2));
        assert_eq!(product.in_stock(), expected_in_stock);
        assert_eq!(product.status_label(), expected_label);
    }

    #[rstest]
    #[case("Mouse", "mouse")]
    #[case("KEYBOARD", "keyboard")]
    #[case("Smartphone", "smartphone")]
    fn test_key_is_lowercase_name(#[case] name: &str, #[case] expected: &str) {
        let product = Product::new(name, 1, Decimal::ONE);
        assert_eq!(product.key(), expected);
    }
}
