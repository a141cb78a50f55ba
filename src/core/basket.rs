//! Basket module for bulk purchases
//!
//! A basket collects up to four distinct product selections before any
//! stock or balance is touched. Distinctness is tracked with an explicit
//! set of lowercase product keys, so the same product cannot be selected
//! twice under different capitalisations.

use std::collections::HashSet;

use crate::types::{CheckoutError, Product};

/// Smallest number of distinct selections a bulk purchase may hold
pub const MIN_BASKET_SELECTIONS: usize = 1;

/// Largest number of distinct selections a bulk purchase may hold
pub const MAX_BASKET_SELECTIONS: usize = 4;

/// A single intended purchase within a basket
///
/// Selections capture the product identity and the requested quantity
/// only. Prices and availability are read live from the catalog when the
/// basket is validated and committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Lowercase catalog key of the selected product
    pub key: String,
    /// Display name of the selected product
    pub name: String,
    /// Requested quantity
    pub quantity: i64,
}

/// An ordered set of distinct product selections
pub struct Basket {
    /// Selections in the order they were made
    selections: Vec<Selection>,
    /// Lowercase keys of every selected product
    selected_keys: HashSet<String>,
}

impl Basket {
    /// Create an empty basket
    pub fn new() -> Self {
        Basket {
            selections: Vec::new(),
            selected_keys: HashSet::new(),
        }
    }

    /// Whether the product is already selected
    pub fn contains(&self, product: &Product) -> bool {
        self.selected_keys.contains(&product.key())
    }

    /// Add a selection for the given product
    ///
    /// # Errors
    ///
    /// Returns an error if the product is already selected, if the
    /// requested quantity is below one, or if the basket already holds the
    /// maximum number of selections.
    pub fn push(&mut self, product: &Product, quantity: i64) -> Result<(), CheckoutError> {
        if self.contains(product) {
            return Err(CheckoutError::duplicate_selection(&product.name));
        }

        if quantity < 1 {
            return Err(CheckoutError::non_positive_quantity(quantity));
        }

        if self.selections.len() >= MAX_BASKET_SELECTIONS {
            let attempted = self.selections.len() as i64 + 1;
            return Err(CheckoutError::item_count_out_of_range(attempted));
        }

        self.selected_keys.insert(product.key());
        self.selections.push(Selection {
            key: product.key(),
            name: product.name.clone(),
            quantity,
        });

        Ok(())
    }

    /// Selections in the order they were made
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Number of selections held
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Whether the basket holds no selections
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

impl Default for Basket {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn mouse() -> Product {
        Product::new("Mouse", 10, Decimal::new(1999, 2))
    }

    fn keyboard() -> Product {
        Product::new("Keyboard", 5, Decimal::new(4999, 2))
    }

    #[test]
    fn test_push_records_key_name_and_quantity() {
        let mut basket = Basket::new();

        basket.push(&mouse(), 3).unwrap();

        assert_eq!(basket.len(), 1);
        let selection = &basket.selections()[0];
        assert_eq!(selection.key, "mouse");
        assert_eq!(selection.name, "Mouse");
        assert_eq!(selection.quantity, 3);
    }

    #[test]
    fn test_push_rejects_duplicate_product() {
        let mut basket = Basket::new();
        basket.push(&mouse(), 2).unwrap();

        // Same product under another capitalisation is still a duplicate
        let again = Product::new("MOUSE", 10, Decimal::new(1999, 2));
        let result = basket.push(&again, 1);

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::DuplicateSelection { .. }
        ));
        assert_eq!(basket.len(), 1);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-2)]
    fn test_push_rejects_non_positive_quantity(#[case] quantity: i64) {
        let mut basket = Basket::new();

        let result = basket.push(&mouse(), quantity);

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::NonPositiveQuantity { .. }
        ));
        assert!(basket.is_empty());
    }

    #[test]
    fn test_push_rejects_fifth_selection() {
        let mut basket = Basket::new();
        for name in ["Smartphone", "Computer", "Mouse", "Keyboard"] {
            let product = Product::new(name, 5, Decimal::ONE);
            basket.push(&product, 1).unwrap();
        }

        let fifth = Product::new("Monitor", 5, Decimal::ONE);
        let result = basket.push(&fifth, 1);

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::ItemCountOutOfRange { count: 5 }
        ));
        assert_eq!(basket.len(), MAX_BASKET_SELECTIONS);
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let mut basket = Basket::new();
        basket.push(&keyboard(), 1).unwrap();

        assert!(basket.contains(&Product::new("kEyBoArD", 1, Decimal::ONE)));
        assert!(!basket.contains(&mouse()));
    }
}
