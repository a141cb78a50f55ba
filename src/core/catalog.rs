//! Catalog management module
//!
//! This module provides the `Catalog` struct which owns the ordered product
//! collection and provides the lookups used by the purchase flows.
//!
//! The Catalog is responsible for:
//! - Preserving insertion order (insertion order = display order)
//! - Enforcing case-insensitive unique product names
//! - 1-based index and case-insensitive name lookups
//! - The interactive resolution rule: all-digit references try the index
//!   first, then fall back to a name lookup

use crate::types::{CheckoutError, Product};
use rust_decimal::Decimal;

/// Store banner shown above the catalog listing
pub const STORE_NAME: &str = "Aung Store";

/// Ordered collection of products with case-insensitive unique names
///
/// The catalog owns every product for the process lifetime. Quantities are
/// mutated through `find_by_name_mut` by the transaction engine only.
pub struct Catalog {
    /// Products in insertion order
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// The fixed boot catalog
    ///
    /// Four products with fixed initial quantities and unit prices; this is
    /// the only bootstrapped state in the system.
    pub fn seeded() -> Self {
        Catalog {
            products: vec![
                Product::new("Smartphone", 5, Decimal::new(29999, 2)),
                Product::new("Computer", 2, Decimal::new(85050, 2)),
                Product::new("Mouse", 10, Decimal::new(1999, 2)),
                Product::new("Keyboard", 5, Decimal::new(4999, 2)),
            ],
        }
    }

    /// Add a product, enforcing the unique-name invariant
    ///
    /// # Errors
    ///
    /// Returns an error if a product with the same case-insensitive name
    /// already exists.
    pub fn add_product(&mut self, product: Product) -> Result<(), CheckoutError> {
        if self.find_by_name(&product.name).is_some() {
            return Err(CheckoutError::duplicate_product(&product.name));
        }

        self.products.push(product);

        Ok(())
    }

    /// Ordered view of all products
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by 1-based display position
    ///
    /// Returns `None` for 0 or positions past the end; callers fall back to
    /// a name lookup rather than treating this as an error.
    pub fn find_by_index(&self, index: usize) -> Option<&Product> {
        if index == 0 {
            return None;
        }
        self.products.get(index - 1)
    }

    /// Look up a product by case-insensitive name
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        let needle = name.to_lowercase();
        self.products.iter().find(|product| product.key() == needle)
    }

    /// Mutable case-insensitive name lookup
    ///
    /// Used by the transaction engine to decrement stock at commit time.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Product> {
        let needle = name.to_lowercase();
        self.products
            .iter_mut()
            .find(|product| product.key() == needle)
    }

    /// Resolve an interactive item reference
    ///
    /// An all-digit reference is tried as a 1-based position first; on a
    /// miss (or any non-digit input) the reference is tried as a name.
    pub fn resolve(&self, reference: &str) -> Option<&Product> {
        let reference = reference.trim();

        if !reference.is_empty() && reference.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(index) = reference.parse::<usize>() {
                if let Some(product) = self.find_by_index(index) {
                    return Some(product);
                }
            }
        }

        self.find_by_name(reference)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
