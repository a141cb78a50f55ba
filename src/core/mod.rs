//! Core business logic module
//!
//! This module contains the core checkout components:
//! - `catalog` - Product catalog with ordered, uniquely named products
//! - `basket` - Distinct-selection collection for bulk purchases
//! - `engine` - Purchase validation and atomic commits

pub mod basket;
pub mod catalog;
pub mod engine;

pub use basket::{Basket, Selection, MAX_BASKET_SELECTIONS, MIN_BASKET_SELECTIONS};
pub use catalog::{Catalog, STORE_NAME};
pub use engine::CheckoutEngine;
