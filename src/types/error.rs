//! Error types for the checkout engine
//!
//! This module defines all error types that can occur while a session is
//! running. Display strings double as the user-facing failure reasons printed
//! by the session loop, so they are worded for the buyer, not for a log file.
//!
//! # Error Categories
//!
//! - **I/O Errors**: the interactive stream failed; the only fatal category
//! - **Input Errors**: unparseable menu choices, quantities, basket counts
//! - **Catalog Errors**: unresolved references, duplicate product names
//! - **Transaction Errors**: out of stock, insufficient stock/funds, duplicates
//! - **Arithmetic Errors**: overflow/underflow in balance or stock updates

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the checkout engine
///
/// Every variant except `IoError` is recoverable: the session reports the
/// reason and the containing operation aborts with no state mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    /// I/O error occurred on the interactive stream
    ///
    /// This is the only fatal error; the session cannot continue without
    /// its input and output handles.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Item reference did not resolve to a catalog product
    ///
    /// This is a recoverable error - the purchase flow aborts and the
    /// session returns to the menu.
    #[error("Item not found.")]
    ItemNotFound {
        /// The reference (index or name) that failed to resolve
        reference: String,
    },

    /// Product has zero quantity on hand
    ///
    /// This is a recoverable error - the purchase is rejected before any
    /// quantity is read.
    #[error("'{name}' is out of stock.")]
    OutOfStock {
        /// Name of the out-of-stock product
        name: String,
    },

    /// Requested quantity is zero or negative
    ///
    /// This is a recoverable error - the purchase is rejected.
    #[error("Quantity must be at least 1.")]
    NonPositiveQuantity {
        /// The non-positive quantity that was requested
        requested: i64,
    },

    /// Quantity input did not parse as an integer
    ///
    /// This is a recoverable error - the purchase flow aborts.
    #[error("Invalid quantity.")]
    InvalidQuantity {
        /// The raw input that failed to parse
        input: String,
    },

    /// Requested quantity exceeds the live quantity on hand
    ///
    /// This is a recoverable error - the purchase (or the whole basket)
    /// is rejected and stock remains unchanged.
    #[error("Not enough '{name}' in stock. Available: {available}.")]
    InsufficientStock {
        /// Name of the product
        name: String,
        /// Live quantity on hand at validation time
        available: u32,
        /// Quantity that was requested
        requested: i64,
    },

    /// Buyer balance is below the final charge
    ///
    /// This is a recoverable error - nothing is debited and no stock moves.
    #[error("Not enough balance. Needed ${:.2}, have ${:.2}.", needed.round_dp(2), available.round_dp(2))]
    InsufficientFunds {
        /// The final charge after any discount (unrounded)
        needed: Decimal,
        /// The buyer's balance at the time of the check
        available: Decimal,
    },

    /// The same product was selected twice in one basket
    ///
    /// This is a recoverable error - the whole bulk purchase aborts.
    #[error("Item already selected. Choose a different item.")]
    DuplicateSelection {
        /// Name of the product that was already in the basket
        name: String,
    },

    /// Basket count input did not parse as an integer
    ///
    /// This is a recoverable error - the bulk purchase aborts before any
    /// item prompt.
    #[error("Invalid number.")]
    InvalidItemCount {
        /// The raw input that failed to parse
        input: String,
    },

    /// Basket count is outside the allowed 1-4 range
    ///
    /// This is a recoverable error - the bulk purchase aborts before any
    /// item prompt.
    #[error("Please choose between 1 and 4 items.")]
    ItemCountOutOfRange {
        /// The out-of-range count
        count: i64,
    },

    /// Menu input did not match any option
    ///
    /// This is a recoverable error - the menu is shown again.
    #[error("Invalid option. Choose 1-5.")]
    InvalidMenuChoice {
        /// The raw input that failed to match
        input: String,
    },

    /// A basket with no selections reached the engine
    ///
    /// Not reachable through the interactive flow (the count bound is
    /// checked first); kept as a guard on the public commit API.
    #[error("Basket is empty.")]
    EmptyBasket,

    /// A product with the same case-insensitive name already exists
    ///
    /// Catalog names are unique; the checked insertion path rejects
    /// violations.
    #[error("Product '{name}' already exists in the catalog.")]
    DuplicateProduct {
        /// The conflicting product name
        name: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// This is a recoverable error - the transaction is rejected to keep
    /// balances and stock consistent.
    #[error("Arithmetic overflow in {operation}.")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Arithmetic underflow would occur
    ///
    /// This is a recoverable error - the transaction is rejected to keep
    /// balances and stock consistent.
    #[error("Arithmetic underflow in {operation}.")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
    },
}

// Conversion from io::Error to CheckoutError
impl From<std::io::Error> for CheckoutError {
    fn from(error: std::io::Error) -> Self {
        CheckoutError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl CheckoutError {
    /// Create an ItemNotFound error
    pub fn item_not_found(reference: &str) -> Self {
        CheckoutError::ItemNotFound {
            reference: reference.to_string(),
        }
    }

    /// Create an OutOfStock error
    pub fn out_of_stock(name: &str) -> Self {
        CheckoutError::OutOfStock {
            name: name.to_string(),
        }
    }

    /// Create a NonPositiveQuantity error
    pub fn non_positive_quantity(requested: i64) -> Self {
        CheckoutError::NonPositiveQuantity { requested }
    }

    /// Create an InvalidQuantity error
    pub fn invalid_quantity(input: &str) -> Self {
        CheckoutError::InvalidQuantity {
            input: input.to_string(),
        }
    }

    /// Create an InsufficientStock error
    pub fn insufficient_stock(name: &str, available: u32, requested: i64) -> Self {
        CheckoutError::InsufficientStock {
            name: name.to_string(),
            available,
            requested,
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(needed: Decimal, available: Decimal) -> Self {
        CheckoutError::InsufficientFunds { needed, available }
    }

    /// Create a DuplicateSelection error
    pub fn duplicate_selection(name: &str) -> Self {
        CheckoutError::DuplicateSelection {
            name: name.to_string(),
        }
    }

    /// Create an InvalidItemCount error
    pub fn invalid_item_count(input: &str) -> Self {
        CheckoutError::InvalidItemCount {
            input: input.to_string(),
        }
    }

    /// Create an ItemCountOutOfRange error
    pub fn item_count_out_of_range(count: i64) -> Self {
        CheckoutError::ItemCountOutOfRange { count }
    }

    /// Create an InvalidMenuChoice error
    pub fn invalid_menu_choice(input: &str) -> Self {
        CheckoutError::InvalidMenuChoice {
            input: input.to_string(),
        }
    }

    /// Create a DuplicateProduct error
    pub fn duplicate_product(name: &str) -> Self {
        CheckoutError::DuplicateProduct {
            name: name.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        CheckoutError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str) -> Self {
        CheckoutError::ArithmeticUnderflow {
            operation: operation.to_string(),
        }
    }
}
