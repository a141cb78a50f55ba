//! Rust Checkout Engine Library
//! # Overview
//!
//! This library provides an interactive retail checkout simulator: a seeded
//! in-memory catalog, a single buyer account, and a menu-driven session with
//! single-item and atomic bulk purchases.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Product, BuyerAccount, Receipt, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::catalog`] - Ordered product catalog with unique names
//!   - [`core::basket`] - Distinct-selection collection for bulk purchases
//!   - [`core::engine`] - Purchase validation and atomic commits
//! - [`io`] - Console prompting, answer parsing, and terminal rendering
//! - [`session`] - The startup interview and the menu loop
//!
//! # Menu Options
//!
//! The session supports five options:
//!
//! - **Show inventory**: List every product with quantity, price, and status
//! - **Buy single item**: One product, with ordered validation checks
//! - **Buy multiple items**: Up to four distinct products committed atomically
//! - **Show balance**: The buyer's current balance
//! - **Quit**: Print the final inventory and balance, then exit
//!
//! # Money Handling
//!
//! All amounts are exact decimals. The member discount is 10% of the
//! aggregate subtotal, and totals keep sub-cent precision internally;
//! rounding to cents happens only when an amount is displayed.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use crate::core::{Basket, Catalog, CheckoutEngine, Selection};
pub use io::Console;
pub use session::{collect_buyer, Session};
pub use types::{BuyerAccount, CheckoutError, MenuChoice, Product, Receipt, ReceiptLine};
