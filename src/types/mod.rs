//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `product`: Catalog product and stock status
//! - `account`: Buyer session state
//! - `receipt`: Itemized purchase results and the discount rate
//! - `menu`: Typed menu selector for the session loop
//! - `error`: Error types for the checkout engine

pub mod account;
pub mod error;
pub mod menu;
pub mod product;
pub mod receipt;

pub use account::{default_starting_balance, BuyerAccount, DEFAULT_BUYER_NAME};
pub use error::CheckoutError;
pub use menu::MenuChoice;
pub use product::Product;
pub use receipt::{member_discount_rate, Receipt, ReceiptLine};
