//! I/O module
//!
//! Handles console interaction, input parsing, and terminal rendering.
//!
//! # Components
//!
//! - `console` - Line-oriented prompt/print abstraction over any streams
//! - `parse` - Conversion of raw prompt answers into domain values
//! - `render` - Deterministic rendering of catalog, menu, and receipts

pub mod console;
pub mod parse;
pub mod render;

pub use console::Console;
pub use parse::{
    is_cancel, is_yes, parse_balance, parse_item_count, parse_menu_choice, parse_quantity,
};
pub use render::{
    format_usd, write_balance, write_catalog, write_farewell, write_menu,
    write_purchase_confirmation, write_receipt, write_welcome,
};
