//! Menu types for the session loop
//!
//! This module defines the typed menu selector. Raw menu input is parsed at
//! the I/O boundary; the session loop dispatches on the enum.

/// Menu options offered by the session loop
///
/// Each variant corresponds to one of the option codes "1" through "5".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Display the catalog with stock status
    ShowCatalog,

    /// Buy a single item (resolve item, quantity, membership, then purchase)
    BuySingle,

    /// Buy up to four distinct items in one atomic transaction
    BuyBulk,

    /// Display the buyer's current balance
    ShowBalance,

    /// Print the final catalog snapshot and balance, then end the session
    Quit,
}
