//! Receipt types for the checkout engine
//!
//! This module defines the itemized receipt produced by committed purchases.
//! All amounts are exact decimals; rounding happens only when a receipt is
//! rendered for display.

use rust_decimal::Decimal;

/// Flat membership discount rate (10%) applied once to the basket subtotal
pub fn member_discount_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// One fulfilled line of a committed purchase
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    /// Product name as displayed in the catalog
    pub name: String,

    /// Quantity purchased
    pub quantity: i64,

    /// Unit price at commit time
    pub unit_price: Decimal,

    /// quantity x unit_price, exact
    pub line_total: Decimal,
}

/// Itemized result of a committed purchase
///
/// For a single-item purchase the receipt carries exactly one line; bulk
/// purchases carry one line per basket selection. The discount is a single
/// aggregate amount, never per-line.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Fulfilled lines in selection order
    pub lines: Vec<ReceiptLine>,

    /// Sum of all line totals, exact
    pub subtotal: Decimal,

    /// Membership discount (zero for non-members), exact
    pub discount: Decimal,

    /// Amount actually debited: subtotal - discount, exact
    pub total: Decimal,

    /// Whether the membership discount was applied
    pub member: bool,
}
