//! Terminal rendering for the interactive session
//!
//! This module centralizes every block of text the session prints:
//! - The catalog listing with the store banner
//! - The session menu and welcome/farewell banners
//! - Purchase confirmations and itemized receipts
//!
//! All functions render deterministically to any `Write`, so output can
//! be asserted byte for byte in tests. Money is rounded to cents here and
//! nowhere else; the engine always works with exact amounts.

use std::io::Write;

use rust_decimal::Decimal;

use crate::core::{Catalog, STORE_NAME};
use crate::types::{BuyerAccount, CheckoutError, Receipt};

/// Horizontal rule around catalog listings and receipts
const RULE: &str = "---------------------------------";

/// Format an amount as dollars and cents
///
/// Rounds to two decimal places (midpoints round to even) and prefixes a
/// dollar sign. This is the only place amounts are rounded.
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// Write the catalog listing with the store banner
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_catalog(output: &mut dyn Write, catalog: &Catalog) -> Result<(), CheckoutError> {
    writeln!(output, "Seller: {}", STORE_NAME)?;
    writeln!(output, "{}", RULE)?;
    for (position, product) in catalog.products().iter().enumerate() {
        writeln!(
            output,
            "{:2}. {:12} | Qty: {:2} | {} | {}",
            position + 1,
            product.name,
            product.quantity,
            format_usd(product.unit_price),
            product.status_label(),
        )?;
    }
    writeln!(output, "{}", RULE)?;

    Ok(())
}

/// Write the blank-line-separated session menu
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_menu(output: &mut dyn Write) -> Result<(), CheckoutError> {
    writeln!(output)?;
    writeln!(
        output,
        "Options: [1] Show inventory  [2] Buy single item  [3] Buy multiple items  [4] Show balance  [5] Quit"
    )?;

    Ok(())
}

/// Write the welcome banner shown once at session start
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_welcome(output: &mut dyn Write, buyer: &BuyerAccount) -> Result<(), CheckoutError> {
    writeln!(
        output,
        "Welcome, {}! Your balance: {}",
        buyer.name,
        format_usd(buyer.balance)
    )?;

    Ok(())
}

/// Write the buyer's current balance line
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_balance(output: &mut dyn Write, buyer: &BuyerAccount) -> Result<(), CheckoutError> {
    writeln!(
        output,
        "{}'s balance: {}",
        buyer.name,
        format_usd(buyer.balance)
    )?;

    Ok(())
}

/// Write the farewell snapshot shown when the buyer quits
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_farewell(
    output: &mut dyn Write,
    catalog: &Catalog,
    buyer: &BuyerAccount,
) -> Result<(), CheckoutError> {
    writeln!(output, "Exiting. Final inventory and balance:")?;
    write_catalog(output, catalog)?;
    writeln!(
        output,
        "{}'s remaining balance: {}",
        buyer.name,
        format_usd(buyer.balance)
    )?;

    Ok(())
}

/// Write the one-line confirmation for a completed single purchase
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_purchase_confirmation(
    output: &mut dyn Write,
    buyer_name: &str,
    receipt: &Receipt,
) -> Result<(), CheckoutError> {
    if let Some(line) = receipt.lines.first() {
        writeln!(
            output,
            "{} purchased {} x {} for {} (discount {}).",
            buyer_name,
            line.quantity,
            line.name,
            format_usd(receipt.total),
            format_usd(receipt.discount),
        )?;
    }

    Ok(())
}

/// Write the itemized receipt for a completed bulk purchase
///
/// The member discount line only appears for members.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_receipt(output: &mut dyn Write, receipt: &Receipt) -> Result<(), CheckoutError> {
    writeln!(output)?;
    writeln!(output, "Purchase successful. Receipt:")?;
    writeln!(output, "{}", RULE)?;
    for line in &receipt.lines {
        writeln!(
            output,
            "{} x {:12} @ {} = {}",
            line.quantity,
            line.name,
            format_usd(line.unit_price),
            format_usd(line.line_total),
        )?;
    }
    writeln!(output, "Subtotal: {}", format_usd(receipt.subtotal))?;
    if receipt.member {
        writeln!(output, "Member discount: -{}", format_usd(receipt.discount))?;
    }
    writeln!(output, "Total paid: {}", format_usd(receipt.total))?;
    writeln!(output, "{}", RULE)?;

    Ok(())
}
