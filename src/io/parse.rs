//! Interactive input parsing
//!
//! This module centralizes the conversion of raw prompt answers into
//! domain values:
//! - Menu choice parsing
//! - Quantity and item count parsing
//! - Membership and cancel token recognition
//! - Starting balance parsing
//!
//! All functions are pure (no I/O) for easy testing. Inputs are trimmed
//! before interpretation, so surrounding whitespace never changes the
//! outcome.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::core::{MAX_BASKET_SELECTIONS, MIN_BASKET_SELECTIONS};
use crate::types::{CheckoutError, MenuChoice};

/// Parse a menu answer into a MenuChoice
///
/// Only the exact strings "1" through "5" (after trimming) are accepted.
///
/// # Errors
///
/// Returns an error carrying the raw input for anything else.
pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, CheckoutError> {
    match input.trim() {
        "1" => Ok(MenuChoice::ShowCatalog),
        "2" => Ok(MenuChoice::BuySingle),
        "3" => Ok(MenuChoice::BuyBulk),
        "4" => Ok(MenuChoice::ShowBalance),
        "5" => Ok(MenuChoice::Quit),
        _ => Err(CheckoutError::invalid_menu_choice(input)),
    }
}

/// Parse a quantity answer
///
/// Accepts any integer, including zero and negatives; range checks are a
/// purchase concern, not a parsing one.
///
/// # Errors
///
/// Returns an error if the input is not an integer.
pub fn parse_quantity(input: &str) -> Result<i64, CheckoutError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| CheckoutError::invalid_quantity(input))
}

/// Parse the distinct item count for a bulk purchase
///
/// # Errors
///
/// Returns an error if the input is not an integer, or if the parsed
/// count falls outside the allowed selection range.
pub fn parse_item_count(input: &str) -> Result<usize, CheckoutError> {
    let count = input
        .trim()
        .parse::<i64>()
        .map_err(|_| CheckoutError::invalid_item_count(input))?;

    if count < MIN_BASKET_SELECTIONS as i64 || count > MAX_BASKET_SELECTIONS as i64 {
        return Err(CheckoutError::item_count_out_of_range(count));
    }

    Ok(count as usize)
}

/// Whether an answer affirms membership
///
/// Only a lone "y" (any case) counts; everything else, including "yes",
/// is a no.
pub fn is_yes(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Whether an answer is the cancel token
pub fn is_cancel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("c")
}

/// Parse a starting balance answer
///
/// Returns `None` for empty, unparseable, or negative input; callers fall
/// back to the default balance rather than treating this as an error.
pub fn parse_balance(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .ok()
        .filter(|balance| !balance.is_sign_negative())
}
