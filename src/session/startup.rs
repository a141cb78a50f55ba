//! Session startup interview
//!
//! Builds the buyer account before the menu loop starts. Name and balance
//! come from command-line flags when given; otherwise they are prompted
//! for, with quiet fallbacks to the defaults for empty or unusable
//! answers.

use std::io::{BufRead, Write};

use crate::cli::CliArgs;
use crate::io::{parse_balance, Console};
use crate::types::{default_starting_balance, BuyerAccount, CheckoutError, DEFAULT_BUYER_NAME};

/// Collect the buyer account for this session
///
/// Prompts for name, password, and starting balance unless command-line
/// flags already supply them. The password is read and discarded; nothing
/// checks it. End of input during any prompt falls back to the default
/// for that field.
///
/// # Errors
///
/// Returns an error only if the console itself fails.
pub fn collect_buyer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    args: &CliArgs,
) -> Result<BuyerAccount, CheckoutError> {
    let name = match &args.name {
        Some(name) => normalize_name(name),
        None => {
            let answer = console.prompt("Your name: ")?.unwrap_or_default();
            console.prompt("Your Password: ")?;
            normalize_name(&answer)
        }
    };

    let balance = match args.balance {
        Some(balance) => balance,
        None => {
            let answer = console
                .prompt("Starting balance (e.g. 2000): ")?
                .unwrap_or_default();
            parse_balance(&answer).unwrap_or_else(default_starting_balance)
        }
    };

    Ok(BuyerAccount::new(&name, balance))
}

/// Empty names fall back to the default buyer name
fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_BUYER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
