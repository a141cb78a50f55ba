//! Buyer account types for the checkout engine
//!
//! This module defines the BuyerAccount structure holding the session's
//! display name and cash balance. The balance is never a process-wide
//! variable; the account object is owned by the engine and mutated only by
//! committed sales.

use crate::types::CheckoutError;
use rust_decimal::Decimal;

/// Name used when the startup interview gets an empty buyer name
pub const DEFAULT_BUYER_NAME: &str = "Guest";

/// Balance used when the startup interview gets an empty or unparseable
/// starting balance
pub fn default_starting_balance() -> Decimal {
    Decimal::new(2000, 0)
}

/// Buyer session state
///
/// Created once at startup and owned by the engine for the process
/// lifetime. No persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct BuyerAccount {
    /// Display name shown in confirmations and balance lines
    pub name: String,

    /// Cash balance
    ///
    /// Non-negative; decreases by the final charge of each committed sale.
    pub balance: Decimal,
}

impl BuyerAccount {
    /// Create a new buyer account
    pub fn new(name: &str, balance: Decimal) -> Self {
        BuyerAccount {
            name: name.to_string(),
            balance,
        }
    }

    /// Debit the final charge from the balance
    ///
    /// Validates that sufficient funds exist before mutating, and uses
    /// checked arithmetic so the balance can never go negative.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount exceeds the current balance
    /// - Subtracting the amount would underflow
    pub fn debit(&mut self, amount: Decimal) -> Result<(), CheckoutError> {
        if self.balance < amount {
            return Err(CheckoutError::insufficient_funds(amount, self.balance));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| CheckoutError::arithmetic_underflow("balance debit"))?;

        self.balance = new_balance;

        Ok(())
    }
}

impl Default for BuyerAccount {
    fn default() -> Self {
        BuyerAccount::new(DEFAULT_BUYER_NAME, default_starting_balance())
    }
}
