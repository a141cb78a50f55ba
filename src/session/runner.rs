//! Interactive session loop
//!
//! This module provides the menu-driven session that wires the console,
//! the parsers, and the checkout engine together.
//!
//! # Design
//!
//! The Session focuses on orchestration, delegating:
//! - Answer parsing to `io::parse` (pure functions)
//! - Block rendering to `io::render` (catalog, menu, receipts)
//! - Purchase decisions to `CheckoutEngine` (business logic)
//!
//! Every failure below the I/O layer is recoverable: the reason is
//! printed and the session returns to the menu. Only quitting (or the
//! input ending) leaves the loop.

use std::io::{BufRead, Write};

use crate::core::{Basket, CheckoutEngine};
use crate::io::{
    is_cancel, is_yes, parse_item_count, parse_menu_choice, parse_quantity, write_balance,
    write_catalog, write_farewell, write_menu, write_purchase_confirmation, write_receipt,
    write_welcome, Console,
};
use crate::types::{CheckoutError, MenuChoice};

/// Menu-driven checkout session
///
/// Owns the console and the engine for the lifetime of the interaction.
/// All state changes flow through the engine; the session never touches
/// stock or balance directly.
pub struct Session<R, W> {
    console: Console<R, W>,
    engine: CheckoutEngine,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over a console and an engine
    pub fn new(console: Console<R, W>, engine: CheckoutEngine) -> Self {
        Session { console, engine }
    }

    /// Read access to the engine, mainly for inspecting final state
    pub fn engine(&self) -> &CheckoutEngine {
        &self.engine
    }

    /// Run the menu loop until the buyer quits or the input ends
    ///
    /// Prints the welcome banner once, then repeats the menu. An invalid
    /// option prints its reason and shows the menu again. Quitting prints
    /// the farewell snapshot; if the input ends instead, the loop simply
    /// stops.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console itself fails.
    pub fn run(&mut self) -> Result<(), CheckoutError> {
        write_welcome(self.console.output_mut(), self.engine.buyer())?;

        loop {
            write_menu(self.console.output_mut())?;

            let answer = match self.console.prompt("Choose option: ")? {
                Some(answer) => answer,
                None => return Ok(()),
            };

            let choice = match parse_menu_choice(&answer) {
                Ok(choice) => choice,
                Err(e) => {
                    self.console.line(&e.to_string())?;
                    continue;
                }
            };

            match choice {
                MenuChoice::ShowCatalog => {
                    write_catalog(self.console.output_mut(), self.engine.catalog())?;
                }
                MenuChoice::BuySingle => self.buy_single()?,
                MenuChoice::BuyBulk => self.buy_bulk()?,
                MenuChoice::ShowBalance => {
                    write_balance(self.console.output_mut(), self.engine.buyer())?;
                }
                MenuChoice::Quit => {
                    write_farewell(
                        self.console.output_mut(),
                        self.engine.catalog(),
                        self.engine.buyer(),
                    )?;
                    return Ok(());
                }
            }
        }
    }

    /// One pass of the single-item purchase flow
    ///
    /// Shows the catalog, asks for an item, a quantity, and membership,
    /// then hands the purchase to the engine. Cancelling returns to the
    /// menu silently; every rejection prints its reason first.
    fn buy_single(&mut self) -> Result<(), CheckoutError> {
        write_catalog(self.console.output_mut(), self.engine.catalog())?;

        let reference = match self
            .console
            .prompt("Enter item number or name to buy (or 'c' to cancel): ")?
        {
            Some(answer) if !is_cancel(&answer) => answer,
            _ => return Ok(()),
        };

        // Resolve up front so the quantity prompt can name the product
        let name = match self.engine.catalog().resolve(&reference) {
            Some(product) => product.name.clone(),
            None => {
                let reason = CheckoutError::item_not_found(&reference);
                self.console.line(&reason.to_string())?;
                return Ok(());
            }
        };

        let quantity_answer = match self
            .console
            .prompt(&format!("Enter quantity of '{}' to buy: ", name))?
        {
            Some(answer) => answer,
            None => return Ok(()),
        };
        let quantity = match parse_quantity(&quantity_answer) {
            Ok(quantity) => quantity,
            Err(e) => {
                self.console.line(&e.to_string())?;
                return Ok(());
            }
        };

        // Membership is asked before the stock and funds checks run
        let member = match self.console.prompt("Are you a member? (y/N): ")? {
            Some(answer) => is_yes(&answer),
            None => return Ok(()),
        };

        let buyer_name = self.engine.buyer().name.clone();
        match self.engine.purchase(&name, quantity, member) {
            Ok(receipt) => {
                write_purchase_confirmation(self.console.output_mut(), &buyer_name, &receipt)?;
            }
            Err(e) => self.console.line(&e.to_string())?,
        }

        Ok(())
    }

    /// One pass of the bulk purchase flow
    ///
    /// Asks how many distinct items to buy, collects that many
    /// selections, asks the membership question once, and hands the
    /// basket to the engine for an atomic commit. A rejected commit
    /// reports its reason with the transaction explicitly cancelled.
    fn buy_bulk(&mut self) -> Result<(), CheckoutError> {
        write_catalog(self.console.output_mut(), self.engine.catalog())?;

        let count_answer = match self
            .console
            .prompt("How many different items do you want to buy? (1-4): ")?
        {
            Some(answer) => answer,
            None => return Ok(()),
        };
        let count = match parse_item_count(&count_answer) {
            Ok(count) => count,
            Err(e) => {
                self.console.line(&e.to_string())?;
                return Ok(());
            }
        };

        let basket = match self.collect_selections(count)? {
            Some(basket) => basket,
            None => return Ok(()),
        };

        let member = match self.console.prompt("Are you a member? (y/N): ")? {
            Some(answer) => is_yes(&answer),
            None => return Ok(()),
        };

        match self.engine.commit_basket(&basket, member) {
            Ok(receipt) => write_receipt(self.console.output_mut(), &receipt)?,
            Err(e) => {
                self.console
                    .line(&format!("{} Transaction cancelled.", e))?;
            }
        }

        Ok(())
    }

    /// Collect the requested number of distinct selections
    ///
    /// Returns `Ok(None)` when the buyer cancels or an answer is
    /// rejected; the reason has been printed and the whole basket is
    /// discarded.
    fn collect_selections(&mut self, count: usize) -> Result<Option<Basket>, CheckoutError> {
        let mut basket = Basket::new();

        for ordinal in 1..=count {
            let item_prompt = format!(
                "[{}/{}] Enter item number or name (or 'c' to cancel): ",
                ordinal, count
            );
            let reference = match self.console.prompt(&item_prompt)? {
                Some(answer) => answer,
                None => return Ok(None),
            };
            if is_cancel(&reference) {
                self.console.line("Bulk purchase cancelled.")?;
                return Ok(None);
            }

            let product = match self.engine.catalog().resolve(&reference) {
                Some(product) => product.clone(),
                None => {
                    let reason = CheckoutError::item_not_found(&reference);
                    self.console.line(&reason.to_string())?;
                    return Ok(None);
                }
            };

            // Duplicates are rejected before the quantity is even asked
            if basket.contains(&product) {
                let reason = CheckoutError::duplicate_selection(&product.name);
                self.console.line(&reason.to_string())?;
                return Ok(None);
            }

            let quantity_answer = match self
                .console
                .prompt(&format!("Enter quantity of '{}' to buy: ", product.name))?
            {
                Some(answer) => answer,
                None => return Ok(None),
            };
            let quantity = match parse_quantity(&quantity_answer) {
                Ok(quantity) => quantity,
                Err(e) => {
                    self.console.line(&e.to_string())?;
                    return Ok(None);
                }
            };

            if let Err(e) = basket.push(&product, quantity) {
                self.console.line(&e.to_string())?;
                return Ok(None);
            }
        }

        Ok(Some(basket))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_transcript(input: &str) -> String {
        let mut output = Vec::new();
        {
            let console = Console::new(Cursor::new(input.to_string()), &mut output);
            let mut session = Session::new(console, CheckoutEngine::default());
            session.run().unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_quit_prints_farewell_snapshot() {
        let transcript = run_transcript("5\n");

        assert!(transcript.starts_with("Welcome, Guest! Your balance: $2000.00\n"));
        assert!(transcript.contains("Choose option: Exiting. Final inventory and balance:\n"));
        assert!(transcript.contains("Seller: Aung Store\n"));
        assert!(transcript.ends_with("Guest's remaining balance: $2000.00\n"));
    }

    #[test]
    fn test_end_of_input_ends_without_snapshot() {
        let transcript = run_transcript("");

        assert_eq!(
            transcript,
            concat!(
                "Welcome, Guest! Your balance: $2000.00\n",
                "\n",
                "Options: [1] Show inventory  [2] Buy single item  [3] Buy multiple items  [4] Show balance  [5] Quit\n",
                "Choose option: "
            )
        );
    }

    #[test]
    fn test_invalid_option_shows_menu_again() {
        let transcript = run_transcript("9\n5\n");

        assert!(transcript.contains("Choose option: Invalid option. Choose 1-5.\n"));
        assert_eq!(transcript.matches("Options: ").count(), 2);
        assert!(transcript.contains("Exiting. Final inventory and balance:\n"));
    }

    #[test]
    fn test_show_inventory_option() {
        let transcript = run_transcript("1\n5\n");

        // Once for option 1, once inside the farewell snapshot
        assert_eq!(transcript.matches("Seller: Aung Store\n").count(), 2);
        assert!(transcript.contains(" 3. Mouse        | Qty: 10 | $19.99 | In Stock\n"));
    }

    #[test]
    fn test_show_balance_option() {
        let transcript = run_transcript("4\n5\n");

        assert!(transcript.contains("Choose option: Guest's balance: $2000.00\n"));
    }

    #[test]
    fn test_single_purchase_cancel_is_silent() {
        let transcript = run_transcript("2\nc\n5\n");

        assert!(transcript.contains("Enter item number or name to buy (or 'c' to cancel): \n"));
        assert!(!transcript.contains("cancelled"));
    }
}
