//! Checkout engine
//!
//! This module provides the CheckoutEngine that performs every purchase
//! against the catalog and the buyer account it owns.
//!
//! The engine enforces business rules such as:
//! - A fixed validation order for single purchases (existence, stock
//!   presence, quantity positivity, stock sufficiency, funds)
//! - Basket validation against live stock levels
//! - Atomic basket commits (all selections succeed or none do)
//! - Exact money arithmetic, with rounding deferred to the display layer
//!
//! Validation is always completed before any mutation, so a failed
//! purchase leaves the catalog and the buyer balance untouched.

use rust_decimal::Decimal;

use crate::core::basket::Basket;
use crate::core::catalog::Catalog;
use crate::types::{member_discount_rate, BuyerAccount, CheckoutError, Receipt, ReceiptLine};

/// Checkout engine
///
/// Owns the catalog and the single buyer account for the session and
/// performs all stock and balance mutations. Callers collect input and
/// render output; the engine decides whether a purchase happens.
pub struct CheckoutEngine {
    catalog: Catalog,
    buyer: BuyerAccount,
}

impl CheckoutEngine {
    /// Create a new CheckoutEngine
    ///
    /// # Arguments
    ///
    /// * `catalog` - The product catalog to sell from
    /// * `buyer` - The buyer account to charge
    ///
    /// # Returns
    ///
    /// A new CheckoutEngine ready to process purchases
    pub fn new(catalog: Catalog, buyer: BuyerAccount) -> Self {
        CheckoutEngine { catalog, buyer }
    }

    /// Read access to the catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read access to the buyer account
    pub fn buyer(&self) -> &BuyerAccount {
        &self.buyer
    }

    /// Purchase a quantity of a single product
    ///
    /// Resolves the reference like any interactive item reference (1-based
    /// position for all-digit input, then case-insensitive name), runs the
    /// checks in a fixed order, and applies the member discount to the
    /// line total when requested. The funds check uses the exact
    /// discounted total, never a rounded one.
    ///
    /// # Arguments
    ///
    /// * `reference` - Item number or name
    /// * `requested` - Number of units to buy
    /// * `member` - Whether the buyer claims membership
    ///
    /// # Returns
    ///
    /// * `Ok(Receipt)` describing the completed purchase
    /// * `Err(CheckoutError)` if any check failed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The reference matches no product
    /// - The product is out of stock
    /// - The requested quantity is below one
    /// - The requested quantity exceeds the available stock
    /// - The balance does not cover the discounted total
    pub fn purchase(
        &mut self,
        reference: &str,
        requested: i64,
        member: bool,
    ) -> Result<Receipt, CheckoutError> {
        let product = self
            .catalog
            .resolve(reference)
            .ok_or_else(|| CheckoutError::item_not_found(reference))?;

        let name = product.name.clone();
        let available = product.quantity;
        let unit_price = product.unit_price;

        if available == 0 {
            return Err(CheckoutError::out_of_stock(&name));
        }

        if requested < 1 {
            return Err(CheckoutError::non_positive_quantity(requested));
        }

        if requested > i64::from(available) {
            return Err(CheckoutError::insufficient_stock(&name, available, requested));
        }

        let line_total = Decimal::from(requested)
            .checked_mul(unit_price)
            .ok_or_else(|| CheckoutError::arithmetic_overflow("line total"))?;
        let (discount, total) = Self::apply_discount(line_total, member)?;

        if self.buyer.balance < total {
            return Err(CheckoutError::insufficient_funds(total, self.buyer.balance));
        }

        // Complete the sale
        self.decrement_stock(&name, requested)?;
        self.buyer.debit(total)?;

        Ok(Receipt {
            lines: vec![ReceiptLine {
                name,
                quantity: requested,
                unit_price,
                line_total,
            }],
            subtotal: line_total,
            discount,
            total,
            member,
        })
    }

    /// Check every selection against live stock levels
    ///
    /// Read-only. Selections are checked in order and the first shortfall
    /// is reported.
    ///
    /// # Arguments
    ///
    /// * `basket` - The collected selections to check
    ///
    /// # Returns
    ///
    /// * `Ok(())` if every selection is covered by current stock
    /// * `Err(CheckoutError)` for the first selection that is not
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A selected product no longer exists in the catalog
    /// - A selection's quantity exceeds the product's live stock
    pub fn validate_basket(&self, basket: &Basket) -> Result<(), CheckoutError> {
        for selection in basket.selections() {
            let product = self
                .catalog
                .find_by_name(&selection.key)
                .ok_or_else(|| CheckoutError::item_not_found(&selection.name))?;

            if selection.quantity > i64::from(product.quantity) {
                return Err(CheckoutError::insufficient_stock(
                    &product.name,
                    product.quantity,
                    selection.quantity,
                ));
            }
        }

        Ok(())
    }

    /// Commit a basket as one atomic transaction
    ///
    /// Re-checks stock against the live catalog, prices the basket at live
    /// unit prices, applies the member discount to the aggregate subtotal,
    /// and checks funds against the exact discounted total. Only when
    /// every check has passed are the stock decrements and the balance
    /// debit applied.
    ///
    /// # Arguments
    ///
    /// * `basket` - The collected selections to commit
    /// * `member` - Whether the buyer claims membership
    ///
    /// # Returns
    ///
    /// * `Ok(Receipt)` itemizing the committed transaction
    /// * `Err(CheckoutError)` if any check failed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The basket is empty
    /// - Any selection exceeds live stock
    /// - The balance does not cover the discounted total
    ///
    /// On any error the catalog and balance are left exactly as they were.
    pub fn commit_basket(
        &mut self,
        basket: &Basket,
        member: bool,
    ) -> Result<Receipt, CheckoutError> {
        if basket.is_empty() {
            return Err(CheckoutError::EmptyBasket);
        }

        self.validate_basket(basket)?;

        let receipt = self.quote_basket(basket, member)?;

        if self.buyer.balance < receipt.total {
            return Err(CheckoutError::insufficient_funds(
                receipt.total,
                self.buyer.balance,
            ));
        }

        // Complete the sale atomically
        for selection in basket.selections() {
            self.decrement_stock(&selection.key, selection.quantity)?;
        }
        self.buyer.debit(receipt.total)?;

        Ok(receipt)
    }

    /// Price a basket at live catalog prices without mutating anything
    ///
    /// Produces the itemized receipt the basket would commit to: one line
    /// per selection at the live unit price, the exact subtotal, and the
    /// discounted total. The catalog and balance are not touched.
    ///
    /// # Arguments
    ///
    /// * `basket` - The collected selections to price
    /// * `member` - Whether the buyer claims membership
    ///
    /// # Returns
    ///
    /// * `Ok(Receipt)` itemizing the quoted transaction
    /// * `Err(CheckoutError)` if a selection cannot be priced
    ///
    /// # Errors
    ///
    /// Returns an error if a selected product no longer exists in the
    /// catalog, or if a total would overflow.
    pub fn quote_basket(&self, basket: &Basket, member: bool) -> Result<Receipt, CheckoutError> {
        let mut lines = Vec::with_capacity(basket.len());
        let mut subtotal = Decimal::ZERO;

        for selection in basket.selections() {
            let product = self
                .catalog
                .find_by_name(&selection.key)
                .ok_or_else(|| CheckoutError::item_not_found(&selection.name))?;

            let line_total = Decimal::from(selection.quantity)
                .checked_mul(product.unit_price)
                .ok_or_else(|| CheckoutError::arithmetic_overflow("line total"))?;
            subtotal = subtotal
                .checked_add(line_total)
                .ok_or_else(|| CheckoutError::arithmetic_overflow("subtotal"))?;

            lines.push(ReceiptLine {
                name: product.name.clone(),
                quantity: selection.quantity,
                unit_price: product.unit_price,
                line_total,
            });
        }

        let (discount, total) = Self::apply_discount(subtotal, member)?;

        Ok(Receipt {
            lines,
            subtotal,
            discount,
            total,
            member,
        })
    }

    /// Split an amount into discount and payable total
    fn apply_discount(amount: Decimal, member: bool) -> Result<(Decimal, Decimal), CheckoutError> {
        let discount = if member {
            amount
                .checked_mul(member_discount_rate())
                .ok_or_else(|| CheckoutError::arithmetic_overflow("member discount"))?
        } else {
            Decimal::ZERO
        };

        let total = amount
            .checked_sub(discount)
            .ok_or_else(|| CheckoutError::arithmetic_underflow("discounted total"))?;

        Ok((discount, total))
    }

    /// Decrement a product's stock with checked arithmetic
    fn decrement_stock(&mut self, name: &str, quantity: i64) -> Result<(), CheckoutError> {
        let product = self
            .catalog
            .find_by_name_mut(name)
            .ok_or_else(|| CheckoutError::item_not_found(name))?;

        product.quantity = i64::from(product.quantity)
            .checked_sub(quantity)
            .filter(|remaining| *remaining >= 0)
            .and_then(|remaining| u32::try_from(remaining).ok())
            .ok_or_else(|| CheckoutError::arithmetic_underflow("stock decrement"))?;

        Ok(())
    }
}

impl Default for CheckoutEngine {
    /// Engine over the seeded catalog and the default buyer
    fn default() -> Self {
        Self::new(Catalog::seeded(), BuyerAccount::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;
    use rstest::rstest;

    fn seeded_engine() -> CheckoutEngine {
        CheckoutEngine::default()
    }

    fn stock_of(engine: &CheckoutEngine, name: &str) -> u32 {
        engine.catalog().find_by_name(name).unwrap().quantity
    }

    fn basket_of(engine: &CheckoutEngine, picks: &[(&str, i64)]) -> Basket {
        let mut basket = Basket::new();
        for (name, quantity) in picks {
            let product = engine.catalog().find_by_name(name).unwrap().clone();
            basket.push(&product, *quantity).unwrap();
        }
        basket
    }

    #[test]
    fn test_default_engine_boots_seeded_state() {
        let engine = seeded_engine();

        assert_eq!(engine.catalog().len(), 4);
        assert_eq!(engine.buyer().name, "Guest");
        assert_eq!(engine.buyer().balance, Decimal::new(2000, 0));
    }

    #[test]
    fn test_purchase_three_mice() {
        let mut engine = seeded_engine();

        let receipt = engine.purchase("Mouse", 3, false).unwrap();

        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.lines[0].name, "Mouse");
        assert_eq!(receipt.lines[0].quantity, 3);
        assert_eq!(receipt.subtotal, Decimal::new(5997, 2));
        assert_eq!(receipt.discount, Decimal::ZERO);
        assert_eq!(receipt.total, Decimal::new(5997, 2));

        assert_eq!(engine.buyer().balance, Decimal::new(194003, 2));
        assert_eq!(stock_of(&engine, "Mouse"), 7);
    }

    #[test]
    fn test_purchase_by_index_reference() {
        let mut engine = seeded_engine();

        let receipt = engine.purchase("3", 2, false).unwrap();

        assert_eq!(receipt.lines[0].name, "Mouse");
        assert_eq!(stock_of(&engine, "Mouse"), 8);
    }

    #[test]
    fn test_purchase_member_discount_is_exact() {
        let mut engine = seeded_engine();

        // 299.99 * 0.10 = 29.999, never rounded inside the engine
        let receipt = engine.purchase("Smartphone", 1, true).unwrap();

        assert_eq!(receipt.subtotal, Decimal::new(29999, 2));
        assert_eq!(receipt.discount, Decimal::new(29999, 3));
        assert_eq!(receipt.total, Decimal::new(269991, 3));
        assert_eq!(engine.buyer().balance, Decimal::new(1730009, 3));
    }

    #[test]
    fn test_purchase_unknown_item_leaves_state_unchanged() {
        let mut engine = seeded_engine();

        let result = engine.purchase("Webcam", 1, false);

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::ItemNotFound { .. }
        ));
        assert_eq!(engine.buyer().balance, Decimal::new(2000, 0));
        assert_eq!(stock_of(&engine, "Mouse"), 10);
    }

    #[test]
    fn test_purchase_out_of_stock_reported_before_quantity() {
        let mut catalog = Catalog::seeded();
        catalog
            .add_product(Product::new("Webcam", 0, Decimal::new(8999, 2)))
            .unwrap();
        let mut engine = CheckoutEngine::new(catalog, BuyerAccount::default());

        // A zero quantity against an out-of-stock item reports the stock
        // state, not the quantity
        let result = engine.purchase("Webcam", 0, false);

        assert!(matches!(result.unwrap_err(), CheckoutError::OutOfStock { .. }));
    }

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-5)]
    fn test_purchase_rejects_non_positive_quantity(#[case] requested: i64) {
        let mut engine = seeded_engine();

        let result = engine.purchase("Mouse", requested, false);

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::NonPositiveQuantity { .. }
        ));
        assert_eq!(stock_of(&engine, "Mouse"), 10);
    }

    #[test]
    fn test_purchase_rejects_request_beyond_stock() {
        let mut engine = seeded_engine();

        let result = engine.purchase("Mouse", 11, false);

        match result.unwrap_err() {
            CheckoutError::InsufficientStock {
                name,
                available,
                requested,
            } => {
                assert_eq!(name, "Mouse");
                assert_eq!(available, 10);
                assert_eq!(requested, 11);
            }
            other => panic!("Expected InsufficientStock, got {:?}", other),
        }
        assert_eq!(stock_of(&engine, "Mouse"), 10);
        assert_eq!(engine.buyer().balance, Decimal::new(2000, 0));
    }

    #[test]
    fn test_purchase_insufficient_funds_leaves_state_unchanged() {
        let poor_buyer = BuyerAccount::new("Ana", Decimal::new(10, 0));
        let mut engine = CheckoutEngine::new(Catalog::seeded(), poor_buyer);

        let result = engine.purchase("Mouse", 1, false);

        match result.unwrap_err() {
            CheckoutError::InsufficientFunds { needed, available } => {
                assert_eq!(needed, Decimal::new(1999, 2));
                assert_eq!(available, Decimal::new(10, 0));
            }
            other => panic!("Expected InsufficientFunds, got {:?}", other),
        }
        // Catalog and balance should remain unchanged
        assert_eq!(stock_of(&engine, "Mouse"), 10);
        assert_eq!(engine.buyer().balance, Decimal::new(10, 0));
    }

    #[test]
    fn test_purchase_funds_check_uses_unrounded_total() {
        // Exact total is 269.991; a balance of 269.99 covers the rounded
        // display price but not the exact one
        let buyer = BuyerAccount::new("Ana", Decimal::new(26999, 2));
        let mut engine = CheckoutEngine::new(Catalog::seeded(), buyer);

        let result = engine.purchase("Smartphone", 1, true);

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::InsufficientFunds { .. }
        ));
        assert_eq!(stock_of(&engine, "Smartphone"), 5);
    }

    #[test]
    fn test_validate_basket_accepts_covered_selections() {
        let engine = seeded_engine();
        let basket = basket_of(&engine, &[("Mouse", 10), ("Keyboard", 5)]);

        assert!(engine.validate_basket(&basket).is_ok());
    }

    #[test]
    fn test_validate_basket_reports_first_shortfall() {
        let engine = seeded_engine();
        let basket = basket_of(&engine, &[("Computer", 3), ("Mouse", 99)]);

        match engine.validate_basket(&basket).unwrap_err() {
            CheckoutError::InsufficientStock {
                name, available, ..
            } => {
                assert_eq!(name, "Computer");
                assert_eq!(available, 2);
            }
            other => panic!("Expected InsufficientStock, got {:?}", other),
        }
    }

    #[test]
    fn test_quote_basket_prices_without_mutation() {
        let engine = seeded_engine();
        let basket = basket_of(&engine, &[("Smartphone", 2), ("Keyboard", 1)]);

        let quote = engine.quote_basket(&basket, true).unwrap();

        assert_eq!(quote.subtotal, Decimal::new(64997, 2));
        assert_eq!(quote.total, Decimal::new(584973, 3));
        // Quoting commits nothing
        assert_eq!(stock_of(&engine, "Smartphone"), 5);
        assert_eq!(stock_of(&engine, "Keyboard"), 5);
        assert_eq!(engine.buyer().balance, Decimal::new(2000, 0));
    }

    #[test]
    fn test_commit_basket_rejects_empty_basket() {
        let mut engine = seeded_engine();

        let result = engine.commit_basket(&Basket::new(), false);

        assert!(matches!(result.unwrap_err(), CheckoutError::EmptyBasket));
    }

    #[test]
    fn test_commit_basket_member_receipt_is_exact() {
        let mut engine = seeded_engine();
        // 2 x 299.99 + 1 x 49.99 = 649.97
        let basket = basket_of(&engine, &[("Smartphone", 2), ("Keyboard", 1)]);

        let receipt = engine.commit_basket(&basket, true).unwrap();

        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].line_total, Decimal::new(59998, 2));
        assert_eq!(receipt.lines[1].line_total, Decimal::new(4999, 2));
        assert_eq!(receipt.subtotal, Decimal::new(64997, 2));
        assert_eq!(receipt.discount, Decimal::new(64997, 3));
        assert_eq!(receipt.total, Decimal::new(584973, 3));
        assert!(receipt.member);

        assert_eq!(engine.buyer().balance, Decimal::new(1415027, 3));
        assert_eq!(stock_of(&engine, "Smartphone"), 3);
        assert_eq!(stock_of(&engine, "Keyboard"), 4);
    }

    #[test]
    fn test_commit_basket_non_member_pays_subtotal() {
        let mut engine = seeded_engine();
        let basket = basket_of(&engine, &[("Mouse", 2), ("Keyboard", 1)]);

        let receipt = engine.commit_basket(&basket, false).unwrap();

        assert_eq!(receipt.discount, Decimal::ZERO);
        assert_eq!(receipt.total, receipt.subtotal);
        assert_eq!(receipt.total, Decimal::new(8997, 2));
    }

    #[test]
    fn test_member_discount_applies_to_aggregate() {
        let mut engine = seeded_engine();
        let basket = basket_of(&engine, &[("Mouse", 1), ("Keyboard", 1)]);

        let receipt = engine.commit_basket(&basket, true).unwrap();

        // (19.99 + 49.99) * 0.10 = 6.998
        assert_eq!(receipt.subtotal, Decimal::new(6998, 2));
        assert_eq!(receipt.discount, Decimal::new(6998, 3));
        assert_eq!(receipt.total, Decimal::new(62982, 3));
    }

    #[test]
    fn test_commit_basket_stock_failure_is_atomic() {
        let mut engine = seeded_engine();
        let basket = basket_of(&engine, &[("Mouse", 5), ("Computer", 3)]);

        let result = engine.commit_basket(&basket, false);

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::InsufficientStock { .. }
        ));
        // No selection may be applied, not even the covered one
        assert_eq!(stock_of(&engine, "Mouse"), 10);
        assert_eq!(stock_of(&engine, "Computer"), 2);
        assert_eq!(engine.buyer().balance, Decimal::new(2000, 0));
    }

    #[test]
    fn test_commit_basket_funds_failure_is_atomic() {
        let mut engine = seeded_engine();
        // 2 x 850.50 + 1 x 299.99 = 2000.99, just over the default balance
        let basket = basket_of(&engine, &[("Computer", 2), ("Smartphone", 1)]);

        let result = engine.commit_basket(&basket, false);

        match result.unwrap_err() {
            CheckoutError::InsufficientFunds { needed, available } => {
                assert_eq!(needed, Decimal::new(200099, 2));
                assert_eq!(available, Decimal::new(2000, 0));
            }
            other => panic!("Expected InsufficientFunds, got {:?}", other),
        }
        assert_eq!(stock_of(&engine, "Computer"), 2);
        assert_eq!(stock_of(&engine, "Smartphone"), 5);
        assert_eq!(engine.buyer().balance, Decimal::new(2000, 0));
    }

    #[test]
    fn test_commit_basket_rechecks_live_stock() {
        let mut engine = seeded_engine();
        let basket = basket_of(&engine, &[("Computer", 2)]);

        // Stock moves after the basket was collected
        engine.purchase("Computer", 1, false).unwrap();
        let balance_before = engine.buyer().balance;

        let result = engine.commit_basket(&basket, false);

        match result.unwrap_err() {
            CheckoutError::InsufficientStock {
                name,
                available,
                requested,
            } => {
                assert_eq!(name, "Computer");
                assert_eq!(available, 1);
                assert_eq!(requested, 2);
            }
            other => panic!("Expected InsufficientStock, got {:?}", other),
        }
        assert_eq!(stock_of(&engine, "Computer"), 1);
        assert_eq!(engine.buyer().balance, balance_before);
    }
}
