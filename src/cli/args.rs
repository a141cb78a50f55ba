use clap::Parser;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Interactive retail checkout session over a seeded catalog
#[derive(Parser, Debug)]
#[command(name = "checkout-engine")]
#[command(about = "Interactive retail checkout session over a seeded catalog", long_about = None)]
pub struct CliArgs {
    /// Buyer display name
    #[arg(
        long = "name",
        value_name = "NAME",
        help = "Buyer name (skips the name prompt)"
    )]
    pub name: Option<String>,

    /// Starting balance in dollars
    #[arg(
        long = "balance",
        value_name = "AMOUNT",
        value_parser = parse_balance_arg,
        help = "Starting balance (skips the balance prompt; must not be negative)"
    )]
    pub balance: Option<Decimal>,
}

/// Parse and validate a --balance value
///
/// Unlike the interactive balance prompt, which quietly falls back to the
/// default, an explicit flag value must be a valid non-negative amount.
fn parse_balance_arg(raw: &str) -> Result<Decimal, String> {
    let balance = Decimal::from_str(raw.trim())
        .map_err(|_| format!("'{}' is not a valid amount", raw))?;

    if balance.is_sign_negative() {
        return Err(format!("balance must not be negative, got {}", balance));
    }

    Ok(balance)
}
