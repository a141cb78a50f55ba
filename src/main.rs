//! Rust Checkout Engine CLI
//!
//! Command-line interface for the interactive checkout session.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --name Ana
//! cargo run -- --name Ana --balance 2500
//! ```
//!
//! The program interviews the buyer (unless flags supply the answers),
//! seeds the catalog, and runs the menu loop on stdin/stdout until the
//! buyer quits or the input ends.
//!
//! # Exit Codes
//!
//! - 0: Success (the buyer quit, or the input ended)
//! - 1: Error (the interactive stream failed)

use rust_checkout_engine::cli;
use rust_checkout_engine::core::{Catalog, CheckoutEngine};
use rust_checkout_engine::io::Console;
use rust_checkout_engine::session::{collect_buyer, Session};
use std::io;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    // Interview the buyer, then run the menu loop over the same console
    let result = collect_buyer(&mut console, &args).and_then(|buyer| {
        let engine = CheckoutEngine::new(Catalog::seeded(), buyer);
        Session::new(console, engine).run()
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
