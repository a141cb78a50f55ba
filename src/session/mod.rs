//! Interactive session module
//!
//! # Components
//!
//! - `startup` - The pre-loop interview that builds the buyer account
//! - `runner` - The menu loop and the two purchase flows

pub mod runner;
pub mod startup;

pub use runner::Session;
pub use startup::collect_buyer;
