//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions, categories and balances
//! for terminal display.

pub mod balance;
pub mod category;
pub mod transaction;

pub use balance::format_balance;
pub use category::format_category_list;
pub use transaction::{format_transaction_listing, format_transaction_register};
