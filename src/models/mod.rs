//! Core data models for Cashbook
//!
//! Transactions, the categories they belong to, and the balance summary
//! computed over them.

pub mod balance;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use balance::Balance;
pub use category::{Category, CategoryValidationError};
pub use ids::{CategoryId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{NewTransaction, Transaction, TransactionType, UnknownTransactionType};
