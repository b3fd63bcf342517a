//! Service layer for Cashbook
//!
//! The service layer provides business logic on top of the storage layer:
//! the CSV import pipeline, the balance computation and the read-only views
//! used by the CLI.

pub mod balance;
pub mod category;
pub mod import;
pub mod transaction;

pub use balance::BalanceService;
pub use category::{CategoryService, CategoryUsage};
pub use import::{CsvTransaction, ImportService, ParsedCsv};
pub use transaction::{TransactionListing, TransactionService};
