//! Cashbook - import transaction CSV files and report balances
//!
//! This library imports `title,type,value,category` CSV files into a local
//! JSON store, creating categories on first sight, and computes income,
//! outcome and net total over everything stored.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money, balance)
//! - `storage`: Store traits and their JSON file implementations
//! - `services`: Import pipeline, balance computation and listings
//! - `display`: Terminal formatting
//! - `cli`: Command handlers used by the `cashbook` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use cashbook::config::CashbookPaths;
//! use cashbook::services::{BalanceService, ImportService};
//! use cashbook::storage::Storage;
//!
//! let mut storage = Storage::new(CashbookPaths::new()?)?;
//! storage.load_all()?;
//! let imported = ImportService::new(&storage).import_file("statement.csv")?;
//! let balance = BalanceService::new(&storage).get_balance()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CashbookError, CashbookResult};
