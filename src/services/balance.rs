//! Balance service
//!
//! Computes income, outcome and net total over every stored transaction at
//! call time. Nothing is cached.

use crate::error::CashbookResult;
use crate::models::Balance;
use crate::storage::{Storage, TransactionStore};

/// Service computing the balance of the transaction store
pub struct BalanceService<'a> {
    transactions: &'a dyn TransactionStore,
}

impl<'a> BalanceService<'a> {
    /// Create a new balance service backed by the JSON storage
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_store(&storage.transactions)
    }

    /// Create a balance service over an arbitrary transaction store
    pub fn with_store(transactions: &'a dyn TransactionStore) -> Self {
        Self { transactions }
    }

    /// Scan the store once and sum income and outcome
    pub fn get_balance(&self) -> CashbookResult<Balance> {
        let transactions = self.transactions.find_all()?;
        Balance::from_transactions(&transactions)
    }
}
