//! Transaction listing service
//!
//! Read-only views over stored transactions, paired with the store-wide
//! balance.

use crate::error::{CashbookError, CashbookResult};
use crate::models::{Balance, Category, Transaction};
use crate::services::BalanceService;
use crate::storage::{Storage, TransactionStore};

/// Transactions together with the balance of the whole store
#[derive(Debug, Clone)]
pub struct TransactionListing {
    /// Listed transactions, each with its category
    pub entries: Vec<(Transaction, Option<Category>)>,
    /// Balance over every stored transaction, not only the listed ones
    pub balance: Balance,
}

/// Service for browsing transactions
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List transactions oldest first, optionally limited to one category title.
    ///
    /// `limit` keeps the most recent entries.
    pub fn list(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> CashbookResult<TransactionListing> {
        let mut transactions = match category {
            Some(title) => {
                let category = self
                    .storage
                    .categories
                    .get_by_title(title)?
                    .ok_or_else(|| CashbookError::category_not_found(title))?;
                self.storage.transactions.get_by_category(category.id)?
            }
            None => self.storage.transactions.find_all()?,
        };

        if let Some(limit) = limit {
            let excess = transactions.len().saturating_sub(limit);
            transactions.drain(..excess);
        }

        let entries = transactions
            .into_iter()
            .map(|txn| -> CashbookResult<(Transaction, Option<Category>)> {
                let category = self.storage.categories.get(txn.category_id)?;
                Ok((txn, category))
            })
            .collect::<CashbookResult<Vec<_>>>()?;

        let balance = BalanceService::new(self.storage).get_balance()?;

        Ok(TransactionListing { entries, balance })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CashbookPaths;
    use crate::models::Money;
    use crate::services::ImportService;
    use tempfile::TempDir;

    fn imported_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let path = temp_dir.path().join("import.csv");
        std::fs::write(
            &path,
            "title,type,value,category\n\
             Salary,income,5000,Job\n\
             Rent,outcome,1200,Housing\n\
             Lunch,outcome,15.50,Food\n",
        )
        .unwrap();
        ImportService::new(&storage).import_file(&path).unwrap();

        (temp_dir, storage)
    }

    #[test]
    fn test_list_all_with_balance() {
        let (_temp_dir, storage) = imported_storage();
        let listing = TransactionService::new(&storage).list(None, None).unwrap();

        assert_eq!(listing.entries.len(), 3);
        assert!(listing.entries.iter().all(|(_, c)| c.is_some()));
        assert_eq!(listing.balance.total, Money::from_cents(500_000 - 120_000 - 1_550));
    }

    #[test]
    fn test_list_by_category_keeps_full_balance() {
        let (_temp_dir, storage) = imported_storage();
        let listing = TransactionService::new(&storage)
            .list(Some("Housing"), None)
            .unwrap();

        assert_eq!(listing.entries.len(), 1);
        assert_eq!(listing.entries[0].0.title, "Rent");
        assert_eq!(listing.balance.income, Money::from_cents(500_000));
    }

    #[test]
    fn test_list_unknown_category() {
        let (_temp_dir, storage) = imported_storage();
        let err = TransactionService::new(&storage)
            .list(Some("Travel"), None)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_limit() {
        let (_temp_dir, storage) = imported_storage();
        let listing = TransactionService::new(&storage)
            .list(None, Some(2))
            .unwrap();
        assert_eq!(listing.entries.len(), 2);

        let listing = TransactionService::new(&storage)
            .list(None, Some(10))
            .unwrap();
        assert_eq!(listing.entries.len(), 3);
    }
}
