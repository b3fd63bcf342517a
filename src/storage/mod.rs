//! Storage layer for Cashbook
//!
//! Services talk to storage through the [`CategoryStore`] and
//! [`TransactionStore`] traits. The bundled implementations keep their data in
//! JSON files written atomically.

pub mod categories;
pub mod file_io;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{commit_batch, JsonFile};
pub use transactions::TransactionRepository;

use crate::config::paths::CashbookPaths;
use crate::error::CashbookResult;
use crate::models::{Category, CategoryId, NewTransaction, Transaction};

/// Category persistence used by the import pipeline
pub trait CategoryStore {
    /// All stored categories whose title is in `titles`
    fn find_by_titles(&self, titles: &[String]) -> CashbookResult<Vec<Category>>;

    /// Build (but do not persist) one category per title
    fn create_many(&self, titles: &[String]) -> Vec<Category> {
        titles.iter().map(|title| Category::new(title.as_str())).collect()
    }

    /// Persist a batch of new categories.
    ///
    /// Fails as a whole with a persistence error if any title is already
    /// taken.
    fn save_many(&self, categories: &[Category]) -> CashbookResult<()>;

    /// Delete categories by id; unknown ids are ignored.
    ///
    /// Used to undo a category batch whose transactions never made it to the
    /// store.
    fn remove_many(&self, ids: &[CategoryId]) -> CashbookResult<()>;
}

/// Transaction persistence used by the import pipeline and the balance
pub trait TransactionStore {
    /// Every stored transaction
    fn find_all(&self) -> CashbookResult<Vec<Transaction>>;

    /// Build (but do not persist) transactions from their field values
    fn create_many(&self, new_transactions: Vec<NewTransaction>) -> Vec<Transaction> {
        new_transactions.into_iter().map(Transaction::new).collect()
    }

    /// Persist a batch of transactions, all or nothing
    fn save_many(&self, transactions: &[Transaction]) -> CashbookResult<()>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: CashbookPaths,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CashbookPaths) -> CashbookResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CashbookPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> CashbookResult<()> {
        self.transactions.load()?;
        self.categories.load()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("uploads").exists());
        assert_eq!(storage.paths().base_dir(), temp_dir.path());
    }

    #[test]
    fn test_load_all_sees_saved_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let mut storage = Storage::new(paths.clone()).unwrap();
            storage.load_all().unwrap();

            let categories = storage.categories.create_many(&["Food".to_string()]);
            storage.categories.save_many(&categories).unwrap();

            let txns = storage.transactions.create_many(vec![NewTransaction {
                title: "Lunch".into(),
                kind: TransactionType::Outcome,
                value: Money::from_cents(1250),
                category_id: categories[0].id,
            }]);
            storage.transactions.save_many(&txns).unwrap();
        }

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.categories.count().unwrap(), 1);
        assert_eq!(storage.transactions.count().unwrap(), 1);
    }
}
