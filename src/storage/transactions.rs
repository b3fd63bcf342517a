//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{CashbookError, CashbookResult};
use crate::models::{CategoryId, Transaction, TransactionId};

use super::file_io::{commit_batch, JsonFile};
use super::TransactionStore;

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence with a category index
pub struct TransactionRepository {
    file: JsonFile,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: category_id -> transaction_ids
    by_category: RwLock<HashMap<CategoryId, Vec<TransactionId>>>,
}

fn sort_for_display(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.title.cmp(&b.title))
    });
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
            data: RwLock::new(HashMap::new()),
            by_category: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and build the index
    pub fn load(&self) -> CashbookResult<()> {
        let file_data: TransactionData = self.file.load()?;

        let mut data = self.data.write().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_category = self.by_category.write().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_category.clear();

        for txn in file_data.transactions {
            by_category.entry(txn.category_id).or_default().push(txn.id);
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    fn write(&self, data: &HashMap<TransactionId, Transaction>) -> CashbookResult<()> {
        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_for_display(&mut transactions);

        self.file.store(&TransactionData { transactions })
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> CashbookResult<Option<Transaction>> {
        let data = self.data.read().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get transactions for a category
    pub fn get_by_category(&self, category_id: CategoryId) -> CashbookResult<Vec<Transaction>> {
        let data = self.data.read().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_category = self.by_category.read().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        let ids = by_category
            .get(&category_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        sort_for_display(&mut transactions);
        Ok(transactions)
    }

    /// Count transactions
    pub fn count(&self) -> CashbookResult<usize> {
        let data = self.data.read().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

impl TransactionStore for TransactionRepository {
    fn find_all(&self) -> CashbookResult<Vec<Transaction>> {
        let data = self.data.read().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_for_display(&mut transactions);
        Ok(transactions)
    }

    fn save_many(&self, transactions: &[Transaction]) -> CashbookResult<()> {
        if transactions.is_empty() {
            return Ok(());
        }

        let mut data = self.data.write().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_category = self.by_category.write().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(txn) = transactions.iter().find(|t| data.contains_key(&t.id)) {
            return Err(CashbookError::duplicate_transaction(txn.id));
        }

        commit_batch(&mut *data, transactions, |t| t.id, |snapshot| self.write(snapshot))?;

        for txn in transactions {
            by_category.entry(txn.category_id).or_default().push(txn.id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, TransactionType};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn new_txn(title: &str, category_id: CategoryId) -> NewTransaction {
        NewTransaction {
            title: title.into(),
            kind: TransactionType::Outcome,
            value: Money::from_cents(999),
            category_id,
        }
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_many_and_find_all() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let food = CategoryId::new();
        let txns = repo.create_many(vec![new_txn("Lunch", food), new_txn("Dinner", food)]);
        repo.save_many(&txns).unwrap();

        assert_eq!(repo.count().unwrap(), 2);
        assert_eq!(repo.find_all().unwrap().len(), 2);
        assert_eq!(repo.get(txns[0].id).unwrap().unwrap().title, "Lunch");
    }

    #[test]
    fn test_category_index() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let food = CategoryId::new();
        let rent = CategoryId::new();
        let txns = repo.create_many(vec![
            new_txn("Lunch", food),
            new_txn("June", rent),
            new_txn("Dinner", food),
        ]);
        repo.save_many(&txns).unwrap();

        assert_eq!(repo.get_by_category(food).unwrap().len(), 2);
        assert_eq!(repo.get_by_category(rent).unwrap().len(), 1);
        assert!(repo.get_by_category(CategoryId::new()).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let food = CategoryId::new();
        repo.save_many(&repo.create_many(vec![new_txn("Lunch", food)]))
            .unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.get_by_category(food).unwrap()[0].title, "Lunch");
    }

    #[test]
    fn test_resaving_same_transaction_rejected() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txns = repo.create_many(vec![new_txn("Lunch", CategoryId::new())]);
        repo.save_many(&txns).unwrap();

        assert!(repo.save_many(&txns).unwrap_err().is_persistence());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_failed_write_rolls_back_memory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let repo = TransactionRepository::new(path);
        let err = repo
            .save_many(&repo.create_many(vec![new_txn("Lunch", CategoryId::new())]))
            .unwrap_err();

        assert!(err.is_persistence());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
