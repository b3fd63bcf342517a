//! Category service
//!
//! Read-only category views for the CLI.

use crate::error::CashbookResult;
use crate::models::Category;
use crate::storage::Storage;

/// A category and how many transactions reference it
#[derive(Debug, Clone)]
pub struct CategoryUsage {
    pub category: Category,
    pub transaction_count: usize,
}

/// Service for category queries
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All categories sorted by title, with usage counts
    pub fn list_with_usage(&self) -> CashbookResult<Vec<CategoryUsage>> {
        self.storage
            .categories
            .get_all()?
            .into_iter()
            .map(|category| -> CashbookResult<CategoryUsage> {
                let transaction_count =
                    self.storage.transactions.get_by_category(category.id)?.len();
                Ok(CategoryUsage {
                    category,
                    transaction_count,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CashbookPaths;
    use crate::services::ImportService;
    use tempfile::TempDir;

    #[test]
    fn test_list_with_usage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let path = temp_dir.path().join("import.csv");
        std::fs::write(
            &path,
            "h,h,h,h\nA,outcome,1,Food\nB,outcome,2,Food\nC,income,3,Job\n",
        )
        .unwrap();
        ImportService::new(&storage).import_file(&path).unwrap();

        let usage = CategoryService::new(&storage).list_with_usage().unwrap();
        let summary: Vec<_> = usage
            .iter()
            .map(|u| (u.category.title.as_str(), u.transaction_count))
            .collect();
        assert_eq!(summary, vec![("Food", 2), ("Job", 1)]);
    }
}
