//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{CashbookError, CashbookResult};
use crate::models::{Category, CategoryId};

use super::file_io::{commit_batch, JsonFile};
use super::CategoryStore;

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    file: JsonFile,
    data: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> CashbookResult<()> {
        let file_data: CategoryData = self.file.load()?;

        let mut data = self.data.write().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for category in file_data.categories {
            data.insert(category.id, category);
        }

        Ok(())
    }

    fn write(&self, data: &HashMap<CategoryId, Category>) -> CashbookResult<()> {
        let mut categories: Vec<_> = data.values().cloned().collect();
        categories.sort_by(|a, b| a.title.cmp(&b.title));

        self.file.store(&CategoryData { categories })
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> CashbookResult<Option<Category>> {
        let data = self.data.read().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get a category by its exact title
    pub fn get_by_title(&self, title: &str) -> CashbookResult<Option<Category>> {
        let data = self.data.read().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().find(|c| c.title == title).cloned())
    }

    /// Get all categories sorted by title
    pub fn get_all(&self) -> CashbookResult<Vec<Category>> {
        let data = self.data.read().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut list: Vec<_> = data.values().cloned().collect();
        list.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(list)
    }

    /// Count categories
    pub fn count(&self) -> CashbookResult<usize> {
        let data = self.data.read().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

impl CategoryStore for CategoryRepository {
    fn find_by_titles(&self, titles: &[String]) -> CashbookResult<Vec<Category>> {
        let data = self.data.read().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        let wanted: HashSet<&str> = titles.iter().map(String::as_str).collect();
        let mut found: Vec<_> = data
            .values()
            .filter(|c| wanted.contains(c.title.as_str()))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(found)
    }

    fn save_many(&self, categories: &[Category]) -> CashbookResult<()> {
        if categories.is_empty() {
            return Ok(());
        }

        let mut data = self.data.write().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        // Uniqueness is checked under the same lock as the insert
        let mut taken: HashSet<&str> = data.values().map(|c| c.title.as_str()).collect();
        for category in categories {
            if category.validate().is_err() {
                return Err(CashbookError::Persistence(format!(
                    "Refusing to store category with empty title ({})",
                    category.id
                )));
            }
            if !taken.insert(category.title.as_str()) {
                return Err(CashbookError::duplicate_category(&category.title));
            }
        }
        drop(taken);

        commit_batch(&mut *data, categories, |c| c.id, |snapshot| self.write(snapshot))
    }

    fn remove_many(&self, ids: &[CategoryId]) -> CashbookResult<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let mut data = self.data.write().map_err(|e| {
            CashbookError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        let removed: Vec<Category> = ids.iter().filter_map(|id| data.remove(id)).collect();
        if removed.is_empty() {
            return Ok(());
        }

        if let Err(e) = self.write(&data) {
            for category in removed {
                data.insert(category.id, category);
            }
            return Err(e);
        }

        Ok(())
    }
}
