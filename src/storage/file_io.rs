//! JSON store files
//!
//! A [`JsonFile`] is one snapshot file on disk. Snapshots are replaced whole
//! through a sibling temp file, so a reader sees either the old or the new
//! contents. [`commit_batch`] ties an in-memory batch insert to that write.

use std::collections::HashMap;
use std::fs::{self, File};
use std::hash::Hash;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use crate::error::{CashbookError, CashbookResult};

/// One JSON snapshot file backing a repository
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn failure(&self, action: &str, err: impl std::fmt::Display) -> CashbookError {
        CashbookError::Persistence(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }

    /// Read the snapshot. A store that was never written is empty.
    pub fn load<T>(&self) -> CashbookResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(self.failure("open", e)),
        };

        serde_json::from_reader(BufReader::new(file)).map_err(|e| self.failure("parse", e))
    }

    /// Replace the snapshot with `data`
    pub fn store<T: Serialize>(&self, data: &T) -> CashbookResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.failure("create the directory for", e))?;

        let temp = NamedTempFile::new_in(dir).map_err(|e| self.failure("stage", e))?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, data)
                .map_err(|e| self.failure("serialize", e))?;
            writer.flush().map_err(|e| self.failure("flush", e))?;
        }
        temp.as_file()
            .sync_all()
            .map_err(|e| self.failure("sync", e))?;

        temp.persist(&self.path)
            .map_err(|e| self.failure("replace", e.error))?;

        Ok(())
    }
}

/// Insert `batch` into `data` and run `write` on the result.
///
/// If `write` fails the inserted keys are removed again, so the map matches
/// the last snapshot that reached disk.
pub fn commit_batch<K, V, W>(
    data: &mut HashMap<K, V>,
    batch: &[V],
    key: impl Fn(&V) -> K,
    write: W,
) -> CashbookResult<()>
where
    K: Eq + Hash,
    V: Clone,
    W: FnOnce(&HashMap<K, V>) -> CashbookResult<()>,
{
    for item in batch {
        data.insert(key(item), item.clone());
    }

    if let Err(e) = write(&*data) {
        for item in batch {
            data.remove(&key(item));
        }
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Snapshot {
        titles: Vec<String>,
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file = JsonFile::new(temp_dir.path().join("nonexistent.json"));

        let data: Snapshot = file.load().unwrap();
        assert_eq!(data, Snapshot::default());
    }

    #[test]
    fn test_store_then_load_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let file = JsonFile::new(temp_dir.path().join("categories.json"));

        let data = Snapshot {
            titles: vec!["Food".into(), "Job".into()],
        };
        file.store(&data).unwrap();

        assert_eq!(file.load::<Snapshot>().unwrap(), data);
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_store_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file = JsonFile::new(temp_dir.path().join("data").join("transactions.json"));

        file.store(&Snapshot::default()).unwrap();
        assert!(file.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_persistence_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        let err = JsonFile::new(path).load::<Snapshot>().unwrap_err();
        assert!(err.is_persistence());
    }

    #[test]
    fn test_commit_batch_keeps_inserts_on_success() {
        let mut data: HashMap<u32, String> = HashMap::new();
        let batch = vec!["a".to_string(), "bb".to_string()];

        commit_batch(&mut data, &batch, |s| s.len() as u32, |snapshot| {
            assert_eq!(snapshot.len(), 2);
            Ok(())
        })
        .unwrap();

        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_commit_batch_undoes_inserts_on_failure() {
        let mut data: HashMap<u32, String> = HashMap::from([(9, "existing".to_string())]);
        let batch = vec!["a".to_string(), "bb".to_string()];

        let err = commit_batch(&mut data, &batch, |s| s.len() as u32, |_| {
            Err(CashbookError::Persistence("disk full".into()))
        })
        .unwrap_err();

        assert!(err.is_persistence());
        assert_eq!(data, HashMap::from([(9, "existing".to_string())]));
    }
}
