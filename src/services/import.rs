//! CSV Import service
//!
//! Turns a `title,type,value,category` CSV file into stored transactions.
//! Categories named in the file are matched against the store and the
//! missing ones are created in a single batch. The source file is removed
//! once everything is persisted.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};

use crate::error::{CashbookError, CashbookResult};
use crate::models::{
    Balance, Category, CategoryId, Money, MoneyParseError, NewTransaction, Transaction,
    TransactionType,
};
use crate::storage::{CategoryStore, Storage, TransactionStore};

/// A validated CSV row, before categories are resolved
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTransaction {
    pub title: String,
    pub kind: TransactionType,
    pub value: Money,
    pub category: String,
}

/// Output of the parse step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCsv {
    /// Accepted rows in file order
    pub transactions: Vec<CsvTransaction>,
    /// Category text of every accepted row, in order, duplicates included
    pub categories: Vec<String>,
    /// Number of data rows that were dropped
    pub skipped: usize,
}

/// Why a row was dropped
#[derive(Debug, Clone, PartialEq)]
enum SkipReason {
    MissingField,
    UnknownType(String),
    InvalidValue(MoneyParseError),
    NegativeValue(Money),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "missing or blank field"),
            Self::UnknownType(kind) => write!(f, "unknown type '{}'", kind),
            Self::InvalidValue(e) => write!(f, "{}", e),
            Self::NegativeValue(value) => write!(f, "negative value {}", value),
        }
    }
}

/// Service for CSV import
pub struct ImportService<'a> {
    categories: &'a dyn CategoryStore,
    transactions: &'a dyn TransactionStore,
}

impl<'a> ImportService<'a> {
    /// Create a new import service backed by the JSON storage
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_stores(&storage.categories, &storage.transactions)
    }

    /// Create an import service over arbitrary stores
    pub fn with_stores(
        categories: &'a dyn CategoryStore,
        transactions: &'a dyn TransactionStore,
    ) -> Self {
        Self {
            categories,
            transactions,
        }
    }

    /// Import a CSV file and delete it afterwards.
    ///
    /// Returns the persisted transactions in file order. The file is only
    /// removed after both stores accepted their batches. If the transactions
    /// cannot be stored, the categories created for them are removed again.
    pub fn import_file(&self, path: impl AsRef<Path>) -> CashbookResult<Vec<Transaction>> {
        let path = path.as_ref();
        let parsed = self.load_csv(path)?;

        info!(
            "Parsed {}: {} accepted row(s), {} skipped",
            path.display(),
            parsed.transactions.len(),
            parsed.skipped
        );

        self.ensure_balance_fits(&parsed.transactions)?;

        let resolved = self.resolve_categories(&parsed.categories)?;
        let created = match self.store_transactions(parsed.transactions, &resolved.by_title) {
            Ok(created) => created,
            Err(e) => {
                self.undo_new_categories(&resolved.created);
                return Err(e);
            }
        };
        info!("Stored {} transaction(s)", created.len());

        std::fs::remove_file(path).map_err(|e| {
            warn!("Import stored but {} was not removed: {}", path.display(), e);
            CashbookError::Cleanup(format!("Failed to remove {}: {}", path.display(), e))
        })?;

        Ok(created)
    }

    /// Open and parse a CSV file
    pub fn load_csv(&self, path: &Path) -> CashbookResult<ParsedCsv> {
        let file = File::open(path).map_err(|e| {
            CashbookError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.parse_csv_from_reader(BufReader::new(file))
    }

    /// Parse CSV content, streaming record by record.
    ///
    /// The first row is a header and is ignored; columns are positional.
    /// Invalid rows are dropped without raising an error.
    pub fn parse_csv_from_reader<R: Read>(&self, reader: R) -> CashbookResult<ParsedCsv> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut parsed = ParsedCsv::default();
        let mut record = StringRecord::new();

        while reader.read_record(&mut record)? {
            match parse_record(&record) {
                Ok(row) => {
                    parsed.categories.push(row.category.clone());
                    parsed.transactions.push(row);
                }
                Err(reason) => {
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    debug!("Skipping CSV line {}: {}", line, reason);
                    parsed.skipped += 1;
                }
            }
        }

        Ok(parsed)
    }

    /// Fail with an overflow error if the stored transactions plus `rows`
    /// would no longer have a representable balance
    fn ensure_balance_fits(&self, rows: &[CsvTransaction]) -> CashbookResult<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let stored = self.transactions.find_all()?;
        let entries = stored
            .iter()
            .map(|txn| (txn.kind, txn.value))
            .chain(rows.iter().map(|row| (row.kind, row.value)));
        Balance::from_entries(entries)?;
        Ok(())
    }

    /// Map every title in `raw` to a stored category, creating the missing ones
    fn resolve_categories(&self, raw: &[String]) -> CashbookResult<ResolvedCategories> {
        let unique = unique_titles(raw);

        let existing = self.categories.find_by_titles(&unique)?;
        let known: HashSet<&str> = existing.iter().map(|c| c.title.as_str()).collect();

        let missing: Vec<String> = unique
            .iter()
            .filter(|title| !known.contains(title.as_str()))
            .cloned()
            .collect();

        let created = self.categories.create_many(&missing);
        if !created.is_empty() {
            self.categories.save_many(&created)?;
            info!("Created {} new categories", created.len());
        }

        Ok(ResolvedCategories {
            created: created.iter().map(|category| category.id).collect(),
            by_title: created
                .into_iter()
                .chain(existing)
                .map(|category| (category.title.clone(), category))
                .collect(),
        })
    }

    fn store_transactions(
        &self,
        rows: Vec<CsvTransaction>,
        by_title: &HashMap<String, Category>,
    ) -> CashbookResult<Vec<Transaction>> {
        let inputs = rows
            .into_iter()
            .map(|row| -> CashbookResult<NewTransaction> {
                let category_id = by_title
                    .get(row.category.as_str())
                    .map(|category| category.id)
                    .ok_or_else(|| CashbookError::category_not_found(row.category.as_str()))?;
                Ok(NewTransaction {
                    title: row.title,
                    kind: row.kind,
                    value: row.value,
                    category_id,
                })
            })
            .collect::<CashbookResult<Vec<_>>>()?;

        let created = self.transactions.create_many(inputs);
        self.transactions.save_many(&created)?;
        Ok(created)
    }

    fn undo_new_categories(&self, ids: &[CategoryId]) {
        if ids.is_empty() {
            return;
        }
        match self.categories.remove_many(ids) {
            Ok(()) => info!("Removed {} categories created by the failed import", ids.len()),
            Err(e) => warn!("Could not remove {} new categories: {}", ids.len(), e),
        }
    }
}

/// Categories named by an import, keyed by title
struct ResolvedCategories {
    by_title: HashMap<String, Category>,
    /// Ids of the categories this import created
    created: Vec<CategoryId>,
}

/// Deduplicate titles keeping the first occurrence of each
pub fn unique_titles(raw: &[String]) -> Vec<String> {
    let mut seen: HashSet<&String> = HashSet::new();
    raw.iter()
        .filter(|title| seen.insert(*title))
        .cloned()
        .collect()
}

fn parse_record(record: &StringRecord) -> Result<CsvTransaction, SkipReason> {
    let field = |idx: usize| record.get(idx).filter(|s| !s.is_empty());

    let (title, kind, value, category) = match (field(0), field(1), field(2), field(3)) {
        (Some(title), Some(kind), Some(value), Some(category)) => (title, kind, value, category),
        _ => return Err(SkipReason::MissingField),
    };

    let kind: TransactionType = kind
        .parse()
        .map_err(|_| SkipReason::UnknownType(kind.to_string()))?;

    let value = Money::parse(value).map_err(SkipReason::InvalidValue)?;
    if value.is_negative() {
        return Err(SkipReason::NegativeValue(value));
    }

    Ok(CsvTransaction {
        title: title.to_string(),
        kind,
        value,
        category: category.to_string(),
    })
}
