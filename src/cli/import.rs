//! CLI command handler for CSV import
//!
//! Resolves the file name against the upload directory, runs the import
//! and prints what was stored.

use crate::config::paths::resolve_upload;
use crate::config::settings::Settings;
use crate::display::{format_balance, format_transaction_register};
use crate::error::CashbookResult;
use crate::models::{Category, Transaction};
use crate::services::{BalanceService, ImportService};
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(storage: &Storage, settings: &Settings, file: &str) -> CashbookResult<()> {
    let upload_dir = settings.upload_dir(storage.paths());
    let path = resolve_upload(file, &upload_dir);

    let categories_before = storage.categories.count()?;
    let imported = ImportService::new(storage).import_file(&path)?;
    let categories_created = storage.categories.count()? - categories_before;

    println!("Imported {} transaction(s) from {}", imported.len(), path.display());
    println!("New categories: {}", categories_created);

    if !imported.is_empty() {
        println!();
        let entries = imported
            .into_iter()
            .map(|txn| -> CashbookResult<(Transaction, Option<Category>)> {
                let category = storage.categories.get(txn.category_id)?;
                Ok((txn, category))
            })
            .collect::<CashbookResult<Vec<_>>>()?;
        print!("{}", format_transaction_register(&entries));
    }

    println!();
    let balance = BalanceService::new(storage).get_balance()?;
    print!("{}", format_balance(&balance));

    Ok(())
}
