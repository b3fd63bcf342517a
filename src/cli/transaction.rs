//! Transaction CLI commands
//!
//! Implements CLI commands for browsing imported transactions.

use clap::Subcommand;

use crate::display::transaction::format_transaction_listing;
use crate::error::CashbookResult;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List transactions together with the current balance
    List {
        /// Filter by category title
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Number of most recent transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> CashbookResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::List { category, limit } => {
            let listing = service.list(category.as_deref(), limit)?;
            print!(
                "{}",
                format_transaction_listing(&listing.entries, &listing.balance)
            );
        }
    }

    Ok(())
}
