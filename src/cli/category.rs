//! Category CLI commands

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::CashbookResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their transaction counts
    List,
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> CashbookResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let usage = service.list_with_usage()?;
            print!("{}", format_category_list(&usage));
        }
    }

    Ok(())
}
