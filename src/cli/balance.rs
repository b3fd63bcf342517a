//! CLI command handler for the balance report

use crate::display::format_balance;
use crate::error::CashbookResult;
use crate::services::BalanceService;
use crate::storage::Storage;

/// Handle the balance command
pub fn handle_balance_command(storage: &Storage) -> CashbookResult<()> {
    let balance = BalanceService::new(storage).get_balance()?;
    print!("{}", format_balance(&balance));
    Ok(())
}
