//! Balance display formatting

use crate::models::Balance;

/// Format a balance as three aligned lines
pub fn format_balance(balance: &Balance) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income:  {:>14}\n", balance.income));
    output.push_str(&format!("Outcome: {:>14}\n", balance.outcome));
    output.push_str(&format!("Total:   {:>14}\n", balance.total));
    output
}
