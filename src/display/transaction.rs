//! Transaction display formatting
//!
//! Register-style listings of transactions for the terminal.

use crate::models::{Balance, Category, Transaction, TransactionType};

use super::balance::format_balance;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, category: Option<&Category>) -> String {
    let category_display = category
        .map(|c| c.title.as_str())
        .unwrap_or("(unknown)");

    let (outcome, income) = match txn.kind {
        TransactionType::Income => (String::new(), txn.value.to_string()),
        TransactionType::Outcome => (txn.value.to_string(), String::new()),
    };

    format!(
        "{:12} {} {} {:>12} {:>12}",
        txn.id.short(),
        truncate(&txn.title, 24),
        truncate(category_display, 16),
        outcome,
        income
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(entries: &[(Transaction, Option<Category>)]) -> String {
    if entries.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:24} {:16} {:>12} {:>12}\n",
        "ID", "Title", "Category", "Outcome", "Income"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for (txn, category) in entries {
        output.push_str(&format_transaction_row(txn, category.as_ref()));
        output.push('\n');
    }

    output
}

/// Format a register followed by the store balance
pub fn format_transaction_listing(
    entries: &[(Transaction, Option<Category>)],
    balance: &Balance,
) -> String {
    let mut output = format_transaction_register(entries);
    output.push('\n');
    output.push_str(&format_balance(balance));
    output
}

/// Truncate a string to a maximum number of characters, padding short ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction};

    fn txn(kind: TransactionType, category: &Category) -> Transaction {
        Transaction::new(NewTransaction {
            title: "Rent".into(),
            kind,
            value: Money::from_cents(120_000),
            category_id: category.id,
        })
    }

    #[test]
    fn test_format_transaction_row() {
        let housing = Category::new("Housing");
        let rent = txn(TransactionType::Outcome, &housing);
        let formatted = format_transaction_row(&rent, Some(&housing));

        assert!(formatted.starts_with(&rent.id.short()));
        assert!(formatted.contains("Rent"));
        assert!(formatted.contains("Housing"));
        assert!(formatted.contains("1200.00"));
    }

    #[test]
    fn test_income_and_outcome_columns_differ() {
        let job = Category::new("Job");
        let income = format_transaction_row(&txn(TransactionType::Income, &job), Some(&job));
        let outcome = format_transaction_row(&txn(TransactionType::Outcome, &job), Some(&job));

        assert!(income.trim_end().ends_with("1200.00"));
        assert!(outcome.ends_with(&" ".repeat(12)));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[]);
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_listing_includes_balance() {
        let formatted = format_transaction_listing(&[], &Balance::default());
        assert!(formatted.contains("Total:"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("A very long string", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }
}
