//! Category display formatting

use crate::services::CategoryUsage;

/// Format categories with their transaction counts
pub fn format_category_list(usage: &[CategoryUsage]) -> String {
    if usage.is_empty() {
        return "No categories found.\n\nImport a CSV file to create categories.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Categories:\n");

    for entry in usage {
        let noun = if entry.transaction_count == 1 {
            "transaction"
        } else {
            "transactions"
        };
        output.push_str(&format!(
            "  {} ({} {})\n",
            entry.category.title, entry.transaction_count, noun
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_format_category_list() {
        let usage = vec![
            CategoryUsage {
                category: Category::new("Food"),
                transaction_count: 2,
            },
            CategoryUsage {
                category: Category::new("Job"),
                transaction_count: 1,
            },
        ];

        let formatted = format_category_list(&usage);
        assert!(formatted.contains("Food (2 transactions)"));
        assert!(formatted.contains("Job (1 transaction)"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_category_list(&[]).contains("No categories found"));
    }
}
