use chrono::NaiveDate;
use uuid::Uuid;

use super::{FinanceError, FinancialCategory, FinancialTransaction, TransactionKind};

/// Smallest accepted transaction amount.
const MIN_AMOUNT: f64 = 0.01;

/// Filters transactions by kind, category and inclusive date bounds.
pub fn filter_transactions(
    transactions: &[FinancialTransaction],
    kind: Option<TransactionKind>,
    category_id: Option<Uuid>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<&FinancialTransaction> {
    transactions
        .iter()
        .filter(|tx| {
            kind.is_none_or(|k| tx.kind == k)
                && category_id.is_none_or(|id| tx.category_id == id)
                && from.is_none_or(|f| tx.date >= f)
                && to.is_none_or(|t| tx.date <= t)
        })
        .collect()
}

/// Validates a category before creation or update.
pub fn validate_category(category: &FinancialCategory) -> Result<(), FinanceError> {
    if category.name.trim().is_empty() {
        return Err(FinanceError::EmptyCategoryName);
    }
    if category.name.len() > 100 {
        return Err(FinanceError::CategoryNameTooLong);
    }
    if !is_valid_color(&category.color) {
        return Err(FinanceError::InvalidColor(category.color.clone()));
    }
    if category.parent_category == Some(category.id) {
        return Err(FinanceError::SelfParent);
    }
    Ok(())
}

/// Validates a transaction before creation or update.
pub fn validate_transaction(transaction: &FinancialTransaction) -> Result<(), FinanceError> {
    if transaction.description.trim().is_empty() {
        return Err(FinanceError::EmptyDescription);
    }
    if !transaction.amount.is_finite() || transaction.amount < MIN_AMOUNT {
        return Err(FinanceError::InvalidAmount(transaction.amount));
    }
    Ok(())
}

/// Hex colors (#RGB, #RRGGBB, #RRGGBBAA) or a small set of CSS names.
fn is_valid_color(color: &str) -> bool {
    if let Some(hex) = color.strip_prefix('#') {
        return [3, 6, 8].contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    const CSS_COLORS: [&str; 14] = [
        "red", "green", "blue", "yellow", "orange", "purple", "pink", "cyan", "white", "black",
        "gray", "grey", "brown", "teal",
    ];
    CSS_COLORS.contains(&color.to_lowercase().as_str())
}
