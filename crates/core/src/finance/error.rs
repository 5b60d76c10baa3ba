use thiserror::Error;

/// Errors that can occur when validating categories and transactions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FinanceError {
    #[error("Please provide a category name")]
    EmptyCategoryName,
    #[error("Category name too long (max 100 characters)")]
    CategoryNameTooLong,
    #[error("Invalid color format: {0}")]
    InvalidColor(String),
    #[error("A category cannot be its own parent")]
    SelfParent,
    #[error("Please provide a description")]
    EmptyDescription,
    #[error("Amount must be at least 0.01, got {0}")]
    InvalidAmount(f64),
    #[error("Smoothing window must be at least 1")]
    InvalidWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finance_error_display() {
        assert_eq!(
            FinanceError::InvalidAmount(0.0).to_string(),
            "Amount must be at least 0.01, got 0"
        );
        assert_eq!(
            FinanceError::InvalidColor("#zz".to_string()).to_string(),
            "Invalid color format: #zz"
        );
    }
}
