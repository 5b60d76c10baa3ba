mod error;
mod operations;
mod requests;
mod summary;
mod types;

pub use error::FinanceError;
pub use operations::{filter_transactions, validate_category, validate_transaction};
pub use requests::{
    CreateCategoryRequest, CreateTransactionRequest, SummaryQuery, TransactionQuery,
    UpdateCategoryRequest, UpdateTransactionRequest,
};
pub use summary::{
    monthly_summary, moving_average, summarize, FinanceSummary, MonthlyTotals,
    DEFAULT_SMOOTHING_WINDOW,
};
pub use types::{FinancialCategory, FinancialTransaction, TransactionKind, DEFAULT_CATEGORY_COLOR};
