//! API request types for finance operations.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::{deserialize_optional_date, deserialize_optional_string};
use crate::storage::{DateRange, DateRangeError};

use super::{
    validate_category, validate_transaction, FinanceError, FinancialCategory,
    FinancialTransaction, TransactionKind, DEFAULT_SMOOTHING_WINDOW,
};

/// Request payload for creating a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub color: Option<String>,
    #[serde(default)]
    pub parent_category: Option<Uuid>,
}

impl CreateCategoryRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn into_category(self, user_id: Uuid) -> Result<FinancialCategory, FinanceError> {
        let mut category = FinancialCategory::new(user_id, self.name.trim());
        if let Some(color) = self.color {
            category = category.with_color(color);
        }
        category.parent_category = self.parent_category;
        validate_category(&category)?;
        Ok(category)
    }
}

/// Request payload for updating a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<Uuid>,
}

impl UpdateCategoryRequest {
    pub fn apply_to(self, category: &mut FinancialCategory) -> Result<(), FinanceError> {
        let mut updated = category.clone();
        if let Some(name) = self.name {
            updated.name = name.trim().to_string();
        }
        if let Some(color) = self.color {
            updated.color = color.trim().to_string();
        }
        if self.parent_category.is_some() {
            updated.parent_category = self.parent_category;
        }
        validate_category(&updated)?;
        updated.updated_at = Utc::now();
        *category = updated;
        Ok(())
    }
}

/// Request payload for creating a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "category")]
    pub category_id: Uuid,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub account: Option<String>,
}

impl CreateTransactionRequest {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        description: impl Into<String>,
        category_id: Uuid,
    ) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
            category_id,
            date: None,
            account: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Builds the transaction; a missing date defaults to `today`.
    pub fn into_transaction(
        self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> Result<FinancialTransaction, FinanceError> {
        let mut tx = FinancialTransaction::new(
            user_id,
            self.kind,
            self.amount,
            self.description.trim(),
            self.category_id,
            self.date.unwrap_or(today),
        );
        tx.account = self.account;
        validate_transaction(&tx)?;
        Ok(tx)
    }
}

/// Request payload for updating a transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "category", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

impl UpdateTransactionRequest {
    pub fn apply_to(self, tx: &mut FinancialTransaction) -> Result<(), FinanceError> {
        let mut updated = tx.clone();
        if let Some(kind) = self.kind {
            updated.kind = kind;
        }
        if let Some(amount) = self.amount {
            updated.amount = amount;
        }
        if let Some(description) = self.description {
            updated.description = description.trim().to_string();
        }
        if let Some(category_id) = self.category_id {
            updated.category_id = category_id;
        }
        if let Some(date) = self.date {
            updated.date = date;
        }
        if let Some(account) = self.account {
            let account = account.trim().to_string();
            updated.account = (!account.is_empty()).then_some(account);
        }
        validate_transaction(&updated)?;
        updated.updated_at = Utc::now();
        *tx = updated;
        Ok(())
    }
}

/// Query parameters for `GET /api/finance/transactions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    #[serde(rename = "type", default)]
    pub kind: Option<TransactionKind>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub to: Option<NaiveDate>,
}

impl TransactionQuery {
    /// Rejects a `from` bound that lies after the `to` bound.
    pub fn validate(&self) -> Result<Option<DateRange>, DateRangeError> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => DateRange::new(from, to).map(Some),
            _ => Ok(None),
        }
    }
}

/// Query parameters for `GET /api/finance/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryQuery {
    #[serde(default = "default_window")]
    pub window: usize,
}

impl Default for SummaryQuery {
    fn default() -> Self {
        Self {
            window: DEFAULT_SMOOTHING_WINDOW,
        }
    }
}

fn default_window() -> usize {
    DEFAULT_SMOOTHING_WINDOW
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
    }

    #[test]
    fn test_create_category_defaults_color() {
        let category = CreateCategoryRequest::new(" Food ")
            .into_category(Uuid::new_v4())
            .unwrap();
        assert_eq!(category.name, "Food");
        assert_eq!(category.color, "#6B7280");
        assert_eq!(category.parent_category, None);
    }

    #[test]
    fn test_update_category_is_atomic() {
        let mut category = CreateCategoryRequest::new("Food")
            .into_category(Uuid::new_v4())
            .unwrap();
        let req = UpdateCategoryRequest {
            name: Some("Groceries".to_string()),
            color: Some("not-a-color".to_string()),
            parent_category: None,
        };

        assert!(req.apply_to(&mut category).is_err());
        assert_eq!(category.name, "Food");
    }

    #[test]
    fn test_create_transaction_from_json() {
        let category = Uuid::new_v4();
        let json = format!(
            r#"{{"type": "expense", "amount": 12.5, "description": " Lunch ", "category": "{category}", "date": "2025-04-01"}}"#
        );
        let req: CreateTransactionRequest = serde_json::from_str(&json).unwrap();
        let tx = req.into_transaction(Uuid::new_v4(), today()).unwrap();

        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.description, "Lunch");
        assert_eq!(tx.category_id, category);
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    }

    #[test]
    fn test_create_transaction_defaults_date_and_validates() {
        let tx = CreateTransactionRequest::new(TransactionKind::Income, 1000.0, "Salary", Uuid::nil())
            .into_transaction(Uuid::new_v4(), today())
            .unwrap();
        assert_eq!(tx.date, today());

        let result = CreateTransactionRequest::new(TransactionKind::Income, 0.001, "Dust", Uuid::nil())
            .into_transaction(Uuid::new_v4(), today());
        assert_eq!(result, Err(FinanceError::InvalidAmount(0.001)));
    }

    #[test]
    fn test_update_transaction() {
        let mut tx = CreateTransactionRequest::new(TransactionKind::Expense, 5.0, "Tea", Uuid::nil())
            .into_transaction(Uuid::new_v4(), today())
            .unwrap();
        let req = UpdateTransactionRequest {
            amount: Some(7.5),
            account: Some("  ".to_string()),
            ..UpdateTransactionRequest::default()
        };
        req.apply_to(&mut tx).unwrap();

        assert_eq!(tx.amount, 7.5);
        assert_eq!(tx.account, None);
    }

    #[test]
    fn test_transaction_query_validation() {
        let query = TransactionQuery {
            from: Some(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()),
            ..TransactionQuery::default()
        };
        assert_eq!(query.validate(), Err(DateRangeError::InvalidRange));
        assert_eq!(TransactionQuery::default().validate(), Ok(None));
    }

    #[test]
    fn test_summary_query_default_window() {
        let query: SummaryQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.window, 3);
    }
}
