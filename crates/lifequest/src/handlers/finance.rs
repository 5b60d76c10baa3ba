//! Budget categories, transactions and the monthly summary.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use lifequest_core::finance::{
    filter_transactions, summarize, CreateCategoryRequest, CreateTransactionRequest,
    FinanceSummary, FinancialCategory, FinancialTransaction, SummaryQuery, TransactionQuery,
    UpdateCategoryRequest, UpdateTransactionRequest,
};

use super::{today, ApiJson, ApiQuery, ApiResponse, AppError};
use crate::{auth::CurrentUser, state::AppState};

async fn owned_category(
    state: &AppState,
    user_id: Uuid,
    id: Uuid,
) -> Result<FinancialCategory, AppError> {
    state
        .categories
        .get_category(id)
        .await?
        .filter(|category| category.user_id == user_id)
        .ok_or_else(|| AppError::not_found("Category not found"))
}

async fn owned_transaction(
    state: &AppState,
    user_id: Uuid,
    id: Uuid,
) -> Result<FinancialTransaction, AppError> {
    state
        .transactions
        .get_transaction(id)
        .await?
        .filter(|tx| tx.user_id == user_id)
        .ok_or_else(|| AppError::not_found("Transaction not found"))
}

// ============================================================================
// Categories
// ============================================================================

/// List categories by name (GET /api/finance/categories).
pub async fn list_categories(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<ApiResponse<Vec<FinancialCategory>>, AppError> {
    Ok(ApiResponse::list(
        state.categories.list_categories(user.id).await?,
    ))
}

/// Create a category (POST /api/finance/categories).
pub async fn create_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(req): ApiJson<CreateCategoryRequest>,
) -> Result<(StatusCode, ApiResponse<FinancialCategory>), AppError> {
    let category = req.into_category(user.id)?;
    if let Some(parent) = category.parent_category {
        owned_category(&state, user.id, parent).await?;
    }
    state.categories.create_category(&category).await?;

    tracing::info!(category_id = %category.id, name = %category.name, "Created category");

    Ok((StatusCode::CREATED, ApiResponse::ok(category)))
}

/// Update a category (PUT /api/finance/categories/{id}).
pub async fn update_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateCategoryRequest>,
) -> Result<ApiResponse<FinancialCategory>, AppError> {
    let mut category = owned_category(&state, user.id, id).await?;
    req.apply_to(&mut category)?;
    if let Some(parent) = category.parent_category {
        owned_category(&state, user.id, parent).await?;
    }
    state.categories.update_category(&category).await?;

    tracing::info!(category_id = %id, "Updated category");

    Ok(ApiResponse::ok(category))
}

/// Delete a category (DELETE /api/finance/categories/{id}).
pub async fn delete_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    owned_category(&state, user.id, id).await?;
    state.categories.delete_category(id).await?;

    tracing::info!(category_id = %id, "Deleted category");

    Ok(ApiResponse::message("Category removed"))
}

// ============================================================================
// Transactions
// ============================================================================

/// List transactions, newest first, with optional filters
/// (GET /api/finance/transactions?type=&categoryId=&from=&to=).
pub async fn list_transactions(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiQuery(query): ApiQuery<TransactionQuery>,
) -> Result<ApiResponse<Vec<FinancialTransaction>>, AppError> {
    query.validate()?;

    let transactions = state.transactions.list_transactions(user.id).await?;
    let filtered = filter_transactions(
        &transactions,
        query.kind,
        query.category_id,
        query.from,
        query.to,
    )
    .into_iter()
    .cloned()
    .collect();

    Ok(ApiResponse::list(filtered))
}

/// Record a transaction (POST /api/finance/transactions).
pub async fn create_transaction(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(req): ApiJson<CreateTransactionRequest>,
) -> Result<(StatusCode, ApiResponse<FinancialTransaction>), AppError> {
    let transaction = req.into_transaction(user.id, today())?;
    owned_category(&state, user.id, transaction.category_id).await?;
    state.transactions.create_transaction(&transaction).await?;

    tracing::info!(
        transaction_id = %transaction.id,
        kind = transaction.kind.as_str(),
        amount = transaction.amount,
        "Created transaction"
    );

    Ok((StatusCode::CREATED, ApiResponse::ok(transaction)))
}

/// Update a transaction (PUT /api/finance/transactions/{id}).
pub async fn update_transaction(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateTransactionRequest>,
) -> Result<ApiResponse<FinancialTransaction>, AppError> {
    let mut transaction = owned_transaction(&state, user.id, id).await?;
    let previous_category = transaction.category_id;

    req.apply_to(&mut transaction)?;
    if transaction.category_id != previous_category {
        owned_category(&state, user.id, transaction.category_id).await?;
    }
    state.transactions.update_transaction(&transaction).await?;

    tracing::info!(transaction_id = %id, "Updated transaction");

    Ok(ApiResponse::ok(transaction))
}

/// Delete a transaction (DELETE /api/finance/transactions/{id}).
pub async fn delete_transaction(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    owned_transaction(&state, user.id, id).await?;
    state.transactions.delete_transaction(id).await?;

    tracing::info!(transaction_id = %id, "Deleted transaction");

    Ok(ApiResponse::message("Transaction removed"))
}

/// Monthly totals with a smoothed net (GET /api/finance/summary?window=).
pub async fn summary(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiQuery(query): ApiQuery<SummaryQuery>,
) -> Result<ApiResponse<FinanceSummary>, AppError> {
    let transactions = state.transactions.list_transactions(user.id).await?;
    Ok(ApiResponse::ok(summarize(&transactions, query.window)?))
}
