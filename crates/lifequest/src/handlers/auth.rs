//! Registration, login and the current-user profile.

use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use serde::Serialize;

use lifequest_core::account::{
    normalize_email, validate_registration, AccountError, LoginRequest, PublicUser,
    RegisterRequest, User,
};

use super::{ApiJson, ApiResponse, AppError};
use crate::{
    auth::{hash_password, issue_token, verify_password, CurrentUser},
    state::AppState,
};

/// Payload returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub user: PublicUser,
    pub token: String,
}

/// Register a new account (POST /api/auth/register).
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, ApiResponse<AuthPayload>), AppError> {
    validate_registration(&req)?;

    let email = normalize_email(&req.email);
    if state.users.get_user_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    let password_hash = hash_password(&req.password).await?;
    let user = User::new(email, req.username.trim(), password_hash);
    state.users.create_user(&user).await?;

    let token = issue_token(&user, &state.config, Utc::now())?;

    tracing::info!(user_id = %user.id, username = %user.username, "Registered user");

    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(AuthPayload {
            user: user.to_public(),
            token,
        }),
    ))
}

/// Exchange credentials for a bearer token (POST /api/auth/login).
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<ApiResponse<AuthPayload>, AppError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AccountError::MissingCredentials.into());
    }

    let user = state
        .users
        .get_user_by_email(&normalize_email(&req.email))
        .await?
        .ok_or(AccountError::InvalidCredentials)?;

    if !verify_password(&req.password, &user.password_hash).await? {
        return Err(AccountError::InvalidCredentials.into());
    }

    let token = issue_token(&user, &state.config, Utc::now())?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(ApiResponse::ok(AuthPayload {
        user: user.to_public(),
        token,
    }))
}

/// The authenticated user's profile (GET /api/auth/me).
pub async fn me(CurrentUser(user): CurrentUser) -> ApiResponse<PublicUser> {
    ApiResponse::ok(user.to_public())
}
