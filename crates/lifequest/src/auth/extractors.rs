//! Axum extractors for authentication.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::Utc;

use lifequest_core::account::User;

use super::decode_token;
use crate::{handlers::AppError, state::AppState};

/// Extractor for an authenticated user. Returns 401 if not authenticated.
pub struct CurrentUser(pub User);

/// Extractor for an authenticated admin. Returns 403 for other roles.
pub struct AdminUser(pub User);

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("Not authorized, no token".to_string()))?;

    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Not authorized, no token".to_string()))
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = decode_token(token, &state.config, Utc::now())?;

        let user_id = claims
            .user_id()
            .ok_or_else(|| AppError::Unauthorized("Not authorized, token failed".to_string()))?;

        // Accounts deleted after the token was issued are rejected.
        let user = state
            .users
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Not authorized, user not found".to_string()))?;

        Ok(CurrentUser(user))
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if !user.role.is_admin() {
            return Err(AppError::Forbidden(format!(
                "User role {} is not authorized to access this route",
                user.role
            )));
        }

        Ok(AdminUser(user))
    }
}
