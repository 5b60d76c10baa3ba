//! Shows, movies and games.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use lifequest_core::media::{CreateMediaRequest, MediaItem, MediaQuery, UpdateMediaRequest};

use super::{today, ApiJson, ApiQuery, ApiResponse, AppError};
use crate::{auth::CurrentUser, state::AppState};

async fn owned_media(state: &AppState, user_id: Uuid, id: Uuid) -> Result<MediaItem, AppError> {
    state
        .media
        .get_media(id)
        .await?
        .filter(|item| item.user_id == user_id)
        .ok_or_else(|| AppError::not_found("Media item not found"))
}

/// List the user's media, optionally by `type` and `status` (GET /api/media).
pub async fn list_media(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiQuery(query): ApiQuery<MediaQuery>,
) -> Result<ApiResponse<Vec<MediaItem>>, AppError> {
    let items = state
        .media
        .list_media(user.id)
        .await?
        .into_iter()
        .filter(|item| query.matches(item))
        .collect();
    Ok(ApiResponse::list(items))
}

pub async fn get_media(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<MediaItem>, AppError> {
    Ok(ApiResponse::ok(owned_media(&state, user.id, id).await?))
}

/// POST /api/media
pub async fn create_media(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(req): ApiJson<CreateMediaRequest>,
) -> Result<(StatusCode, ApiResponse<MediaItem>), AppError> {
    let item = req.into_media(user.id, today())?;
    state.media.create_media(&item).await?;

    tracing::info!(
        media_id = %item.id,
        user_id = %user.id,
        title = %item.title,
        "Created media item"
    );

    Ok((StatusCode::CREATED, ApiResponse::ok(item)))
}

/// PUT /api/media/{id}
pub async fn update_media(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateMediaRequest>,
) -> Result<ApiResponse<MediaItem>, AppError> {
    let mut item = owned_media(&state, user.id, id).await?;
    req.apply_to(&mut item, today())?;
    state.media.update_media(&item).await?;

    tracing::info!(media_id = %id, status = ?item.status, "Updated media item");

    Ok(ApiResponse::ok(item))
}

/// DELETE /api/media/{id}
pub async fn delete_media(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    owned_media(&state, user.id, id).await?;
    state.media.delete_media(id).await?;

    tracing::info!(media_id = %id, "Deleted media item");

    Ok(ApiResponse::message("Media item deleted"))
}
