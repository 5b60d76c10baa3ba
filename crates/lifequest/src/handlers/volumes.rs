//! Admin volume management: create from pasted greentext, edit, export, search.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde::Serialize;
use uuid::Uuid;

use lifequest_core::volume::{
    export_volumes, parse_greentext, search_volumes, validate_parsed, CreateVolumeRequest,
    ParsedVolume, SearchQuery, SearchResult, UpdateVolumeRequest, Volume, VolumeError,
};

use super::{ApiJson, ApiQuery, ApiResponse, AppError};
use crate::{auth::AdminUser, state::AppState};

async fn find_volume(state: &AppState, id: Uuid) -> Result<Volume, AppError> {
    state
        .volumes
        .get_volume(id)
        .await?
        .ok_or_else(|| AppError::not_found("Volume not found"))
}

async fn ensure_number_free(
    state: &AppState,
    volume_number: u32,
    except: Option<Uuid>,
) -> Result<(), AppError> {
    match state.volumes.get_volume_by_number(volume_number).await? {
        Some(existing) if Some(existing.id) != except => Err(AppError::Conflict(format!(
            "Volume {volume_number} already exists"
        ))),
        _ => Ok(()),
    }
}

/// List every volume, newest number first (GET /api/admin/volumes).
pub async fn list_volumes(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<ApiResponse<Vec<Volume>>, AppError> {
    let mut volumes = state.volumes.list_volumes().await?;
    volumes.sort_by(|a, b| b.volume_number.cmp(&a.volume_number));
    Ok(ApiResponse::list(volumes))
}

/// Create a volume from raw greentext (POST /api/admin/volumes).
pub async fn create_volume(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ApiJson(req): ApiJson<CreateVolumeRequest>,
) -> Result<(StatusCode, ApiResponse<Volume>), AppError> {
    let volume = req.into_volume(admin.id)?;
    ensure_number_free(&state, volume.volume_number, None).await?;

    state.volumes.create_volume(&volume).await?;

    tracing::info!(
        volume_id = %volume.id,
        volume_number = volume.volume_number,
        status = volume.status.as_str(),
        "Created volume"
    );

    Ok((StatusCode::CREATED, ApiResponse::ok(volume)))
}

/// Get a single volume by ID (GET /api/admin/volumes/{id}).
pub async fn get_volume(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<Volume>, AppError> {
    Ok(ApiResponse::ok(find_volume(&state, id).await?))
}

/// Update a volume (PUT /api/admin/volumes/{id}).
///
/// New raw text re-parses the whole volume; otherwise individual fields are
/// patched.
pub async fn update_volume(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateVolumeRequest>,
) -> Result<ApiResponse<Volume>, AppError> {
    let mut volume = find_volume(&state, id).await?;
    let previous_number = volume.volume_number;

    req.apply_to(&mut volume)?;
    if volume.volume_number != previous_number {
        ensure_number_free(&state, volume.volume_number, Some(volume.id)).await?;
    }

    state.volumes.update_volume(&volume).await?;

    tracing::info!(volume_id = %id, volume_number = volume.volume_number, "Updated volume");

    Ok(ApiResponse::ok(volume))
}

/// Delete a volume (DELETE /api/admin/volumes/{id}).
pub async fn delete_volume(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    state.volumes.delete_volume(id).await?;

    tracing::info!(volume_id = %id, "Deleted volume");

    Ok(ApiResponse::message("Volume removed"))
}

/// Download all published volumes as plain text (GET /api/admin/volumes/export).
pub async fn export(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let volumes = state.volumes.list_published_volumes().await?;
    let text = export_volumes(&volumes);

    tracing::info!(count = volumes.len(), "Exported volumes");

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"the-abel-experience.txt\"",
            ),
        ],
        text,
    ))
}

/// Full-text search across every volume (GET /api/admin/volumes/search?q=).
pub async fn search(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<ApiResponse<Vec<SearchResult>>, AppError> {
    let volumes = state.volumes.list_volumes().await?;
    Ok(ApiResponse::list(search_volumes(&volumes, &query.q)))
}

/// Parser output for a dry run, with the reason it would be rejected.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsePreview {
    pub parsed: ParsedVolume,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Parse raw text without saving it (POST /api/admin/volumes/parse).
pub async fn parse_preview(
    AdminUser(_admin): AdminUser,
    ApiJson(req): ApiJson<CreateVolumeRequest>,
) -> Result<ApiResponse<ParsePreview>, AppError> {
    if req.raw_pasted_text.trim().is_empty() {
        return Err(VolumeError::MissingRawText.into());
    }

    let parsed = parse_greentext(&req.raw_pasted_text);
    let error = validate_parsed(&parsed).err().map(|e| e.to_string());

    Ok(ApiResponse::ok(ParsePreview {
        valid: error.is_none(),
        parsed,
        error,
    }))
}
