//! Free-form tagged notes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use lifequest_core::note::{CreateNoteRequest, Note, NoteQuery, UpdateNoteRequest};

use super::{ApiJson, ApiQuery, ApiResponse, AppError};
use crate::{auth::CurrentUser, state::AppState};

async fn owned_note(state: &AppState, user_id: Uuid, id: Uuid) -> Result<Note, AppError> {
    state
        .notes
        .get_note(id)
        .await?
        .filter(|note| note.user_id == user_id)
        .ok_or_else(|| AppError::not_found("Note not found"))
}

/// List notes, newest first, optionally by tag (GET /api/notes?tag=).
pub async fn list_notes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiQuery(query): ApiQuery<NoteQuery>,
) -> Result<ApiResponse<Vec<Note>>, AppError> {
    let mut notes = state.notes.list_notes(user.id).await?;
    if let Some(tag) = query.tag.as_deref() {
        notes.retain(|note| note.has_tag(tag));
    }
    Ok(ApiResponse::list(notes))
}

/// Get a note (GET /api/notes/{id}).
pub async fn get_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<Note>, AppError> {
    Ok(ApiResponse::ok(owned_note(&state, user.id, id).await?))
}

/// Create a note (POST /api/notes).
pub async fn create_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(req): ApiJson<CreateNoteRequest>,
) -> Result<(StatusCode, ApiResponse<Note>), AppError> {
    let note = req.into_note(user.id)?;
    state.notes.create_note(&note).await?;

    tracing::info!(note_id = %note.id, tags = note.tags.len(), "Created note");

    Ok((StatusCode::CREATED, ApiResponse::ok(note)))
}

/// Update a note (PUT /api/notes/{id}).
pub async fn update_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateNoteRequest>,
) -> Result<ApiResponse<Note>, AppError> {
    let mut note = owned_note(&state, user.id, id).await?;
    req.apply_to(&mut note)?;
    state.notes.update_note(&note).await?;

    tracing::info!(note_id = %id, "Updated note");

    Ok(ApiResponse::ok(note))
}

/// Delete a note (DELETE /api/notes/{id}).
pub async fn delete_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    owned_note(&state, user.id, id).await?;
    state.notes.delete_note(id).await?;

    tracing::info!(note_id = %id, "Deleted note");

    Ok(ApiResponse::message("Note removed"))
}
