//! Reading list. Finishing a book pays out the book reward once.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use lifequest_core::account::PublicUser;
use lifequest_core::book::{Book, CreateBookRequest, UpdateBookRequest};
use lifequest_core::book_note::{BookNote, CreateBookNoteRequest, UpdateBookNoteRequest};
use lifequest_core::progression::BOOK_REWARD;

use super::{today, ApiJson, ApiResponse, AppError};
use crate::{auth::CurrentUser, state::AppState};

async fn owned_book(state: &AppState, user_id: Uuid, id: Uuid) -> Result<Book, AppError> {
    state
        .books
        .get_book(id)
        .await?
        .filter(|book| book.user_id == user_id)
        .ok_or_else(|| AppError::not_found("Book not found"))
}

/// List the user's books, newest first (GET /api/books).
pub async fn list_books(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<ApiResponse<Vec<Book>>, AppError> {
    Ok(ApiResponse::list(state.books.list_books(user.id).await?))
}

/// Add a book (POST /api/books).
pub async fn create_book(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(req): ApiJson<CreateBookRequest>,
) -> Result<(StatusCode, ApiResponse<Book>), AppError> {
    let book = req.into_book(user.id, today())?;
    state.books.create_book(&book).await?;

    tracing::info!(book_id = %book.id, user_id = %user.id, title = %book.title, "Created book");

    Ok((StatusCode::CREATED, ApiResponse::ok(book)))
}

#[derive(Debug, Serialize)]
pub struct BookUpdatePayload {
    pub book: Book,
    /// Present only when this update finished the book.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PublicUser>,
}

/// Update progress or details (PUT /api/books/{id}).
pub async fn update_book(
    State(state): State<AppState>,
    CurrentUser(mut user): CurrentUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateBookRequest>,
) -> Result<ApiResponse<BookUpdatePayload>, AppError> {
    let mut book = owned_book(&state, user.id, id).await?;
    let just_finished = req.apply_to(&mut book, today())?;
    state.books.update_book(&book).await?;

    tracing::info!(book_id = %id, pages_read = book.pages_read, "Updated book");

    if !just_finished {
        return Ok(ApiResponse::ok(BookUpdatePayload { book, user: None }));
    }

    let levels_gained = user.progression.award(BOOK_REWARD);
    user.updated_at = Utc::now();
    state.users.update_user(&user).await?;

    tracing::info!(book_id = %id, levels_gained, "Finished book");

    let message = format!("Book finished! {}", BOOK_REWARD.describe());
    Ok(ApiResponse::ok(BookUpdatePayload {
        book,
        user: Some(user.to_public()),
    })
    .with_message(message))
}

/// Delete a book (DELETE /api/books/{id}).
pub async fn delete_book(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    owned_book(&state, user.id, id).await?;
    state.books.delete_book(id).await?;

    tracing::info!(book_id = %id, "Deleted book");

    Ok(ApiResponse::message("Book removed"))
}

// ============================================================================
// Notes and quotes
// ============================================================================

async fn owned_book_note(
    state: &AppState,
    book_id: Uuid,
    note_id: Uuid,
) -> Result<BookNote, AppError> {
    state
        .book_notes
        .get_book_note(note_id)
        .await?
        .filter(|note| note.book_id == book_id)
        .ok_or_else(|| AppError::not_found("Note not found"))
}

/// A book's notes, newest first (GET /api/books/{id}/notes).
pub async fn list_book_notes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<Vec<BookNote>>, AppError> {
    owned_book(&state, user.id, id).await?;
    Ok(ApiResponse::list(state.book_notes.list_book_notes(id).await?))
}

/// POST /api/books/{id}/notes
pub async fn create_book_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<CreateBookNoteRequest>,
) -> Result<(StatusCode, ApiResponse<BookNote>), AppError> {
    owned_book(&state, user.id, id).await?;
    let note = req.into_note(user.id, id)?;
    state.book_notes.create_book_note(&note).await?;

    tracing::info!(book_id = %id, note_id = %note.id, kind = ?note.kind, "Created book note");

    Ok((StatusCode::CREATED, ApiResponse::ok(note)))
}

/// PUT /api/books/{id}/notes/{note_id}
pub async fn update_book_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((id, note_id)): Path<(Uuid, Uuid)>,
    ApiJson(req): ApiJson<UpdateBookNoteRequest>,
) -> Result<ApiResponse<BookNote>, AppError> {
    owned_book(&state, user.id, id).await?;
    let mut note = owned_book_note(&state, id, note_id).await?;
    req.apply_to(&mut note)?;
    state.book_notes.update_book_note(&note).await?;

    tracing::info!(book_id = %id, %note_id, "Updated book note");

    Ok(ApiResponse::ok(note))
}

/// DELETE /api/books/{id}/notes/{note_id}
pub async fn delete_book_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((id, note_id)): Path<(Uuid, Uuid)>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    owned_book(&state, user.id, id).await?;
    owned_book_note(&state, id, note_id).await?;
    state.book_notes.delete_book_note(note_id).await?;

    tracing::info!(book_id = %id, %note_id, "Deleted book note");

    Ok(ApiResponse::message("Note deleted"))
}
