//! Tasks and their checklists.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use lifequest_core::task::{
    sort_tasks, AddSubtaskRequest, CreateTaskRequest, Subtask, Task, UpdateSubtaskRequest,
    UpdateTaskRequest,
};

use super::{today, ApiJson, ApiResponse, AppError};
use crate::{auth::CurrentUser, state::AppState};

async fn owned_task(state: &AppState, user_id: Uuid, id: Uuid) -> Result<Task, AppError> {
    state
        .tasks
        .get_task(id)
        .await?
        .filter(|task| task.user_id == user_id)
        .ok_or_else(|| AppError::not_found("Task not found"))
}

/// Soonest due first, undated last (GET /api/tasks).
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<ApiResponse<Vec<Task>>, AppError> {
    let mut tasks = state.tasks.list_tasks(user.id).await?;
    sort_tasks(&mut tasks);
    Ok(ApiResponse::list(tasks))
}

pub async fn get_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<Task>, AppError> {
    Ok(ApiResponse::ok(owned_task(&state, user.id, id).await?))
}

/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(req): ApiJson<CreateTaskRequest>,
) -> Result<(StatusCode, ApiResponse<Task>), AppError> {
    let task = req.into_task(user.id, today())?;
    state.tasks.create_task(&task).await?;

    tracing::info!(task_id = %task.id, user_id = %user.id, title = %task.title, "Created task");

    Ok((StatusCode::CREATED, ApiResponse::ok(task)))
}

/// Full update; the subtask list is replaced (PUT /api/tasks/{id}).
pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateTaskRequest>,
) -> Result<ApiResponse<Task>, AppError> {
    let mut task = owned_task(&state, user.id, id).await?;
    req.apply_to(&mut task, today())?;
    state.tasks.update_task(&task).await?;

    tracing::info!(task_id = %id, status = ?task.status, "Updated task");

    Ok(ApiResponse::ok(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    owned_task(&state, user.id, id).await?;
    state.tasks.delete_task(id).await?;

    tracing::info!(task_id = %id, "Deleted task");

    Ok(ApiResponse::message("Task deleted"))
}

// ============================================================================
// Subtasks
// ============================================================================

/// POST /api/tasks/{id}/subtasks
pub async fn add_subtask(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<AddSubtaskRequest>,
) -> Result<(StatusCode, ApiResponse<Task>), AppError> {
    let mut task = owned_task(&state, user.id, id).await?;
    let subtask_id = task.add_subtask(&req.text)?.id;
    state.tasks.update_task(&task).await?;

    tracing::info!(task_id = %id, %subtask_id, "Added subtask");

    Ok((StatusCode::CREATED, ApiResponse::ok(task)))
}

/// PUT /api/tasks/{id}/subtasks/{subtask_id}
pub async fn update_subtask(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((id, subtask_id)): Path<(Uuid, Uuid)>,
    ApiJson(req): ApiJson<UpdateSubtaskRequest>,
) -> Result<ApiResponse<Task>, AppError> {
    let mut task = owned_task(&state, user.id, id).await?;
    req.apply_to(&mut task, subtask_id)?;
    state.tasks.update_task(&task).await?;

    tracing::info!(task_id = %id, %subtask_id, "Updated subtask");

    Ok(ApiResponse::ok(task))
}

/// DELETE /api/tasks/{id}/subtasks/{subtask_id}
pub async fn delete_subtask(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((id, subtask_id)): Path<(Uuid, Uuid)>,
) -> Result<ApiResponse<Subtask>, AppError> {
    let mut task = owned_task(&state, user.id, id).await?;
    let removed = task.remove_subtask(subtask_id)?;
    state.tasks.update_task(&task).await?;

    tracing::info!(task_id = %id, %subtask_id, "Deleted subtask");

    Ok(ApiResponse::ok(removed).with_message("Subtask deleted"))
}
