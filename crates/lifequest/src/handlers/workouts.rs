//! Workout logs. Logging a session pays XP and Gatilla Gold per exercise.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use lifequest_core::account::PublicUser;
use lifequest_core::workout::{
    BulkImportRequest, CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutLog,
};

use super::{today, ApiJson, ApiResponse, AppError};
use crate::{auth::CurrentUser, state::AppState};

async fn owned_workout(state: &AppState, user_id: Uuid, id: Uuid) -> Result<WorkoutLog, AppError> {
    state
        .workouts
        .get_workout(id)
        .await?
        .filter(|log| log.user_id == user_id)
        .ok_or_else(|| AppError::not_found("Workout log not found"))
}

/// List the user's workouts, most recent first (GET /api/workouts).
pub async fn list_workouts(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<ApiResponse<Vec<WorkoutLog>>, AppError> {
    Ok(ApiResponse::list(state.workouts.list_workouts(user.id).await?))
}

/// GET /api/workouts/{id}
pub async fn get_workout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<WorkoutLog>, AppError> {
    Ok(ApiResponse::ok(owned_workout(&state, user.id, id).await?))
}

#[derive(Debug, Serialize)]
pub struct WorkoutPayload {
    pub workout: WorkoutLog,
    pub user: PublicUser,
}

/// Log a session and pay its reward (POST /api/workouts).
pub async fn create_workout(
    State(state): State<AppState>,
    CurrentUser(mut user): CurrentUser,
    ApiJson(req): ApiJson<CreateWorkoutRequest>,
) -> Result<(StatusCode, ApiResponse<WorkoutPayload>), AppError> {
    let workout = req.into_workout(user.id, today())?;
    state.workouts.create_workout(&workout).await?;

    let reward = workout.reward();
    let levels_gained = user.progression.award(reward);
    user.updated_at = Utc::now();
    state.users.update_user(&user).await?;

    tracing::info!(
        workout_id = %workout.id,
        user_id = %user.id,
        exercises = workout.exercises.len(),
        levels_gained,
        "Logged workout"
    );

    let message = format!("Workout logged! {}", reward.describe());
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(WorkoutPayload {
            workout,
            user: user.to_public(),
        })
        .with_message(message),
    ))
}

/// Edit a logged session; rewards are not recalculated (PUT /api/workouts/{id}).
pub async fn update_workout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateWorkoutRequest>,
) -> Result<ApiResponse<WorkoutLog>, AppError> {
    let mut workout = owned_workout(&state, user.id, id).await?;
    req.apply_to(&mut workout)?;
    state.workouts.update_workout(&workout).await?;

    tracing::info!(workout_id = %id, "Updated workout");

    Ok(ApiResponse::ok(workout))
}

/// DELETE /api/workouts/{id}
pub async fn delete_workout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    owned_workout(&state, user.id, id).await?;
    state.workouts.delete_workout(id).await?;

    tracing::info!(workout_id = %id, "Deleted workout");

    Ok(ApiResponse::message("Workout log deleted"))
}

/// Import past sessions in one go (POST /api/workouts/bulk-import).
///
/// Every entry is validated before anything is stored. Imported history
/// pays no reward.
pub async fn bulk_import(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(req): ApiJson<BulkImportRequest>,
) -> Result<(StatusCode, ApiResponse<Vec<WorkoutLog>>), AppError> {
    let workouts = req.into_workouts(user.id, today())?;
    state.workouts.create_workouts(&workouts).await?;

    tracing::info!(user_id = %user.id, count = workouts.len(), "Imported workouts");

    let message = format!("Imported {} workout logs", workouts.len());
    Ok((StatusCode::CREATED, ApiResponse::list(workouts).with_message(message)))
}
