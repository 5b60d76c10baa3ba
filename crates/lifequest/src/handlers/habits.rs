//! Habit tracking with daily streaks.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use lifequest_core::account::PublicUser;
use lifequest_core::habit::{CreateHabitRequest, Habit, UpdateHabitRequest};
use lifequest_core::progression::{Reward, HABIT_REWARD};

use super::{today, ApiJson, ApiResponse, AppError};
use crate::{auth::CurrentUser, state::AppState};

/// Loads a habit owned by `user_id`; other users' habits are reported missing.
async fn owned_habit(state: &AppState, user_id: Uuid, id: Uuid) -> Result<Habit, AppError> {
    state
        .habits
        .get_habit(id)
        .await?
        .filter(|habit| habit.user_id == user_id)
        .ok_or_else(|| AppError::not_found("Habit not found"))
}

/// List the user's habits, newest first (GET /api/habits).
pub async fn list_habits(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<ApiResponse<Vec<Habit>>, AppError> {
    let habits = state.habits.list_habits(user.id).await?;
    Ok(ApiResponse::list(habits))
}

/// Create a habit (POST /api/habits).
pub async fn create_habit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(req): ApiJson<CreateHabitRequest>,
) -> Result<(StatusCode, ApiResponse<Habit>), AppError> {
    let habit = req.into_habit(user.id)?;
    state.habits.create_habit(&habit).await?;

    tracing::info!(habit_id = %habit.id, user_id = %user.id, name = %habit.name, "Created habit");

    Ok((StatusCode::CREATED, ApiResponse::ok(habit)))
}

/// Rename or describe a habit (PUT /api/habits/{id}).
pub async fn update_habit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateHabitRequest>,
) -> Result<ApiResponse<Habit>, AppError> {
    let mut habit = owned_habit(&state, user.id, id).await?;
    req.apply_to(&mut habit)?;
    state.habits.update_habit(&habit).await?;

    tracing::info!(habit_id = %id, "Updated habit");

    Ok(ApiResponse::ok(habit))
}

/// Delete a habit (DELETE /api/habits/{id}).
pub async fn delete_habit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    owned_habit(&state, user.id, id).await?;
    state.habits.delete_habit(id).await?;

    tracing::info!(habit_id = %id, "Deleted habit");

    Ok(ApiResponse::message("Habit removed"))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionPayload {
    pub habit: Habit,
    pub user: PublicUser,
    pub reward: Reward,
    pub levels_gained: u32,
}

/// Mark a habit done for today and pay out the reward
/// (POST /api/habits/{id}/complete).
pub async fn complete_habit(
    State(state): State<AppState>,
    CurrentUser(mut user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<CompletionPayload>, AppError> {
    let mut habit = owned_habit(&state, user.id, id).await?;
    habit.complete(today())?;
    state.habits.update_habit(&habit).await?;

    let levels_gained = user.progression.award(HABIT_REWARD);
    user.updated_at = Utc::now();
    state.users.update_user(&user).await?;

    tracing::info!(
        habit_id = %id,
        streak = habit.streak,
        levels_gained,
        "Completed habit"
    );

    let message = format!("Habit completed! {}", HABIT_REWARD.describe());
    Ok(ApiResponse::ok(CompletionPayload {
        habit,
        user: user.to_public(),
        reward: HABIT_REWARD,
        levels_gained,
    })
    .with_message(message))
}
