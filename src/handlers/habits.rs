use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::habit::{CreateHabitRequest, Habit, PendingHabit};
use crate::AppState;

pub async fn create_habit(
    State(state): State<AppState>,
    Json(body): Json<CreateHabitRequest>,
) -> AppResult<Json<Habit>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let habit = state.store.add_habit(&body.question_text).await?;
    Ok(Json(habit))
}

pub async fn list_habits(State(state): State<AppState>) -> AppResult<Json<Vec<Habit>>> {
    Ok(Json(state.store.all_habits().await?))
}

pub async fn list_active_habits(State(state): State<AppState>) -> AppResult<Json<Vec<Habit>>> {
    Ok(Json(state.store.active_habits().await?))
}

pub async fn list_pending_habits(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PendingHabit>>> {
    Ok(Json(state.store.pending_habits_today().await?))
}

pub async fn archive_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    state.store.archive_habit(habit_id).await?;
    Ok(Json(serde_json::json!({ "archived": true })))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    state.store.delete_habit(habit_id).await?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}
