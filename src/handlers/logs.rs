use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::log_entry::{CreateLogRequest, LogEntry, RecentLogsQuery};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StreakResponse {
    pub streak: u32,
}

pub async fn create_log(
    State(state): State<AppState>,
    Json(body): Json<CreateLogRequest>,
) -> AppResult<Json<LogEntry>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let entry = state
        .store
        .log_habit(
            body.habit_id,
            &body.habit_question,
            body.status,
            body.excuse_note.as_deref(),
        )
        .await?;

    Ok(Json(entry))
}

pub async fn list_today_logs(State(state): State<AppState>) -> AppResult<Json<Vec<LogEntry>>> {
    Ok(Json(state.store.today_logs().await?))
}

pub async fn list_recent_logs(
    State(state): State<AppState>,
    Query(query): Query<RecentLogsQuery>,
) -> AppResult<Json<Vec<LogEntry>>> {
    let limit = query.limit.unwrap_or(10);
    Ok(Json(state.store.recent_logs(limit).await?))
}

pub async fn get_streak(State(state): State<AppState>) -> AppResult<Json<StreakResponse>> {
    let streak = state.store.streak().await?;
    Ok(Json(StreakResponse { streak }))
}
