use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::note::{CreateNoteRequest, Note};
use crate::AppState;

pub async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<CreateNoteRequest>,
) -> AppResult<Json<Note>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let note = state.store.add_note(&body.content).await?;
    Ok(Json(note))
}

pub async fn list_notes(State(state): State<AppState>) -> AppResult<Json<Vec<Note>>> {
    Ok(Json(state.store.all_notes().await?))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    state.store.delete_note(note_id).await?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}
