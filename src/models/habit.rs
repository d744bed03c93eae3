use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Habit {
    pub id: Uuid,
    pub question_text: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Slim projection used by the daily check queue: only what the caller
/// needs to ask the question and log the answer.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PendingHabit {
    pub id: Uuid,
    pub question_text: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateHabitRequest {
    #[validate(length(min = 1, max = 500, message = "Question must be 1-500 characters"))]
    pub question_text: String,
}
