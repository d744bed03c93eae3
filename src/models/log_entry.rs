use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// One day's answer to one habit. Immutable once written; the question
/// text is snapshotted at logging time so history stays stable even if
/// the habit's wording ever changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LogEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub habit_id: Uuid,
    pub habit_question_snapshot: String,
    pub status: bool,
    pub excuse_note: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLogRequest {
    pub habit_id: Uuid,

    /// Question text as shown to the user at answer time.
    #[validate(length(min = 1, max = 500, message = "Question snapshot must be 1-500 characters"))]
    pub habit_question: String,

    /// true = completed, false = failed (requires an excuse note).
    pub status: bool,

    #[validate(length(max = 2000, message = "Excuse must be under 2000 characters"))]
    pub excuse_note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecentLogsQuery {
    pub limit: Option<i64>,
}
