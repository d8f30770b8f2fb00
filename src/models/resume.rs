// src/models/resume.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'resumes' table. History is retained; the most recent
/// upload is the authoritative one for scoring purposes.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Resume {
    pub id: i64,
    pub user_id: i64,
    pub filename: String,
    /// Heuristic score, 0-100.
    pub score: i64,
    pub feedback: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for the current resume analysis (zero-state friendly).
#[derive(Debug, Serialize)]
pub struct ResumeStatus {
    pub score: i64,
    pub feedback: String,
    pub filename: Option<String>,
    pub uploaded_at: Option<chrono::DateTime<chrono::Utc>>,
}
