// src/models/attempt.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'attempts' table: one scored interaction per (user, test).
///
/// Resubmission overwrites `score` in place; the UNIQUE(user_id, test_id)
/// constraint guarantees at most one live row per pair.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Attempt {
    pub id: i64,
    pub user_id: i64,
    pub test_id: i64,
    /// Last computed score, 0-100.
    pub score: i64,
    pub completed: bool,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO returned after scoring a submission.
#[derive(Debug, Serialize)]
pub struct ScoreResult {
    pub score: i64,
    pub correct_count: usize,
    pub total_questions: usize,
}
