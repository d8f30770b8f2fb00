// src/models/activity.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'activities' table: an append-only per-user log,
/// read back as most-recent-N for the dashboard.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub user_id: i64,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
