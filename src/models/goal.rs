// src/models/goal.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'goals' table: skills a user has marked as targets.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub user_id: i64,
    pub skill_id: i64,
}

/// Joined view of a goal with its skill name, for dashboard display.
#[derive(Debug, Serialize, FromRow)]
pub struct GoalView {
    pub id: i64,
    pub skill_id: i64,
    pub name: String,
    pub level: String,
}
