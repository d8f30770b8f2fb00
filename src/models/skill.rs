// src/models/skill.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'skills' catalog table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    /// Difficulty band: 'Medium' or 'Hard'.
    pub level: String,
}

/// Represents the 'user_skills' table: per-user mastery percentage.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserSkill {
    pub id: i64,
    pub user_id: i64,
    pub skill_id: i64,
    /// 0-100, nudged upward in fixed increments, clamped at 100.
    pub progress: i64,
}

/// Joined view of a user's tracked skill with its catalog name.
#[derive(Debug, Serialize, FromRow)]
pub struct UserSkillView {
    pub skill_id: i64,
    pub name: String,
    pub level: String,
    pub progress: i64,
}

/// DTO for creating a catalog skill. Admin only.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 10))]
    pub level: String,
}
