// src/models/profile.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'profiles' table: external coding-platform handles.
/// One row per user, created on demand.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub leetcode_id: String,
    pub gfg_id: String,
}

/// DTO for updating external handles.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    pub leetcode_id: Option<String>,
    #[validate(length(max = 100))]
    pub gfg_id: Option<String>,
}

/// Aggregated profile data for the current user.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub leetcode_id: String,
    pub gfg_id: String,
}
