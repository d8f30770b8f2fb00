// src/utils/activity.rs

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::activity::Activity;

/// Appends one entry to the user's activity log.
pub async fn log_activity(
    pool: &SqlitePool,
    user_id: i64,
    description: &str,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO activities (user_id, description, created_at) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(description)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await?;
    Ok(())
}

/// Reads the most recent `limit` activity entries for the user, newest first.
pub async fn recent_activities(
    pool: &SqlitePool,
    user_id: i64,
    limit: i64,
) -> Result<Vec<Activity>, AppError> {
    let rows = sqlx::query_as::<_, Activity>(
        "SELECT id, user_id, description, created_at
         FROM activities
         WHERE user_id = ?
         ORDER BY created_at DESC, id DESC
         LIMIT ?",
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
