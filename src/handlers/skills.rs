// src/handlers/skills.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    config::SKILL_PROGRESS_STEP,
    error::AppError,
    models::{
        goal::GoalView,
        skill::{Skill, UserSkillView},
    },
    utils::{activity::log_activity, jwt::Claims},
};

/// Lists the skill catalog.
pub async fn list_skills(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let skills = sqlx::query_as::<_, Skill>("SELECT id, name, level FROM skills ORDER BY id")
        .fetch_all(&pool)
        .await?;

    Ok(Json(skills))
}

/// Lists the current user's tracked skills with progress.
pub async fn list_my_skills(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let skills = sqlx::query_as::<_, UserSkillView>(
        "SELECT us.skill_id, s.name, s.level, us.progress
         FROM user_skills us
         JOIN skills s ON us.skill_id = s.id
         WHERE us.user_id = ?
         ORDER BY s.name",
    )
    .bind(claims.user_id())
    .fetch_all(&pool)
    .await?;

    Ok(Json(skills))
}

/// Nudges the user's progress on a skill upward by one fixed step,
/// clamped at 100. Creates the tracking row on first use.
pub async fn add_skill_progress(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(skill_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id();

    let skill = sqlx::query_as::<_, Skill>("SELECT id, name, level FROM skills WHERE id = ?")
        .bind(skill_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("Skill not found".to_string()))?;

    sqlx::query(
        "INSERT INTO user_skills (user_id, skill_id, progress)
         VALUES (?, ?, MIN(?, 100))
         ON CONFLICT (user_id, skill_id) DO UPDATE SET
             progress = MIN(user_skills.progress + ?, 100)",
    )
    .bind(user_id)
    .bind(skill_id)
    .bind(SKILL_PROGRESS_STEP)
    .bind(SKILL_PROGRESS_STEP)
    .execute(&pool)
    .await?;

    let progress: i64 = sqlx::query_scalar(
        "SELECT progress FROM user_skills WHERE user_id = ? AND skill_id = ?",
    )
    .bind(user_id)
    .bind(skill_id)
    .fetch_one(&pool)
    .await?;

    log_activity(
        &pool,
        user_id,
        &format!("Increased mastery in {}", skill.name),
    )
    .await?;

    Ok(Json(serde_json::json!({
        "skill_id": skill_id,
        "progress": progress
    })))
}

/// Lists the current user's goals.
pub async fn list_goals(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let goals = sqlx::query_as::<_, GoalView>(
        "SELECT g.id, g.skill_id, s.name, s.level
         FROM goals g
         JOIN skills s ON g.skill_id = s.id
         WHERE g.user_id = ?
         ORDER BY g.id",
    )
    .bind(claims.user_id())
    .fetch_all(&pool)
    .await?;

    Ok(Json(goals))
}

/// Marks a skill as a target. Idempotent: re-adding an existing goal is a
/// no-op rather than an error.
pub async fn add_goal(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(skill_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM skills WHERE id = ?")
        .bind(skill_id)
        .fetch_optional(&pool)
        .await?;
    if exists.is_none() {
        return Err(AppError::NotFound("Skill not found".to_string()));
    }

    sqlx::query(
        "INSERT INTO goals (user_id, skill_id) VALUES (?, ?)
         ON CONFLICT (user_id, skill_id) DO NOTHING",
    )
    .bind(claims.user_id())
    .bind(skill_id)
    .execute(&pool)
    .await?;

    Ok(Json(serde_json::json!({ "skill_id": skill_id })))
}

/// Deletes a goal the user owns. Deleting someone else's goal id is a 404,
/// not a leak of its existence.
pub async fn delete_goal(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(goal_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM goals WHERE id = ? AND user_id = ?")
        .bind(goal_id)
        .bind(claims.user_id())
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Goal not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "deleted": goal_id })))
}
