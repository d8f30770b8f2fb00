// src/handlers/dashboard.rs

use std::sync::Arc;

use axum::{Extension, Json, extract::State, response::IntoResponse};
use rand::seq::SliceRandom;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    config::RECENT_ACTIVITY_LIMIT,
    error::AppError,
    external::{Platform, StatsProvider},
    handlers::{profile::get_or_create_profile, resume::latest_resume},
    models::{activity::Activity, goal::GoalView},
    scoring::readiness::{compute_readiness, total_aggregate},
    utils::{activity::recent_activities, jwt::Claims},
};

const MOTIVATIONAL_LINES: [&str; 4] = [
    "Keep pushing, success is near!",
    "Consistency beats intensity!",
    "Learn, apply, repeat!",
    "Small steps lead to big wins!",
];

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Weighted composite of the three signals below.
    pub overall_readiness: i64,
    pub skill_avg: i64,
    pub mock_avg: i64,
    pub resume_score: i64,
    pub goals: Vec<GoalView>,
    pub recent_activities: Vec<Activity>,
    pub leetcode_solved: i64,
    pub gfg_solved: i64,
    pub total_aggregate: i64,
    pub motivation: &'static str,
}

/// The main dashboard: readiness index, its components, goals, the recent
/// activity feed, and best-effort external solved counts.
pub async fn get_dashboard(
    State(pool): State<SqlitePool>,
    State(stats): State<Arc<dyn StatsProvider>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id();

    // Each average defaults to 0 when its collection is empty.
    let skill_avg: f64 = sqlx::query_scalar(
        "SELECT COALESCE(AVG(progress), 0.0) FROM user_skills WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await?;

    let mock_avg: f64 = sqlx::query_scalar(
        "SELECT COALESCE(AVG(score), 0.0) FROM attempts WHERE user_id = ? AND completed = 1",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await?;

    let resume_score = latest_resume(&pool, user_id).await?.map_or(0, |r| r.score);

    let overall_readiness = compute_readiness(skill_avg, mock_avg, resume_score);

    let goals = sqlx::query_as::<_, GoalView>(
        "SELECT g.id, g.skill_id, s.name, s.level
         FROM goals g
         JOIN skills s ON g.skill_id = s.id
         WHERE g.user_id = ?
         ORDER BY g.id",
    )
    .bind(user_id)
    .fetch_all(&pool)
    .await?;

    let activities = recent_activities(&pool, user_id, RECENT_ACTIVITY_LIMIT).await?;

    // Best-effort: each side independently degrades to 0 on fetch failure.
    let profile = get_or_create_profile(&pool, user_id).await?;
    let (lc, gfg) = tokio::join!(
        stats.fetch_profile(Platform::LeetCode, &profile.leetcode_id),
        stats.fetch_profile(Platform::Gfg, &profile.gfg_id),
    );

    let motivation = MOTIVATIONAL_LINES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(MOTIVATIONAL_LINES[0]);

    Ok(Json(DashboardResponse {
        overall_readiness,
        skill_avg: skill_avg.round() as i64,
        mock_avg: mock_avg.round() as i64,
        resume_score,
        goals,
        recent_activities: activities,
        leetcode_solved: lc.solved,
        gfg_solved: gfg.solved,
        total_aggregate: total_aggregate(lc.solved, gfg.solved),
        motivation,
    }))
}
