// src/handlers/profile.rs

use axum::{Extension, Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        profile::{MeResponse, Profile, UpdateProfileRequest},
        user::User,
    },
    utils::jwt::Claims,
};

/// Fetches the user's profile row, creating an empty one on first access.
pub async fn get_or_create_profile(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Profile, AppError> {
    sqlx::query("INSERT INTO profiles (user_id) VALUES (?) ON CONFLICT (user_id) DO NOTHING")
        .bind(user_id)
        .execute(pool)
        .await?;

    let profile = sqlx::query_as::<_, Profile>(
        "SELECT id, user_id, leetcode_id, gfg_id FROM profiles WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}

/// Get current user's account info plus external platform handles.
pub async fn get_me(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id();

    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, email, password, role, created_at FROM users WHERE id = ?",
    )
    .bind(user_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("User not found".to_string()))?;

    let profile = get_or_create_profile(&pool, user_id).await?;

    Ok(Json(MeResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        role: user.role,
        created_at: user.created_at,
        leetcode_id: profile.leetcode_id,
        gfg_id: profile.gfg_id,
    }))
}

/// Updates the user's external platform handles. Only the fields present in
/// the payload change.
pub async fn update_profile(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user_id = claims.user_id();
    get_or_create_profile(&pool, user_id).await?;

    if let Some(leetcode_id) = &payload.leetcode_id {
        sqlx::query("UPDATE profiles SET leetcode_id = ? WHERE user_id = ?")
            .bind(leetcode_id)
            .bind(user_id)
            .execute(&pool)
            .await?;
    }

    if let Some(gfg_id) = &payload.gfg_id {
        sqlx::query("UPDATE profiles SET gfg_id = ? WHERE user_id = ?")
            .bind(gfg_id)
            .bind(user_id)
            .execute(&pool)
            .await?;
    }

    let profile = get_or_create_profile(&pool, user_id).await?;

    Ok(Json(profile))
}
