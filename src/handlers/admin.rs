// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        company::CreateCompanyRequest,
        skill::CreateSkillRequest,
        test::{CreateQuestionRequest, CreateTestRequest},
    },
};

/// Creates a catalog skill.
/// Admin only.
pub async fn create_skill(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateSkillRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let id: i64 = sqlx::query_scalar("INSERT INTO skills (name, level) VALUES (?, ?) RETURNING id")
        .bind(&payload.name)
        .bind(&payload.level)
        .fetch_one(&pool)
        .await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

/// Deletes a catalog skill (cascades to per-user progress and goals).
/// Admin only.
pub async fn delete_skill(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM skills WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Skill not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Creates a mock test module.
/// Admin only.
pub async fn create_test(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateTestRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let id: i64 =
        sqlx::query_scalar("INSERT INTO tests (name, description) VALUES (?, ?) RETURNING id")
            .bind(&payload.name)
            .bind(payload.description.as_deref().unwrap_or(""))
            .fetch_one(&pool)
            .await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

/// Deletes a mock test and its questions.
/// Admin only.
pub async fn delete_test(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM tests WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Test not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Creates a question under an existing test. The correct option is given
/// as an index into the four options.
/// Admin only.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let test_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM tests WHERE id = ?")
        .bind(payload.test_id)
        .fetch_optional(&pool)
        .await?;
    if test_exists.is_none() {
        return Err(AppError::NotFound("Test not found".to_string()));
    }

    let options = serde_json::to_string(&payload.options)?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO questions (test_id, prompt, options, answer_index)
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(payload.test_id)
    .bind(&payload.prompt)
    .bind(&options)
    .bind(payload.answer_index)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

/// Deletes a question.
/// Admin only.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Question not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Creates a target company.
/// Admin only.
pub async fn create_company(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO companies (name, description, skillset, positions, tasks)
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&payload.name)
    .bind(payload.description.as_deref().unwrap_or(""))
    .bind(payload.skillset.as_deref().unwrap_or(""))
    .bind(payload.positions.as_deref().unwrap_or(""))
    .bind(payload.tasks.as_deref().unwrap_or(""))
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

/// Deletes a company.
/// Admin only.
pub async fn delete_company(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM companies WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Company not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
