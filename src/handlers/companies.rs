// src/handlers/companies.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{error::AppError, models::company::Company};

/// Query parameters for listing companies.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
}

/// Lists target companies, optionally filtered by a name keyword.
pub async fn list_companies(
    State(pool): State<SqlitePool>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let search_pattern = params.q.map(|k| format!("%{}%", k));

    let companies = sqlx::query_as::<_, Company>(
        "SELECT id, name, description, skillset, positions, tasks
         FROM companies
         WHERE (? IS NULL OR name LIKE ?)
         ORDER BY name",
    )
    .bind(&search_pattern)
    .bind(&search_pattern)
    .fetch_all(&pool)
    .await?;

    Ok(Json(companies))
}

/// Retrieves a single company by ID.
pub async fn get_company(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let company = sqlx::query_as::<_, Company>(
        "SELECT id, name, description, skillset, positions, tasks
         FROM companies
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Company not found".to_string()))?;

    Ok(Json(company))
}
