// src/handlers/resume.rs

use axum::{
    Extension, Json,
    extract::{Multipart, State},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::resume::{Resume, ResumeStatus},
    scoring::resume::{DEFAULT_KEYWORDS, ResumeFormat, extract_text, score_resume},
    utils::{activity::log_activity, jwt::Claims},
};

/// Uploads a resume, extracts its text, scores it, and stores a new record.
///
/// Expects a multipart body with a `file` field. Unsupported formats are
/// accepted; they simply extract no text and score accordingly.
pub async fn upload_resume(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut filename = None;
    let mut bytes = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            filename = field.file_name().map(str::to_string);
            bytes = Some(field.bytes().await?);
        }
    }

    let filename = filename.unwrap_or_else(|| "resume".to_string());
    let bytes = bytes.ok_or(AppError::BadRequest(
        "Missing 'file' field in upload".to_string(),
    ))?;

    let format = ResumeFormat::from_filename(&filename);
    let text = extract_text(&bytes, format);
    let analysis = score_resume(&text, &DEFAULT_KEYWORDS);

    let user_id = claims.user_id();

    let resume = sqlx::query_as::<_, Resume>(
        "INSERT INTO resumes (user_id, filename, score, feedback, uploaded_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id, user_id, filename, score, feedback, uploaded_at",
    )
    .bind(user_id)
    .bind(&filename)
    .bind(analysis.score)
    .bind(&analysis.feedback)
    .bind(chrono::Utc::now())
    .fetch_one(&pool)
    .await?;

    log_activity(
        &pool,
        user_id,
        &format!("Resume analyzed: scored {}%", analysis.score),
    )
    .await?;

    Ok(Json(resume))
}

/// Returns the latest resume analysis, or zero-state defaults when the user
/// has never uploaded one.
pub async fn get_resume_status(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let latest = latest_resume(&pool, claims.user_id()).await?;

    let status = match latest {
        Some(r) => ResumeStatus {
            score: r.score,
            feedback: r.feedback,
            filename: Some(r.filename),
            uploaded_at: Some(r.uploaded_at),
        },
        None => ResumeStatus {
            score: 0,
            feedback: "No analysis performed yet.".to_string(),
            filename: None,
            uploaded_at: None,
        },
    };

    Ok(Json(status))
}

/// The most recent upload is the authoritative record.
pub async fn latest_resume(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Option<Resume>, AppError> {
    let resume = sqlx::query_as::<_, Resume>(
        "SELECT id, user_id, filename, score, feedback, uploaded_at
         FROM resumes
         WHERE user_id = ?
         ORDER BY uploaded_at DESC, id DESC
         LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(resume)
}
