// src/models/company.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'companies' table: target companies and what they ask for.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Comma-separated skills the company screens for.
    pub skillset: String,
    pub positions: String,
    pub tasks: String,
}

/// DTO for creating a company. Admin only.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(length(max = 1000))]
    pub skillset: Option<String>,
    #[validate(length(max = 1000))]
    pub positions: Option<String>,
    #[validate(length(max = 2000))]
    pub tasks: Option<String>,
}
