// src/models/test.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

/// Represents the 'tests' table: a mock test module.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MockTest {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// List item with an aggregate question count.
#[derive(Debug, Serialize, FromRow)]
pub struct MockTestSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub question_count: i64,
}

/// Represents the 'questions' table.
///
/// The correct option is stored as an index into `options` rather than as
/// duplicated literal text, so duplicate option strings cannot make scoring
/// ambiguous. The canonical answer text is `options[answer_index]`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub test_id: i64,
    pub prompt: String,

    /// Exactly four option strings, stored as a JSON array.
    pub options: Json<Vec<String>>,

    /// Index (0..=3) of the correct option.
    pub answer_index: i64,
}

impl Question {
    /// The correct option's literal text.
    pub fn answer_text(&self) -> &str {
        self.options
            .get(self.answer_index as usize)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// DTO for one question as presented to the candidate: prompt plus
/// shuffled options, answer withheld.
#[derive(Debug, Serialize)]
pub struct PresentedQuestion {
    pub id: i64,
    pub prompt: String,
    pub options: Vec<String>,
}

/// DTO for the randomized question/option ordering shown for one attempt.
#[derive(Debug, Serialize)]
pub struct PresentationSet {
    pub test_id: i64,
    pub test_name: String,
    pub questions: Vec<PresentedQuestion>,
}

/// DTO for submitting an attempt.
#[derive(Debug, Deserialize)]
pub struct SubmitAttemptRequest {
    /// User's answers map.
    /// Key: Question ID (i64)
    /// Value: User's selected option text (verbatim)
    pub answers: std::collections::HashMap<i64, String>,
}

/// DTO for creating a test module. Admin only.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTestRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// DTO for creating a question. Admin only.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    pub test_id: i64,
    #[validate(length(min = 1, max = 1000))]
    pub prompt: String,
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,
    #[validate(range(min = 0, max = 3))]
    pub answer_index: i64,
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.len() != 4 {
        return Err(validator::ValidationError::new("exactly_four_options_required"));
    }
    for opt in options {
        if opt.is_empty() || opt.len() > 255 {
            return Err(validator::ValidationError::new("option_length_invalid"));
        }
    }
    Ok(())
}
