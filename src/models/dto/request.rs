use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_QUESTION_COUNT: &str = "5";

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequestDto {
    pub message: Option<String>,
    pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetRequestDto {
    pub conversation_id: Option<String>,
}

/// Raw multipart form for `POST /api/generate-quiz`.
#[derive(Debug, MultipartForm)]
pub struct GenerateQuizForm {
    pub topic: Text<String>,
    pub subtopics: Option<Text<String>>,
    pub num_questions: Option<Text<String>>,
    pub pdf_file: Option<Bytes>,
}

/// Validated quiz parameters, decoded from the multipart form.
#[derive(Debug, Clone, Validate)]
pub struct GenerateQuizRequestDto {
    #[validate(length(min = 1, message = "Topic is required"))]
    pub topic: String,

    pub subtopics: Vec<String>,

    #[validate(range(min = 1, message = "num_questions must be at least 1"))]
    pub num_questions: u32,
}

impl GenerateQuizRequestDto {
    pub fn from_form(form: &GenerateQuizForm) -> AppResult<Self> {
        let raw_count = form
            .num_questions
            .as_ref()
            .map(|value| value.0.trim().to_string())
            .unwrap_or_else(|| DEFAULT_QUESTION_COUNT.to_string());
        let num_questions = raw_count.parse::<u32>().map_err(|_| {
            AppError::ValidationError(format!(
                "num_questions must be a positive integer, got '{raw_count}'"
            ))
        })?;

        let dto = Self {
            topic: form.topic.0.trim().to_string(),
            subtopics: split_subtopics(
                form.subtopics
                    .as_ref()
                    .map(|value| value.0.as_str())
                    .unwrap_or_default(),
            ),
            num_questions,
        };
        dto.validate()?;

        Ok(dto)
    }
}

/// Splits the comma-separated subtopics field, dropping empty segments.
pub fn split_subtopics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
