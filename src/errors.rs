use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upstream completion error: {0}")]
    UpstreamError(String),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("Invalid question format: {0}")]
    InvalidQuestionFormat(String),

    #[error("Invalid option count: {0}")]
    InvalidOptionCount(String),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("Document extraction error: {0}")]
    DocumentError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::UpstreamError(_) => "UPSTREAM_ERROR",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AppError::InvalidQuestionFormat(_) => "INVALID_QUESTION_FORMAT",
            AppError::InvalidOptionCount(_) => "INVALID_OPTION_COUNT",
            AppError::InvalidAnswer(_) => "INVALID_ANSWER",
            AppError::DocumentError(_) => "DOCUMENT_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamError(_) => StatusCode::BAD_GATEWAY,
            AppError::DocumentError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MalformedResponse(_)
            | AppError::InvalidQuestionFormat(_)
            | AppError::InvalidOptionCount(_)
            | AppError::InvalidAnswer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        })
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::UpstreamError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<lopdf::Error> for AppError {
    fn from(err: lopdf::Error) -> Self {
        AppError::DocumentError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
