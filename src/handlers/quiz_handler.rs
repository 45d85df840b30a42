use actix_multipart::form::MultipartForm;
use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::{
        domain::QuizRequest,
        dto::request::{GenerateQuizForm, GenerateQuizRequestDto},
    },
};

#[post("/api/generate-quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<GenerateQuizForm>,
) -> Result<HttpResponse, AppError> {
    let params = GenerateQuizRequestDto::from_form(&form)?;
    let source_document = source_document(&form)?;

    let quiz = state
        .quiz_service
        .generate_quiz(QuizRequest {
            topic: params.topic,
            subtopics: params.subtopics,
            num_questions: params.num_questions,
            source_document,
        })
        .await?;

    Ok(HttpResponse::Ok().json(quiz))
}

fn source_document(form: &GenerateQuizForm) -> AppResult<Option<Vec<u8>>> {
    let Some(file) = &form.pdf_file else {
        return Ok(None);
    };

    let file_name = file.file_name.as_deref().unwrap_or_default();
    if !file_name.to_ascii_lowercase().ends_with(".pdf") {
        return Err(AppError::ValidationError(format!(
            "pdf_file must be a .pdf document, got '{file_name}'"
        )));
    }

    Ok(Some(file.data.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_multipart::form::{bytes::Bytes, text::Text};

    fn form_with_file(file_name: Option<&str>) -> GenerateQuizForm {
        GenerateQuizForm {
            topic: Text("Rust".to_string()),
            subtopics: None,
            num_questions: None,
            pdf_file: Some(Bytes {
                data: web::Bytes::from_static(b"%PDF-1.4 stub"),
                file_name: file_name.map(str::to_string),
                content_type: None,
            }),
        }
    }

    #[test]
    fn missing_file_yields_no_source_document() {
        let form = GenerateQuizForm {
            topic: Text("Rust".to_string()),
            subtopics: None,
            num_questions: None,
            pdf_file: None,
        };

        assert_eq!(source_document(&form).unwrap(), None);
    }

    #[test]
    fn pdf_extension_is_accepted_case_insensitively() {
        let bytes = source_document(&form_with_file(Some("Notes.PDF")))
            .expect("should accept")
            .expect("should carry bytes");

        assert_eq!(bytes, b"%PDF-1.4 stub");
    }

    #[test]
    fn non_pdf_extension_is_rejected() {
        let err = source_document(&form_with_file(Some("notes.txt"))).expect_err("should fail");

        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn missing_file_name_is_rejected() {
        let err = source_document(&form_with_file(None)).expect_err("should fail");

        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
