#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::QuizQuestion;

    /// Creates a well-formed four-option question
    pub fn sample_question() -> QuizQuestion {
        QuizQuestion {
            question: "2+2?".to_string(),
            options: vec![
                "1".to_string(),
                "2".to_string(),
                "3".to_string(),
                "4".to_string(),
            ],
            answer: "4".to_string(),
        }
    }

    /// Renders questions into the JSON object shape the model is
    /// instructed to produce
    pub fn completion_with_questions(questions: &[QuizQuestion]) -> String {
        serde_json::json!({ "questions": questions }).to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_question_is_well_formed() {
        let question = sample_question();
        assert_eq!(question.options.len(), 4);
        assert!(question.options.contains(&question.answer));
    }

    #[test]
    fn test_fixtures_completion_embeds_questions() {
        let raw = completion_with_questions(&[sample_question()]);
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["questions"].as_array().unwrap().len(), 1);
    }
}
