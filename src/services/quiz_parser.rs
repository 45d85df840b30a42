use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizQuestion,
};

pub const OPTIONS_PER_QUESTION: usize = 4;

const REQUIRED_KEYS: [&str; 3] = ["question", "options", "answer"];

/// Returns the candidate JSON document inside raw completion text: the
/// span from the first `{` to the last `}`, inclusive.
///
/// This is deliberately permissive so that prose or code fences around
/// the object are tolerated. It assumes the outermost braces bound the
/// intended object; swap this routine out for a balanced-object scan if
/// that assumption stops holding.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start <= end).then(|| &text[start..=end])
}

/// Parses raw completion text into validated quiz questions.
///
/// A missing `questions` field yields an empty list. Any malformed
/// entry fails the entire parse; a quiz with silently dropped questions
/// is worse than an explicit error the caller can retry.
pub fn parse_quiz_response(raw: &str) -> AppResult<Vec<QuizQuestion>> {
    let candidate = extract_json_span(raw).ok_or_else(|| {
        AppError::MalformedResponse("no JSON object found in completion text".to_string())
    })?;

    let value: Value = serde_json::from_str(candidate)
        .map_err(|e| AppError::MalformedResponse(format!("failed to parse JSON response: {e}")))?;

    let entries = match value.get("questions") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(AppError::MalformedResponse(
                "the 'questions' field is not an array".to_string(),
            ))
        }
    };

    let mut questions = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        questions.push(validate_question(index, entry)?);
    }

    Ok(questions)
}

fn validate_question(index: usize, entry: &Value) -> AppResult<QuizQuestion> {
    let object = entry.as_object().ok_or_else(|| {
        AppError::InvalidQuestionFormat(format!("question {index} is not a JSON object"))
    })?;

    for key in REQUIRED_KEYS {
        if !object.contains_key(key) {
            return Err(AppError::InvalidQuestionFormat(format!(
                "question {index} is missing the '{key}' field"
            )));
        }
    }

    let question: QuizQuestion = serde_json::from_value(entry.clone())
        .map_err(|e| AppError::InvalidQuestionFormat(format!("question {index}: {e}")))?;

    if question.options.len() != OPTIONS_PER_QUESTION {
        return Err(AppError::InvalidOptionCount(format!(
            "question {index} has {} options, each question must have exactly {}",
            question.options.len(),
            OPTIONS_PER_QUESTION
        )));
    }

    if !question.options.contains(&question.answer) {
        return Err(AppError::InvalidAnswer(format!(
            "question {index} answer '{}' is not one of its options",
            question.answer
        )));
    }

    Ok(question)
}
