use std::sync::Arc;

use crate::{
    constants::prompts::QUIZ_SYSTEM_PROMPT,
    errors::AppResult,
    models::domain::{ChatMessage, Quiz, QuizRequest},
    services::{document_service, model_service::CompletionClient, quiz_parser},
};

/// Generates quizzes by prompting the completion gateway and running
/// the response through the quiz parser.
pub struct QuizService {
    completions: Arc<dyn CompletionClient>,
}

impl QuizService {
    pub fn new(completions: Arc<dyn CompletionClient>) -> Self {
        Self { completions }
    }

    pub async fn generate_quiz(&self, request: QuizRequest) -> AppResult<Quiz> {
        let grounding = match &request.source_document {
            Some(bytes) => Some(document_service::extract_pdf_text(bytes)?),
            None => None,
        };

        let prompt = build_quiz_prompt(&request, grounding.as_deref());
        let messages = vec![
            ChatMessage::system(QUIZ_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ];

        let raw = self.completions.complete(&messages).await?;
        let questions = quiz_parser::parse_quiz_response(&raw)?;

        log::info!(
            "generated {} of {} requested questions for topic '{}'",
            questions.len(),
            request.num_questions,
            request.topic
        );

        Ok(Quiz {
            topic: request.topic,
            subtopics: request.subtopics,
            total_questions: request.num_questions,
            questions,
        })
    }
}

fn build_quiz_prompt(request: &QuizRequest, grounding: Option<&str>) -> String {
    let mut prompt = format!(
        "Topic for quiz generation is {}, Subtopics are {}.\n\
         Generate {} multiple choice questions. Each question should have 4 options with only one correct answer.\n\
         Ensure questions are varied in difficulty and cover different aspects of the topic.",
        request.topic,
        request.subtopics.join(", "),
        request.num_questions
    );

    if let Some(content) = grounding {
        prompt.push_str("\nAdditional Content: ");
        prompt.push_str(content);
    }

    prompt
}
