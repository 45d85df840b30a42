use serde::{Deserialize, Serialize};

/// A single multiple-choice question as validated by the quiz parser:
/// exactly four options, with the answer matching one of them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// The generated quiz returned to callers. `total_questions` is the
/// requested count and may differ from `questions.len()`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub topic: String,
    pub subtopics: Vec<String>,
    pub total_questions: u32,
    pub questions: Vec<QuizQuestion>,
}

/// Parameters for one quiz-generation request. `source_document` holds
/// raw PDF bytes used as grounding content when present.
#[derive(Clone, Debug)]
pub struct QuizRequest {
    pub topic: String,
    pub subtopics: Vec<String>,
    pub num_questions: u32,
    pub source_document: Option<Vec<u8>>,
}
