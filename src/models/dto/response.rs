use serde::Serialize;

use crate::models::domain::ChatMessage;

#[derive(Debug, Serialize)]
pub struct ChatResponseDto {
    pub response: String,
    pub history: Vec<ChatMessage>,
    pub conversation_id: String,
}

#[derive(Debug, Serialize)]
pub struct ResetResponseDto {
    pub status: &'static str,
}

impl ResetResponseDto {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_response_reports_success() {
        let json = serde_json::to_value(ResetResponseDto::success())
            .expect("response should serialize");

        assert_eq!(json["status"], "success");
    }

    #[test]
    fn chat_response_serializes_history_entries() {
        let response = ChatResponseDto {
            response: "an answer".to_string(),
            history: vec![
                ChatMessage::user("a question"),
                ChatMessage::assistant("an answer"),
            ],
            conversation_id: "default".to_string(),
        };

        let json = serde_json::to_value(&response).expect("response should serialize");

        assert_eq!(json["response"], "an answer");
        assert_eq!(json["history"].as_array().unwrap().len(), 2);
        assert_eq!(json["history"][0]["role"], "user");
    }
}
