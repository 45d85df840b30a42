use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::{
    constants::prompts::CHAT_SYSTEM_PROMPT,
    errors::AppResult,
    models::domain::{ChatMessage, Transcript},
    services::model_service::CompletionClient,
};

/// Conversation used when the caller does not supply an id, so a bare
/// `{"message": ...}` request keeps working.
pub const DEFAULT_CONVERSATION_ID: &str = "default";

/// One completed chat exchange: the assistant reply plus the transcript
/// as shown to callers.
#[derive(Clone, Debug)]
pub struct ChatTurn {
    pub response: String,
    pub history: Vec<ChatMessage>,
}

/// Serves conversational chat over server-held transcripts. Each
/// conversation id maps to its own transcript behind its own lock, so
/// concurrent requests on the same conversation cannot interleave their
/// user/assistant pairs.
pub struct ChatService {
    completions: Arc<dyn CompletionClient>,
    conversations: RwLock<HashMap<String, Arc<Mutex<Transcript>>>>,
}

impl ChatService {
    pub fn new(completions: Arc<dyn CompletionClient>) -> Self {
        Self {
            completions,
            conversations: RwLock::new(HashMap::new()),
        }
    }

    async fn conversation(&self, conversation_id: &str) -> Arc<Mutex<Transcript>> {
        if let Some(transcript) = self.conversations.read().await.get(conversation_id) {
            return transcript.clone();
        }

        let mut conversations = self.conversations.write().await;
        conversations
            .entry(conversation_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Transcript::new(CHAT_SYSTEM_PROMPT))))
            .clone()
    }

    /// Appends the user message, obtains the assistant reply from the
    /// completion gateway, and appends it. The conversation lock is held
    /// across the outbound call to serialize turns per conversation.
    pub async fn send_message(&self, conversation_id: &str, message: &str) -> AppResult<ChatTurn> {
        let conversation = self.conversation(conversation_id).await;
        let mut transcript = conversation.lock().await;

        transcript.push_user(message);
        let response = self.completions.complete(transcript.messages()).await?;
        transcript.push_assistant(response.clone());

        log::debug!(
            "chat turn completed for conversation '{}' ({} messages)",
            conversation_id,
            transcript.messages().len()
        );

        Ok(ChatTurn {
            response,
            history: transcript.history(),
        })
    }

    /// Clears the transcript back to just the system message.
    pub async fn reset(&self, conversation_id: &str) {
        let conversation = self.conversation(conversation_id).await;
        conversation.lock().await.reset(CHAT_SYSTEM_PROMPT);

        log::debug!("conversation '{}' reset", conversation_id);
    }
}
