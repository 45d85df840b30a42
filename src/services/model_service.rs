use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::ChatMessage,
};

// Fixed per call site, not user-configurable.
const COMPLETION_MODEL: &str = "llama3-8b-8192";
const COMPLETION_TEMPERATURE: f32 = 0.7;
const COMPLETION_MAX_TOKENS: u32 = 2048;

/// Gateway to the upstream chat-completion service. Implementations
/// take a full transcript and return the text of the primary completion
/// choice; they never mutate conversation state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String>;
}

/// Production client against Groq's OpenAI-compatible completion API.
pub struct GroqCompletionClient {
    client: Client<OpenAIConfig>,
}

impl GroqCompletionClient {
    pub fn new(config: &Config) -> Self {
        let api_config = OpenAIConfig::new()
            .with_api_key(config.completion_api_key.expose_secret())
            .with_api_base(&config.completion_api_base);

        Self {
            client: Client::with_config(api_config),
        }
    }
}

#[async_trait]
impl CompletionClient for GroqCompletionClient {
    async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String> {
        let payload = json!({
            "model": COMPLETION_MODEL,
            "temperature": COMPLETION_TEMPERATURE,
            "max_tokens": COMPLETION_MAX_TOKENS,
            "messages": messages,
        });

        let response: serde_json::Value = self.client.chat().create_byot(payload).await?;

        response["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| {
                AppError::UpstreamError(
                    "completion response contained no message content".to_string(),
                )
            })
    }
}
