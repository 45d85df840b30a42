use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        chat_service::ChatService,
        model_service::{CompletionClient, GroqCompletionClient},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let completions: Arc<dyn CompletionClient> = Arc::new(GroqCompletionClient::new(&config));
        Self::with_completion_client(config, completions)
    }

    /// Wires the services around an arbitrary completion client; used by
    /// tests to substitute a scripted one.
    pub fn with_completion_client(config: Config, completions: Arc<dyn CompletionClient>) -> Self {
        Self {
            chat_service: Arc::new(ChatService::new(completions.clone())),
            quiz_service: Arc::new(QuizService::new(completions)),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_from_config() {
        let state = AppState::new(Config::test_config());

        assert_eq!(state.config.web_server_port, 5000);
    }
}
