use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub completion_api_key: SecretString,
    pub completion_api_base: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            completion_api_key: SecretString::from(
                env::var("GROQ_API_KEY").unwrap_or_else(|_| "dev_api_key_change_me".to_string()),
            ),
            completion_api_base: env::var("COMPLETION_API_BASE")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.completion_api_key.expose_secret() == "dev_api_key_change_me" {
            panic!(
                "FATAL: GROQ_API_KEY is using default value! Set GROQ_API_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            completion_api_key: SecretString::from("test_api_key".to_string()),
            completion_api_base: "https://api.groq.com/openai/v1".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
        }
    }
}
