//! LLM Types
//!
//! Error taxonomy and provider configuration for LLM interactions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from LLM provider interactions.
///
/// These never cross the Generation Gateway boundary: every variant is
/// logged and converted into a local-synthesizer result there.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Server error (status {status:?}): {message}")]
    ServerError { message: String, status: Option<u16> },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("{message}")]
    Other { message: String },
}

/// Result type alias for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;

/// Configuration for an LLM provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key; providers without one are treated as not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL override (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Model name to use
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Temperature (0.0 - 1.0); kept low for reproducible scenario output
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds; a single attempt is made within this
    /// budget, with no retry
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_temperature() -> f32 {
    0.3
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    /// Build a configuration from the environment.
    ///
    /// Reads `OPENAI_API_KEY` (falling back to `OPENAI_KEY`), `LLM_MODEL`,
    /// and `OPENAI_BASE_URL`. A missing key is not an error; it selects
    /// the local generation path downstream.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .or_else(|_| std::env::var("OPENAI_KEY"))
            .ok()
            .filter(|key| !key.is_empty());
        let model = std::env::var("LLM_MODEL")
            .ok()
            .filter(|model| !model.is_empty())
            .unwrap_or_else(default_model);
        let base_url = std::env::var("OPENAI_BASE_URL").ok().filter(|u| !u.is_empty());

        Self {
            api_key,
            base_url,
            model,
            ..Self::default()
        }
    }

    /// Whether an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 1500);
        assert!((config.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ProviderConfig = serde_json::from_str("{\"api_key\":\"sk-test\"}").unwrap();
        assert!(config.is_configured());
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 1500);
    }

    #[test]
    fn test_error_display() {
        let err = LlmError::AuthenticationFailed {
            message: "invalid key".to_string(),
        };
        assert_eq!(err.to_string(), "Authentication failed: invalid key");
    }
}
