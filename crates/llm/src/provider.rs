//! LLM Provider Trait
//!
//! Defines the common interface the Generation Gateway programs against.
//! Providers perform a single bounded completion request; streaming and
//! tool calling are out of scope for scenario generation.

use async_trait::async_trait;

use nebula_core::ChatMessage;

use crate::types::{LlmError, LlmResult, ProviderConfig};

/// Trait that all LLM providers must implement.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Get the configuration for this provider.
    fn config(&self) -> &ProviderConfig;

    /// Send a conversation and get the complete text reply.
    ///
    /// `messages` is the prior conversation plus the final user turn;
    /// `system` is the fixed system instruction. A single attempt is made
    /// within the configured timeout.
    async fn send_message(
        &self,
        messages: Vec<ChatMessage>,
        system: Option<String>,
    ) -> LlmResult<String>;

    /// Check if the provider is reachable and the API key is valid.
    async fn health_check(&self) -> LlmResult<()>;
}

/// Helper to create an error for a missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper to map HTTP error status codes to LlmError
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    match status {
        401 | 403 => LlmError::AuthenticationFailed {
            message: format!("{}: {}", provider, body),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
        },
        400 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_error() {
        let err = missing_api_key_error("openai");
        match err {
            LlmError::AuthenticationFailed { message } => {
                assert!(message.contains("openai"));
            }
            _ => panic!("Expected AuthenticationFailed"),
        }
    }

    #[test]
    fn test_parse_http_error() {
        assert!(matches!(
            parse_http_error(401, "unauthorized", "openai"),
            LlmError::AuthenticationFailed { .. }
        ));
        assert!(matches!(
            parse_http_error(429, "rate limited", "openai"),
            LlmError::RateLimited { .. }
        ));
        assert!(matches!(
            parse_http_error(500, "internal error", "openai"),
            LlmError::ServerError { status: Some(500), .. }
        ));
        assert!(matches!(
            parse_http_error(400, "bad request", "openai"),
            LlmError::InvalidRequest { .. }
        ));
        assert!(matches!(
            parse_http_error(302, "redirect", "openai"),
            LlmError::Other { .. }
        ));
    }
}
