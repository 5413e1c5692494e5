//! Nebula LLM
//!
//! Provider abstraction for delegating scenario generation to an external
//! generative text service. Ships a single OpenAI-compatible
//! chat-completions provider plus the shared HTTP client factory; the
//! agent treats any provider behind [`LlmProvider`] interchangeably and
//! always has a local deterministic fallback.

pub mod http_client;
pub mod openai;
pub mod provider;
pub mod types;

pub use http_client::build_http_client;
pub use openai::OpenAIProvider;
pub use provider::LlmProvider;
pub use types::{LlmError, LlmResult, ProviderConfig};
