//! Nebula Agent
//!
//! Conversational assistant for QA teams: routes Portuguese chat messages
//! to intent-specific handlers, analyzes screen descriptions into
//! structured element and keyword sets, and produces Gherkin scenario
//! documents via an external LLM with a deterministic local fallback.

pub mod agent;
pub mod services;

pub use agent::{Agent, ChatIntent, ConversationMemory};
pub use services::{ChatService, GenerationGateway};
