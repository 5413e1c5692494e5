//! Nebula Core
//!
//! Dependency-light shared types for the Nebula Agent workspace:
//! error taxonomy and the conversation-turn types exchanged between the
//! agent memory and the LLM layer.

pub mod chat;
pub mod error;

pub use chat::{ChatMessage, ChatRole};
pub use error::{CoreError, CoreResult};
