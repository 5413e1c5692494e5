//! The conversational agent: intent routing, conversation memory, and
//! the canned screen description table.

pub mod memory;
pub mod router;
pub mod screens;

pub use memory::{ConversationMemory, ScenarioRecord, MAX_CONTEXT_TURNS};
pub use router::{detect_intent, Agent, ChatIntent};
pub use screens::screen_description_for;
