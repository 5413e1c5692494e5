//! Conversation Memory
//!
//! Caller-owned context for one conversation: a FIFO buffer of the last 20
//! turns plus unbounded accumulation of generated scenarios and screen
//! analyses for later inspection. One instance per conversation/session;
//! the design assumes single-writer access — callers serving concurrent
//! requests must shard per session or guard mutation themselves.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use nebula_analysis::{ScreenAnalysis, ScreenCategory};
use nebula_core::{ChatMessage, ChatRole};

/// Maximum number of turns retained; the oldest turn is evicted first.
pub const MAX_CONTEXT_TURNS: usize = 20;

/// A generated scenario kept for inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// The user intent that produced the scenario
    pub intent: String,
    /// The rendered Gherkin document, treated as opaque text
    pub document: String,
    /// Category of the screen the scenario was generated for
    pub category: ScreenCategory,
}

/// Rolling conversation state for a single conversation.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConversationMemory {
    turns: VecDeque<ChatMessage>,
    scenarios: Vec<ScenarioRecord>,
    analyses: Vec<ScreenAnalysis>,
}

impl ConversationMemory {
    /// Create an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn, evicting the oldest once the cap is exceeded.
    pub fn push_turn(&mut self, role: ChatRole, content: impl Into<String>) {
        self.turns.push_back(ChatMessage {
            role,
            content: content.into(),
        });
        while self.turns.len() > MAX_CONTEXT_TURNS {
            self.turns.pop_front();
        }
    }

    /// All retained turns, oldest first.
    pub fn turns(&self) -> impl Iterator<Item = &ChatMessage> {
        self.turns.iter()
    }

    /// The last `n` turns, oldest first.
    pub fn recent_turns(&self, n: usize) -> Vec<ChatMessage> {
        let skip = self.turns.len().saturating_sub(n);
        self.turns.iter().skip(skip).cloned().collect()
    }

    /// Number of retained turns.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Record a generated scenario.
    pub fn record_scenario(&mut self, record: ScenarioRecord) {
        self.scenarios.push(record);
    }

    /// Record a screen analysis.
    pub fn record_analysis(&mut self, analysis: ScreenAnalysis) {
        self.analyses.push(analysis);
    }

    /// All recorded scenarios, in generation order.
    pub fn scenarios(&self) -> &[ScenarioRecord] {
        &self.scenarios
    }

    /// All recorded analyses, in analysis order.
    pub fn analyses(&self) -> &[ScreenAnalysis] {
        &self.analyses
    }

    /// Drop all turns, scenarios, and analyses. Invoked by the owning
    /// layer's explicit clear operation only.
    pub fn clear(&mut self) {
        self.turns.clear();
        self.scenarios.clear();
        self.analyses.clear();
    }
}
