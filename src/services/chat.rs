//! Chat Service
//!
//! Outer facade over the agent: validates the incoming message, checks
//! the credit gate when external generation would be used, routes via the
//! agent, and mirrors the request onto the task ledger. Gate and ledger
//! are optional collaborators; without them the service degrades to plain
//! routing.

use std::sync::Arc;

use tracing::{error, warn};

use nebula_core::ChatRole;

use crate::agent::{Agent, ConversationMemory};
use crate::services::billing::{ActionKind, CreditGate};
use crate::services::ledger::{LedgerStatus, TaskLedger};

/// Reply for an empty or whitespace-only message.
const EMPTY_MESSAGE_REPLY: &str = "Por favor, envie uma mensagem válida.";

/// Conversational entry point wiring the agent to its collaborators.
pub struct ChatService {
    agent: Agent,
    gate: Option<Arc<dyn CreditGate>>,
    ledger: Option<Arc<dyn TaskLedger>>,
}

impl ChatService {
    /// Create a service over the agent with no collaborators.
    pub fn new(agent: Agent) -> Self {
        Self {
            agent,
            gate: None,
            ledger: None,
        }
    }

    /// Attach a credit gate.
    pub fn with_gate(mut self, gate: Arc<dyn CreditGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Attach a task ledger.
    pub fn with_ledger(mut self, ledger: Arc<dyn TaskLedger>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Handle one user message end to end.
    ///
    /// Empty messages are rejected before touching memory or
    /// collaborators. The gate is consulted only when the agent would use
    /// the external generation service; a gate error counts as a denial.
    /// Ledger failures are logged and never affect the reply.
    pub async fn handle_message(
        &self,
        user_id: &str,
        board_id: &str,
        message: &str,
        memory: &mut ConversationMemory,
    ) -> String {
        let message = message.trim();
        if message.is_empty() {
            return EMPTY_MESSAGE_REPLY.to_string();
        }

        if self.agent.llm_available() {
            if let Some(denial) = self.check_gate(user_id).await {
                return denial;
            }
        }

        let reply = self.agent.route(message, memory).await;
        memory.push_turn(ChatRole::Assistant, reply.clone());

        self.mirror_to_ledger(board_id, message).await;

        reply
    }

    /// Consult the gate; `Some(reply)` means the request is denied.
    async fn check_gate(&self, user_id: &str) -> Option<String> {
        let gate = self.gate.as_ref()?;
        match gate.authorize(user_id, ActionKind::GenerateGherkin).await {
            Ok(decision) if decision.allowed => None,
            Ok(decision) => {
                let reason = decision
                    .reason
                    .unwrap_or_else(|| "ação não autorizada".to_string());
                Some(format!(
                    "**Ação não autorizada.**\n\n{}\n\nCréditos restantes: {}",
                    reason, decision.credits_remaining
                ))
            }
            Err(err) => {
                error!(error = %err, "credit gate check failed; denying request");
                Some(
                    "**Não foi possível verificar seus créditos.**\n\nTente novamente em instantes."
                        .to_string(),
                )
            }
        }
    }

    /// Mirror the handled request onto the task board. Best effort only.
    async fn mirror_to_ledger(&self, board_id: &str, message: &str) {
        let Some(ledger) = &self.ledger else {
            return;
        };

        let entry = match ledger.record(board_id, message).await {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "failed to record request on task ledger");
                return;
            }
        };

        if let Err(err) = ledger
            .set_status(board_id, entry.id, LedgerStatus::InProgress)
            .await
        {
            warn!(error = %err, "failed to advance ledger entry to in progress");
            return;
        }
        if let Err(err) = ledger.set_status(board_id, entry.id, LedgerStatus::Done).await {
            warn!(error = %err, "failed to advance ledger entry to done");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ChatService {
        ChatService::new(Agent::new(crate::services::generation::GenerationGateway::new(
            None,
        )))
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let service = service();
        let mut memory = ConversationMemory::new();
        let reply = service.handle_message("u1", "b1", "   ", &mut memory).await;
        assert_eq!(reply, EMPTY_MESSAGE_REPLY);
        assert_eq!(memory.turn_count(), 0);
    }

    #[tokio::test]
    async fn test_reply_turn_recorded() {
        let service = service();
        let mut memory = ConversationMemory::new();
        let reply = service.handle_message("u1", "b1", "ajuda", &mut memory).await;

        // User turn plus assistant turn.
        assert_eq!(memory.turn_count(), 2);
        let last = memory.turns().last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.content, reply);
    }
}
