//! End-to-end conversation flow tests: routing, gating, ledger
//! mirroring, and generation fallback through the public API.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use nebula_agent::agent::{Agent, ConversationMemory};
use nebula_agent::services::billing::{ActionKind, CreditGate, GateDecision};
use nebula_agent::services::generation::GenerationGateway;
use nebula_agent::services::ledger::{LedgerEntry, LedgerStatus, TaskLedger};
use nebula_agent::services::ChatService;
use nebula_analysis::{synthesize, ScreenAnalysis};
use nebula_core::{ChatMessage, CoreError, CoreResult};
use nebula_llm::{LlmError, LlmProvider, LlmResult, ProviderConfig};

struct AllowingGate;

#[async_trait]
impl CreditGate for AllowingGate {
    async fn authorize(&self, _user_id: &str, _action: ActionKind) -> CoreResult<GateDecision> {
        Ok(GateDecision::allow(42))
    }
}

struct DenyingGate;

#[async_trait]
impl CreditGate for DenyingGate {
    async fn authorize(&self, _user_id: &str, _action: ActionKind) -> CoreResult<GateDecision> {
        Ok(GateDecision::deny("créditos insuficientes", 0))
    }
}

struct BrokenGate;

#[async_trait]
impl CreditGate for BrokenGate {
    async fn authorize(&self, _user_id: &str, _action: ActionKind) -> CoreResult<GateDecision> {
        Err(CoreError::gate("billing service unavailable"))
    }
}

#[derive(Default)]
struct RecordingLedger {
    recorded: Mutex<Vec<String>>,
    transitions: Mutex<Vec<(Uuid, LedgerStatus)>>,
}

#[async_trait]
impl TaskLedger for RecordingLedger {
    async fn record(&self, _board_id: &str, message: &str) -> CoreResult<LedgerEntry> {
        let entry = LedgerEntry::new(message);
        self.recorded.lock().unwrap().push(message.to_string());
        Ok(entry)
    }

    async fn set_status(&self, _board_id: &str, id: Uuid, status: LedgerStatus) -> CoreResult<()> {
        self.transitions.lock().unwrap().push((id, status));
        Ok(())
    }
}

struct FailingProvider {
    config: ProviderConfig,
}

impl FailingProvider {
    fn new() -> Self {
        Self {
            config: ProviderConfig::default(),
        }
    }
}

#[async_trait]
impl LlmProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn send_message(
        &self,
        _messages: Vec<ChatMessage>,
        _system: Option<String>,
    ) -> LlmResult<String> {
        Err(LlmError::ServerError {
            message: "upstream down".to_string(),
            status: Some(503),
        })
    }

    async fn health_check(&self) -> LlmResult<()> {
        Ok(())
    }
}

fn local_service() -> ChatService {
    ChatService::new(Agent::new(GenerationGateway::new(None)))
}

#[tokio::test]
async fn generation_flow_records_scenario_and_analysis() {
    let service = local_service();
    let mut memory = ConversationMemory::new();

    let reply = service
        .handle_message("u1", "b1", "gerar um cenário gherkin para login", &mut memory)
        .await;

    assert!(reply.contains("```gherkin"));
    assert_eq!(memory.scenarios().len(), 1);
    assert_eq!(memory.analyses().len(), 1);
    // User turn plus assistant turn.
    assert_eq!(memory.turn_count(), 2);
}

#[tokio::test]
async fn denying_gate_blocks_only_when_llm_is_available() {
    // Without a provider the gate is never consulted.
    let service = ChatService::new(Agent::new(GenerationGateway::new(None)))
        .with_gate(Arc::new(DenyingGate));
    let mut memory = ConversationMemory::new();
    let reply = service
        .handle_message("u1", "b1", "gerar gherkin para login", &mut memory)
        .await;
    assert!(reply.contains("```gherkin"));

    // With a provider the denial short-circuits routing.
    let provider: Arc<dyn LlmProvider> = Arc::new(FailingProvider::new());
    let service = ChatService::new(Agent::new(GenerationGateway::new(Some(provider))))
        .with_gate(Arc::new(DenyingGate));
    let mut memory = ConversationMemory::new();
    let reply = service
        .handle_message("u1", "b1", "gerar gherkin para login", &mut memory)
        .await;
    assert!(reply.contains("créditos insuficientes"));
    assert!(reply.contains("Créditos restantes: 0"));
    assert_eq!(memory.turn_count(), 0);
}

#[tokio::test]
async fn broken_gate_counts_as_denial() {
    let provider: Arc<dyn LlmProvider> = Arc::new(FailingProvider::new());
    let service = ChatService::new(Agent::new(GenerationGateway::new(Some(provider))))
        .with_gate(Arc::new(BrokenGate));
    let mut memory = ConversationMemory::new();
    let reply = service
        .handle_message("u1", "b1", "gerar gherkin para login", &mut memory)
        .await;
    assert!(reply.contains("Não foi possível verificar seus créditos"));
    assert_eq!(memory.turn_count(), 0);
}

#[tokio::test]
async fn ledger_receives_record_and_status_transitions() {
    let ledger = Arc::new(RecordingLedger::default());
    let service = local_service().with_ledger(ledger.clone());
    let mut memory = ConversationMemory::new();

    service.handle_message("u1", "b1", "ajuda", &mut memory).await;

    let recorded = ledger.recorded.lock().unwrap();
    assert_eq!(recorded.as_slice(), ["ajuda"]);

    let transitions = ledger.transitions.lock().unwrap();
    assert_eq!(transitions.len(), 2);
    assert_eq!(transitions[0].1, LedgerStatus::InProgress);
    assert_eq!(transitions[1].1, LedgerStatus::Done);
    assert_eq!(transitions[0].0, transitions[1].0);
}

#[tokio::test]
async fn provider_failure_falls_back_to_local_synthesizer() {
    let provider: Arc<dyn LlmProvider> = Arc::new(FailingProvider::new());
    let service = ChatService::new(Agent::new(GenerationGateway::new(Some(provider))))
        .with_gate(Arc::new(AllowingGate));
    let mut memory = ConversationMemory::new();

    let reply = service
        .handle_message("u1", "b1", "gerar um cenário gherkin para login", &mut memory)
        .await;

    // The embedded document is exactly what the local synthesizer produces.
    let analysis = ScreenAnalysis::analyze(
        "Tela de Login com campos 'Usuário', 'Senha', botão 'Entrar' e link 'Esqueci a Senha'.",
    );
    let expected = synthesize(&analysis, "gerar um cenário gherkin para login");
    assert!(reply.contains(&expected));
    assert_eq!(memory.scenarios()[0].document, expected);
}

#[tokio::test]
async fn conversation_memory_caps_turns_across_messages() {
    let service = local_service();
    let mut memory = ConversationMemory::new();

    // 12 messages produce 24 turns, over the 20-turn cap.
    for i in 0..12 {
        service
            .handle_message("u1", "b1", &format!("ajuda {}", i), &mut memory)
            .await;
    }
    assert_eq!(memory.turn_count(), 20);
}
