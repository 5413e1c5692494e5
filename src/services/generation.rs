//! Generation Gateway
//!
//! Chooses between delegating scenario generation to an external LLM
//! provider and the local deterministic synthesizer. The external path is
//! taken when a provider is configured; any provider failure is logged and
//! answered by the local path, single attempt, no retry. `generate` is
//! total — it never returns an error to its caller.

use std::sync::Arc;

use tracing::{debug, info, warn};

use nebula_analysis::{synthesize, ScreenAnalysis};
use nebula_core::ChatMessage;
use nebula_llm::{LlmProvider, OpenAIProvider, ProviderConfig};

/// Fixed system instruction sent with every external generation request.
const SYSTEM_PROMPT: &str = "\
Você é o NEBULA AGENT, um assistente de IA especializado em:

1. Geração de cenários Gherkin para testes BDD (Behavior-Driven Development)
2. Análise de telas e fluxos de aplicações web e mobile
3. Automação de testes com compreensão profunda de QA

Quando o usuário pedir para gerar Gherkin:
1. Analise a intenção do usuário
2. Identifique o tipo de funcionalidade
3. Gere um cenário Gherkin bem estruturado com Given, When e Then
4. Os passos devem ser específicos e testáveis

Sempre responda em português (pt-BR) e seja conciso mas completo.";

/// Number of prior turns included in the external prompt.
const HISTORY_WINDOW: usize = 5;

/// Two-path scenario generator: external provider when available, local
/// synthesizer otherwise and on any failure.
pub struct GenerationGateway {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl GenerationGateway {
    /// Create a gateway over an optional provider.
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { provider }
    }

    /// Build a gateway from the environment. Without an API key the
    /// gateway runs purely on the local synthesizer.
    pub fn from_env() -> Self {
        let config = ProviderConfig::from_env();
        if config.is_configured() {
            info!(model = %config.model, "external generation service configured");
            Self::new(Some(Arc::new(OpenAIProvider::new(config))))
        } else {
            info!("no API key configured; using local scenario synthesizer");
            Self::new(None)
        }
    }

    /// Whether an external provider is configured.
    pub fn llm_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Generate a scenario document for the analysis and intent.
    ///
    /// Never fails: provider absence selects the local path, provider
    /// errors are logged and recovered by the local path.
    pub async fn generate(
        &self,
        analysis: &ScreenAnalysis,
        intent: &str,
        history: &[ChatMessage],
    ) -> String {
        let Some(provider) = &self.provider else {
            return synthesize(analysis, intent);
        };

        let mut messages: Vec<ChatMessage> = history
            .iter()
            .rev()
            .take(HISTORY_WINDOW)
            .rev()
            .cloned()
            .collect();
        messages.push(ChatMessage::user(build_context_prompt(analysis, intent)));

        match provider
            .send_message(messages, Some(SYSTEM_PROMPT.to_string()))
            .await
        {
            Ok(reply) => {
                debug!(provider = provider.name(), "external generation succeeded");
                extract_scenario_block(&reply)
            }
            Err(err) => {
                warn!(
                    provider = provider.name(),
                    error = %err,
                    "external generation failed; falling back to local synthesizer"
                );
                synthesize(analysis, intent)
            }
        }
    }
}

/// Render the context-and-requirements prompt for the final user turn.
fn build_context_prompt(analysis: &ScreenAnalysis, intent: &str) -> String {
    let elements = analysis
        .elements
        .iter()
        .map(|e| e.label.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let keywords = analysis.keywords.join(", ");

    format!(
        "Gere um cenário Gherkin completo e bem estruturado baseado nas seguintes informações:\n\n\
         **Contexto da Tela:**\n\
         - Tipo: {}\n\
         - Confiança: {:.0}%\n\
         - Elementos: {}\n\
         - Palavras-chave: {}\n\n\
         **Intenção do Usuário:** {}\n\n\
         **Requisitos do Gherkin:**\n\
         1. Deve começar com a tag Feature:\n\
         2. Incluir uma descrição clara\n\
         3. Gerar um ou mais Scenarios\n\
         4. Cada Scenario deve ter Given, When e Then\n\
         5. Os passos devem ser específicos e testáveis\n\
         6. Use linguagem natural em português\n\n\
         Forneça o Gherkin em um bloco de código markdown com ```gherkin```.",
        analysis.category,
        analysis.confidence * 100.0,
        elements,
        keywords,
        intent
    )
}

/// Extract the scenario from a provider reply.
///
/// Prefers a ```gherkin fenced block, then any fenced block, then the raw
/// trimmed reply — replies without fencing are tolerated.
fn extract_scenario_block(reply: &str) -> String {
    if let Some(block) = extract_fence(reply, "```gherkin") {
        return block;
    }
    if let Some(block) = extract_fence(reply, "```") {
        return block;
    }
    reply.trim().to_string()
}

/// Contents of the first fence opened by `tag`, up to the closing fence or
/// the end of the reply.
fn extract_fence(reply: &str, tag: &str) -> Option<String> {
    let start = reply.find(tag)? + tag.len();
    let rest = &reply[start..];
    let end = rest.find("```").unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}
