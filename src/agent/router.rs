//! Intent Router
//!
//! Top-level entry point: classifies the incoming message into a
//! conversational intent via an ordered trigger-term table, runs the
//! analysis pipeline and the Generation Gateway as needed, and composes
//! the reply. Every branch appends the user turn to memory before
//! dispatch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use nebula_analysis::{classify, ScreenAnalysis};
use nebula_core::ChatRole;

use crate::agent::memory::{ConversationMemory, ScenarioRecord};
use crate::agent::screens::screen_description_for;
use crate::services::generation::GenerationGateway;

/// Conversational intents the router can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatIntent {
    GenerateScenario,
    AnalyzeScreen,
    SuggestTests,
    Help,
    Fallback,
}

/// Ordered intent rules, first match wins. A message containing both
/// generation and analysis triggers resolves to generation because that
/// rule is listed first.
const INTENT_RULES: &[(ChatIntent, &[&str])] = &[
    (
        ChatIntent::GenerateScenario,
        &["gherkin", "cenário", "teste", "automatizar", "validar", "bdd"],
    ),
    (
        ChatIntent::AnalyzeScreen,
        &["analisar", "análise", "tela", "screen", "descrever"],
    ),
    (
        ChatIntent::SuggestTests,
        &["sugerir", "casos de teste", "cobertura", "o que testar"],
    ),
    (
        ChatIntent::Help,
        &["ajuda", "help", "como", "o que você faz", "funcionalidades"],
    ),
];

/// Detect the intent of a message by first-match keyword membership
/// against the lower-cased text.
pub fn detect_intent(message: &str) -> ChatIntent {
    let lower = message.to_lowercase();
    for (intent, triggers) in INTENT_RULES {
        if triggers.iter().any(|t| lower.contains(t)) {
            return *intent;
        }
    }
    ChatIntent::Fallback
}

/// The conversational agent: owns the Generation Gateway and routes
/// messages against a caller-owned [`ConversationMemory`].
pub struct Agent {
    gateway: GenerationGateway,
}

impl Agent {
    /// Create an agent over the given gateway.
    pub fn new(gateway: GenerationGateway) -> Self {
        Self { gateway }
    }

    /// Create an agent configured from the environment.
    pub fn from_env() -> Self {
        Self::new(GenerationGateway::from_env())
    }

    /// Whether the external generation service is configured.
    pub fn llm_available(&self) -> bool {
        self.gateway.llm_available()
    }

    /// Route a message and compose the reply.
    ///
    /// Total over its input: every branch resolves to a reply string.
    pub async fn route(&self, message: &str, memory: &mut ConversationMemory) -> String {
        memory.push_turn(ChatRole::User, message);

        let intent = detect_intent(message);
        debug!(?intent, "routing message");

        match intent {
            ChatIntent::GenerateScenario => self.generate_scenario(message, memory).await,
            ChatIntent::AnalyzeScreen => self.analyze_screen(message, memory),
            ChatIntent::SuggestTests => self.suggest_tests(message),
            ChatIntent::Help => help_reply(),
            ChatIntent::Fallback => fallback_reply(message),
        }
    }

    /// Branch 1: classify, analyze, generate, record, and embed the
    /// document in a rich reply.
    async fn generate_scenario(&self, message: &str, memory: &mut ConversationMemory) -> String {
        let description = screen_description_for(message);
        let analysis = ScreenAnalysis::analyze(description);
        memory.record_analysis(analysis.clone());

        let history = memory.recent_turns(5);
        let document = self.gateway.generate(&analysis, message, &history).await;
        memory.record_scenario(ScenarioRecord {
            intent: message.to_string(),
            document: document.clone(),
            category: analysis.category,
        });

        let elements = analysis
            .elements
            .iter()
            .map(|e| format!("- {} ({})", e.label, e.kind))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "**Cenário Gherkin Gerado com Sucesso!**\n\n\
             **Análise da Tela:**\n\
             - Tipo: **{}**\n\
             - Confiança: **{:.0}%**\n\
             - Elementos identificados: **{}**\n\n\
             **Cenário Gherkin:**\n\
             ```gherkin\n{}\n```\n\n\
             **Elementos Identificados na Tela:**\n{}\n\n\
             **Próximos Passos Recomendados:**\n\
             1. Revisar o cenário gerado\n\
             2. Adaptar conforme necessário para sua aplicação\n\
             3. Executar o teste automatizado\n\
             4. Validar os resultados\n\
             5. Documentar casos de teste adicionais",
            analysis.category,
            analysis.confidence * 100.0,
            analysis.elements.len(),
            document,
            elements
        )
    }

    /// Branch 2: classify and analyze only; no document generation.
    fn analyze_screen(&self, message: &str, memory: &mut ConversationMemory) -> String {
        let description = screen_description_for(message);
        let analysis = ScreenAnalysis::analyze(description);
        memory.record_analysis(analysis.clone());

        let elements = analysis
            .elements
            .iter()
            .map(|e| format!("- **{}** ({})", e.label, e.kind))
            .collect::<Vec<_>>()
            .join("\n");
        let keywords = analysis
            .keywords
            .iter()
            .map(|k| format!("`{}`", k))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "**Análise da Tela Concluída**\n\n\
             **Tipo de Tela Identificado:** **{}**\n\
             **Nível de Confiança:** **{:.0}%**\n\n\
             **Elementos Identificados ({}):**\n{}\n\n\
             **Palavras-chave Extraídas:**\n{}\n\n\
             **Sugestões de Teste:**\n\
             1. Validar todos os campos obrigatórios\n\
             2. Testar validações de entrada\n\
             3. Verificar mensagens de erro\n\
             4. Testar fluxo de sucesso\n\
             5. Validar comportamento em dispositivos móveis\n\n\
             **Deseja que eu:**\n\
             - Gere um cenário Gherkin para esta tela?\n\
             - Analise um fluxo completo?\n\
             - Sugira casos de teste adicionais?",
            analysis.category,
            analysis.confidence * 100.0,
            analysis.elements.len(),
            elements,
            keywords
        )
    }

    /// Branch 3: classification only, fixed checklist of test ideas.
    fn suggest_tests(&self, message: &str) -> String {
        let category = classify(screen_description_for(message));

        format!(
            "**Sugestões de Casos de Teste**\n\n\
             Para uma tela de **{}**, recomendo os seguintes casos de teste:\n\n\
             **Testes Funcionais:**\n\
             1. Fluxo de sucesso principal\n\
             2. Validação de campos obrigatórios\n\
             3. Mensagens de erro apropriadas\n\
             4. Comportamento após submissão\n\n\
             **Testes de Validação:**\n\
             1. Validação de formato (emails, telefones, etc)\n\
             2. Validação de segurança (senhas, dados sensíveis)\n\
             3. Validação de comprimento de campos\n\
             4. Caracteres especiais e injeção\n\n\
             **Testes de UX/UI:**\n\
             1. Responsividade em diferentes dispositivos\n\
             2. Acessibilidade (WCAG)\n\
             3. Navegação por teclado\n\
             4. Consistência visual\n\n\
             **Testes de Performance:**\n\
             1. Tempo de carregamento\n\
             2. Requisições simultâneas\n\
             3. Uso de memória\n\n\
             Deseja que eu gere Gherkin para algum destes casos?",
            category
        )
    }
}

/// Branch 4: fixed capability description; no classification runs.
fn help_reply() -> String {
    "**Bem-vindo ao Nebula Agent!**\n\n\
     Sou um assistente especializado em testes automatizados e BDD. Aqui está o que posso fazer:\n\n\
     **Geração de Gherkin:**\n\
     - Gerar cenários de teste em Gherkin\n\
     - Criar múltiplos casos de teste\n\
     - Adaptar para diferentes contextos\n\n\
     **Análise de Telas:**\n\
     - Identificar elementos de UI\n\
     - Classificar tipo de tela\n\
     - Sugerir fluxos de teste\n\n\
     **Consultoria de Testes:**\n\
     - Recomendar casos de teste\n\
     - Sugerir estratégias de cobertura\n\
     - Indicar melhores práticas\n\n\
     **Exemplos de Comandos:**\n\
     - \"Gerar um cenário Gherkin para login\"\n\
     - \"Analisar a tela de checkout\"\n\
     - \"Que casos de teste devo criar?\"\n\
     - \"Criar teste para validação de email\"\n\n\
     Como posso ajudá-lo hoje?"
        .to_string()
}

/// Branch 5: echo the message and suggest example commands.
fn fallback_reply(message: &str) -> String {
    format!(
        "**Entendi sua solicitação!**\n\n\
         Você disse: *\"{}\"*\n\n\
         Sou especializado em:\n\
         - Gerar cenários Gherkin para testes automatizados\n\
         - Analisar telas e identificar elementos\n\
         - Sugerir casos de teste e estratégias\n\
         - Validar funcionalidades com BDD\n\n\
         **Tente me pedir para:**\n\
         - \"Gerar um cenário Gherkin para uma tela de login\"\n\
         - \"Analisar a tela de checkout\"\n\
         - \"Que casos de teste devo criar para cadastro?\"\n\
         - \"Sugerir cobertura de testes\"\n\n\
         Ou simplesmente descreva a tela que deseja testar, o fluxo ou o resultado esperado.",
        message
    )
}
