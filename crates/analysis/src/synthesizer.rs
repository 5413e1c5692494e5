//! Scenario Synthesizer
//!
//! Renders a Feature/Scenario/Given/When/Then document from a
//! `ScreenAnalysis` and the user's stated intent, using fixed per-category
//! templates and per-element step rules. Pure and total: missing data
//! always resolves to a documented fallback phrase.

use crate::models::{ScreenAnalysis, ScreenCategory};

/// Maximum number of elements rendered into the When block.
const MAX_WHEN_STEPS: usize = 3;

/// Maximum scenario title length before truncation.
const MAX_SCENARIO_TITLE: usize = 80;

/// Synthesize a Gherkin scenario document.
pub fn synthesize(analysis: &ScreenAnalysis, intent: &str) -> String {
    format!(
        "Feature: {}\n  Como um usuário\n  Quero {}\n  Para validar a funcionalidade\n\n  Scenario: {}\n{}\n{}\n{}",
        feature_name(analysis.category),
        intent,
        scenario_name(intent),
        given_step(analysis.category),
        when_steps(analysis),
        then_step(analysis.category),
    )
}

/// Feature title for a category.
fn feature_name(category: ScreenCategory) -> &'static str {
    match category {
        ScreenCategory::Login => "Autenticação de Usuário",
        ScreenCategory::Registration => "Registro de Novo Usuário",
        ScreenCategory::Checkout => "Processo de Checkout",
        ScreenCategory::Dashboard => "Acesso ao Dashboard",
        ScreenCategory::Form => "Preenchimento de Formulário",
        ScreenCategory::List => "Visualização de Lista",
        _ => "Funcionalidade da Aplicação",
    }
}

/// Scenario title: the intent truncated to 80 characters, with an ellipsis
/// suffix when truncation occurs.
fn scenario_name(intent: &str) -> String {
    if intent.chars().count() > MAX_SCENARIO_TITLE {
        let truncated: String = intent.chars().take(MAX_SCENARIO_TITLE).collect();
        format!("{}...", truncated)
    } else {
        intent.to_string()
    }
}

/// Single fixed precondition line for a category.
fn given_step(category: ScreenCategory) -> String {
    let step = match category {
        ScreenCategory::Login => "Dado que estou na página de login",
        ScreenCategory::Registration => "Dado que estou na página de registro",
        ScreenCategory::Checkout => "Dado que tenho itens no carrinho",
        ScreenCategory::Dashboard => "Dado que estou autenticado no sistema",
        ScreenCategory::Form => "Dado que estou na página com o formulário",
        _ => "Dado que estou na aplicação",
    };
    format!("    {}", step)
}

/// One step per element, capped at the first three in extraction order.
fn when_steps(analysis: &ScreenAnalysis) -> String {
    let steps: Vec<String> = analysis
        .elements
        .iter()
        .take(MAX_WHEN_STEPS)
        .map(|element| format!("    {}", element.gherkin_step()))
        .collect();

    if steps.is_empty() {
        // Unreachable given the extractor's non-empty guarantee; kept as a
        // documented fallback so the synthesizer stays total on its own.
        "    Quando eu realizo uma ação".to_string()
    } else {
        steps.join("\n")
    }
}

/// Single fixed postcondition line for a category.
fn then_step(category: ScreenCategory) -> String {
    let step = match category {
        ScreenCategory::Login => "Então devo ser redirecionado para o dashboard",
        ScreenCategory::Registration => "Então devo receber uma mensagem de sucesso",
        ScreenCategory::Checkout => "Então o pedido deve ser confirmado",
        ScreenCategory::Dashboard => "Então devo visualizar meus dados",
        ScreenCategory::Form => "Então o formulário deve ser enviado com sucesso",
        _ => "Então a ação deve ser bem-sucedida",
    };
    format!("    {}", step)
}
