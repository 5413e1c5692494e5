//! Screen Classifier
//!
//! Maps a free-text screen description to a `ScreenCategory` by testing an
//! ordered trigger-term table against the lower-cased text. The first
//! category with a matching term wins; ordering is the deliberate tie-break
//! when several trigger sets could match the same text.

use crate::models::ScreenCategory;

/// Ordered trigger table. Earlier entries take precedence; the terms are
/// matched as plain substrings of the lower-cased description. Some terms
/// overlap with common field labels ("senha" is both a login trigger and a
/// field name) — the table is kept exactly as shipped, overlaps included.
const CATEGORY_TRIGGERS: &[(ScreenCategory, &[&str])] = &[
    (
        ScreenCategory::Login,
        &["login", "logar", "autenticação", "senha", "usuário"],
    ),
    (
        ScreenCategory::Registration,
        &["cadastro", "registrar", "criar conta", "inscrição"],
    ),
    (
        ScreenCategory::Checkout,
        &["checkout", "pagamento", "compra", "carrinho", "pedido"],
    ),
    (
        ScreenCategory::Dashboard,
        &["dashboard", "início", "home", "painel"],
    ),
    (
        ScreenCategory::Form,
        &["formulário", "form", "preencher", "enviar"],
    ),
    (
        ScreenCategory::List,
        &["lista", "tabela", "resultado", "busca"],
    ),
    (
        ScreenCategory::Detail,
        &["detalhe", "detalhes", "visualizar", "ver"],
    ),
    (
        ScreenCategory::Modal,
        &["modal", "diálogo", "popup", "janela"],
    ),
    (
        ScreenCategory::Error,
        &["erro", "falha", "problema", "aviso"],
    ),
    (
        ScreenCategory::Success,
        &["sucesso", "concluído", "realizado", "confirmado"],
    ),
];

/// Classify a screen description.
///
/// Pure function with no failure mode: returns `ScreenCategory::Unknown`
/// when no trigger matches.
pub fn classify(text: &str) -> ScreenCategory {
    let lower = text.to_lowercase();

    for (category, triggers) in CATEGORY_TRIGGERS {
        if triggers.iter().any(|t| lower.contains(t)) {
            return *category;
        }
    }

    ScreenCategory::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_login() {
        assert_eq!(classify("Tela de Login do sistema"), ScreenCategory::Login);
        assert_eq!(classify("preciso logar na conta"), ScreenCategory::Login);
    }

    #[test]
    fn test_classify_checkout() {
        assert_eq!(
            classify("carrinho pronto para pagamento"),
            ScreenCategory::Checkout
        );
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("xyz abc"), ScreenCategory::Unknown);
        assert_eq!(classify(""), ScreenCategory::Unknown);
    }

    #[test]
    fn test_priority_tie_break() {
        // "senha" (login trigger) appears alongside "checkout": login is
        // earlier in the table and wins.
        assert_eq!(
            classify("tela de checkout pedindo a senha do cartão"),
            ScreenCategory::Login
        );
        // Without a login trigger the same text is checkout.
        assert_eq!(
            classify("tela de checkout do cartão"),
            ScreenCategory::Checkout
        );
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("DASHBOARD PRINCIPAL"), ScreenCategory::Dashboard);
    }

    #[test]
    fn test_classify_idempotent() {
        let text = "formulário de contato com botão enviar";
        assert_eq!(classify(text), classify(text));
    }
}
