//! Element Extractor
//!
//! Derives interactive UI elements from a screen description by running
//! three pattern rules — "campo …", "botão …", "link …" — against the
//! lower-cased text, in that fixed pass order. When no rule matches, the
//! detected category's canonical default set is used instead, so callers
//! never see an empty element list.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{ElementKind, ScreenCategory, UIElement};

/// The three syntactic cues, in pass order. Matches are non-overlapping and
/// the capture is greedy up to the next quote, which mirrors how labels are
/// written in the descriptions ("campos 'Usuário', 'Senha'" yields a single
/// match per cue occurrence).
fn extraction_rules() -> &'static [(ElementKind, Regex)] {
    static RULES: OnceLock<Vec<(ElementKind, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            (
                ElementKind::Input,
                Regex::new(r#"campos?\s+['"]?([^'"]+)['"]?"#).unwrap(),
            ),
            (
                ElementKind::Button,
                Regex::new(r#"botão[s]?\s+['"]?([^'"]+)['"]?"#).unwrap(),
            ),
            (
                ElementKind::Link,
                Regex::new(r#"links?\s+['"]?([^'"]+)['"]?"#).unwrap(),
            ),
        ]
    })
}

/// Extract UI elements from a screen description.
///
/// Extraction order follows pattern-scan order across the three rule
/// passes, not positional order in the text. The input is lower-cased
/// first, so labels come out lower-case. May return an empty list; see
/// [`default_elements`] for the fallback tier.
pub fn extract_elements(text: &str) -> Vec<UIElement> {
    let lower = text.to_lowercase();
    let mut elements = Vec::new();

    for (kind, pattern) in extraction_rules() {
        for captures in pattern.captures_iter(&lower) {
            if let Some(label) = captures.get(1) {
                elements.push(UIElement::new(*kind, label.as_str().trim()));
            }
        }
    }

    elements
}

/// Canonical default element set for a category.
///
/// Categories without a canonical set fall back to a two-element generic
/// input/action pair.
pub fn default_elements(category: ScreenCategory) -> Vec<UIElement> {
    match category {
        ScreenCategory::Login => vec![
            UIElement::new(ElementKind::Input, "Usuário").with_name("username"),
            UIElement::new(ElementKind::Input, "Senha").with_name("password"),
            UIElement::new(ElementKind::Button, "Entrar"),
            UIElement::new(ElementKind::Link, "Esqueci a Senha"),
        ],
        ScreenCategory::Registration => vec![
            UIElement::new(ElementKind::Input, "Nome").with_name("name"),
            UIElement::new(ElementKind::Input, "Email").with_name("email"),
            UIElement::new(ElementKind::Input, "Senha").with_name("password"),
            UIElement::new(ElementKind::Input, "Confirmar Senha").with_name("confirm_password"),
            UIElement::new(ElementKind::Button, "Criar Conta"),
        ],
        ScreenCategory::Checkout => vec![
            UIElement::new(ElementKind::Input, "Endereço").with_name("address"),
            UIElement::new(ElementKind::Input, "Cidade").with_name("city"),
            UIElement::new(ElementKind::Dropdown, "Estado"),
            UIElement::new(ElementKind::Input, "CEP").with_name("zip"),
            UIElement::new(ElementKind::Dropdown, "Método de Pagamento"),
            UIElement::new(ElementKind::Button, "Finalizar Compra"),
        ],
        ScreenCategory::Form => vec![
            UIElement::new(ElementKind::Input, "Campo 1"),
            UIElement::new(ElementKind::Input, "Campo 2"),
            UIElement::new(ElementKind::Button, "Enviar"),
        ],
        _ => vec![
            UIElement::new(ElementKind::Input, "Campo Genérico"),
            UIElement::new(ElementKind::Button, "Ação"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_login_description() {
        let elements = extract_elements(
            "Tela de Login com campos 'Usuário', 'Senha', botão 'Entrar' e link 'Esqueci a Senha'.",
        );

        // One match per cue occurrence: "campos" captures only the first
        // quoted label, then one button and one link.
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0].kind, ElementKind::Input);
        assert_eq!(elements[0].label, "usuário");
        assert_eq!(elements[1].kind, ElementKind::Button);
        assert_eq!(elements[1].label, "entrar");
        assert_eq!(elements[2].kind, ElementKind::Link);
        assert_eq!(elements[2].label, "esqueci a senha");
    }

    #[test]
    fn test_extraction_order_is_pass_order() {
        // Button appears before the input in the text, but inputs are
        // scanned first.
        let elements = extract_elements("botão 'Salvar' depois campo 'Nome'");
        assert_eq!(elements[0].kind, ElementKind::Input);
        assert_eq!(elements[1].kind, ElementKind::Button);
    }

    #[test]
    fn test_extract_nothing() {
        assert!(extract_elements("xyz abc").is_empty());
        assert!(extract_elements("").is_empty());
    }

    #[test]
    fn test_default_elements_login() {
        let elements = default_elements(ScreenCategory::Login);
        assert_eq!(elements.len(), 4);
        assert_eq!(elements[1].name, "password");
        assert_eq!(elements[2].label, "Entrar");
        assert_eq!(elements[2].name, "entrar");
    }

    #[test]
    fn test_default_elements_generic_fallback() {
        for category in [
            ScreenCategory::Unknown,
            ScreenCategory::Dashboard,
            ScreenCategory::List,
            ScreenCategory::Error,
        ] {
            let elements = default_elements(category);
            assert_eq!(elements.len(), 2);
            assert_eq!(elements[0].label, "Campo Genérico");
            assert_eq!(elements[1].label, "Ação");
        }
    }

    #[test]
    fn test_checkout_defaults_have_dropdowns() {
        let elements = default_elements(ScreenCategory::Checkout);
        assert_eq!(elements.len(), 6);
        assert_eq!(
            elements
                .iter()
                .filter(|e| e.kind == ElementKind::Dropdown)
                .count(),
            2
        );
    }
}
