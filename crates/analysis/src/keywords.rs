//! Keyword Extractor
//!
//! Derives a bounded, deduplicated set of salient terms from a screen
//! description. Keywords feed the confidence score and display output only;
//! callers must not rely on their order.

/// Portuguese stop words discarded during extraction.
const STOP_WORDS: &[&str] = &[
    "o", "a", "de", "da", "do", "e", "ou", "com", "para", "em", "que", "um", "uma", "os", "as",
    "dos", "das", "é", "são",
];

/// Punctuation stripped from token edges. Quotes are deliberately not in
/// this set; quoted labels keep their quotes as keywords.
const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Maximum number of keywords returned.
pub const MAX_KEYWORDS: usize = 10;

/// Extract up to [`MAX_KEYWORDS`] keywords from a description.
///
/// Tokens are split on whitespace and lower-cased; the length filter (> 3
/// characters) applies to the raw token before punctuation stripping.
/// Duplicates are dropped keeping the first occurrence, which makes the
/// result deterministic even though no ordering is guaranteed to callers.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut keywords: Vec<String> = Vec::new();

    for token in lower.split_whitespace() {
        if token.chars().count() <= 3 || STOP_WORDS.contains(&token) {
            continue;
        }
        let stripped = token.trim_matches(|c| EDGE_PUNCTUATION.contains(&c));
        if stripped.is_empty() {
            continue;
        }
        if !keywords.iter().any(|k| k == stripped) {
            keywords.push(stripped.to_string());
        }
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_and_short_tokens_dropped() {
        let keywords = extract_keywords("a tela de login com o botão para enviar");
        assert!(keywords.contains(&"tela".to_string()));
        assert!(keywords.contains(&"login".to_string()));
        assert!(keywords.contains(&"botão".to_string()));
        assert!(keywords.contains(&"enviar".to_string()));
        assert!(!keywords.iter().any(|k| k == "de" || k == "com" || k == "o"));
    }

    #[test]
    fn test_short_tokens_dropped() {
        assert!(extract_keywords("xyz abc oi").is_empty());
    }

    #[test]
    fn test_trailing_punctuation_stripped() {
        let keywords = extract_keywords("dashboard, painel. relatório!");
        assert_eq!(keywords, vec!["dashboard", "painel", "relatório"]);
    }

    #[test]
    fn test_deduplication() {
        let keywords = extract_keywords("senha senha senha campo campo");
        assert_eq!(keywords, vec!["senha", "campo"]);
    }

    #[test]
    fn test_bounded_to_ten() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliett kilo lima";
        let keywords = extract_keywords(text);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
    }

    #[test]
    fn test_login_description_has_rich_keywords() {
        let keywords = extract_keywords(
            "Tela de Login com campos 'Usuário', 'Senha', botão 'Entrar' e link 'Esqueci a Senha'.",
        );
        assert!(keywords.len() > 5);
        assert!(keywords.len() <= MAX_KEYWORDS);
    }
}
