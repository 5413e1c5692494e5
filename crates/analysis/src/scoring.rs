//! Confidence Scorer
//!
//! Combines classifier certainty, element extraction yield, and keyword
//! richness into a bounded heuristic score. This is a relative confidence
//! signal, not a calibrated probability.

use crate::models::{ScreenCategory, UIElement};

/// Score an analysis.
///
/// Deterministic additive formula: base 0.5, +0.2 for a known category,
/// +0.2 when extraction found elements, +0.1 when more than 5 keywords
/// survived filtering, clamped to 1.0. `elements` must be the raw
/// extraction result — the caller injects category defaults only after
/// scoring, so the element increment reflects genuine signal in the text.
pub fn score_confidence(
    category: ScreenCategory,
    elements: &[UIElement],
    keywords: &[String],
) -> f64 {
    let mut confidence: f64 = 0.5;

    if category != ScreenCategory::Unknown {
        confidence += 0.2;
    }
    if !elements.is_empty() {
        confidence += 0.2;
    }
    if keywords.len() > 5 {
        confidence += 0.1;
    }

    confidence.min(1.0)
}
