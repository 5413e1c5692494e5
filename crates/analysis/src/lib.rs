//! Nebula Analysis
//!
//! The pure screen-analysis pipeline: classifies a free-text screen
//! description into a screen category, extracts interactive UI elements,
//! derives keywords, scores confidence, and synthesizes a deterministic
//! Gherkin scenario from the result.
//!
//! Every function in this crate is total over its input domain: absence of
//! data resolves to a documented fallback, never an error. No I/O happens
//! here.

pub mod classifier;
pub mod extractor;
pub mod keywords;
pub mod models;
pub mod scoring;
pub mod synthesizer;

pub use classifier::classify;
pub use extractor::{default_elements, extract_elements};
pub use keywords::extract_keywords;
pub use models::{ElementKind, ScreenAnalysis, ScreenCategory, UIElement};
pub use scoring::score_confidence;
pub use synthesizer::synthesize;
