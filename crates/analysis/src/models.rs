//! Analysis Models
//!
//! Data structures for screen analysis: the closed screen-category and
//! element-kind enumerations, inferred UI elements, and the immutable
//! `ScreenAnalysis` aggregate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::classify;
use crate::extractor::{default_elements, extract_elements};
use crate::keywords::extract_keywords;
use crate::scoring::score_confidence;

/// Screen categories a description can be classified into.
///
/// The order of variants matches the classifier's priority order; earlier
/// categories win when several trigger sets match the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenCategory {
    Login,
    Registration,
    Checkout,
    Dashboard,
    /// Generic form screen
    Form,
    List,
    Detail,
    Modal,
    Error,
    Success,
    /// No trigger matched
    Unknown,
}

impl ScreenCategory {
    /// Wire/display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            ScreenCategory::Login => "login",
            ScreenCategory::Registration => "registration",
            ScreenCategory::Checkout => "checkout",
            ScreenCategory::Dashboard => "dashboard",
            ScreenCategory::Form => "form",
            ScreenCategory::List => "list",
            ScreenCategory::Detail => "detail",
            ScreenCategory::Modal => "modal",
            ScreenCategory::Error => "error",
            ScreenCategory::Success => "success",
            ScreenCategory::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ScreenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Kinds of interactive UI elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Input,
    Button,
    Link,
    Dropdown,
    Checkbox,
    Radio,
    Textarea,
    Select,
    Table,
    Card,
    Modal,
    Alert,
}

impl ElementKind {
    /// Wire/display name for the kind
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementKind::Input => "input",
            ElementKind::Button => "button",
            ElementKind::Link => "link",
            ElementKind::Dropdown => "dropdown",
            ElementKind::Checkbox => "checkbox",
            ElementKind::Radio => "radio",
            ElementKind::Textarea => "textarea",
            ElementKind::Select => "select",
            ElementKind::Table => "table",
            ElementKind::Card => "card",
            ElementKind::Modal => "modal",
            ElementKind::Alert => "alert",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An interactive UI element inferred to exist on a screen.
///
/// Immutable after creation; owned by the `ScreenAnalysis` that created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UIElement {
    /// Element kind
    pub kind: ElementKind,
    /// Display text, e.g. "Senha"
    pub label: String,
    /// Derived identifier: lower-cased label with spaces replaced by
    /// underscores, unless overridden via `with_name`
    pub name: String,
    /// Whether the element is required
    pub required: bool,
    /// Placeholder text, if any
    pub placeholder: String,
}

impl UIElement {
    /// Create a new element with the identifier derived from the label
    pub fn new(kind: ElementKind, label: impl Into<String>) -> Self {
        let label = label.into();
        let name = label.to_lowercase().replace(' ', "_");
        Self {
            kind,
            label,
            name,
            required: false,
            placeholder: String::new(),
        }
    }

    /// Override the derived identifier
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark the element as required
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Render this element as a Gherkin interaction step.
    pub fn gherkin_step(&self) -> String {
        match self.kind {
            ElementKind::Input => {
                format!("E eu preencho o campo \"{}\" com \"<valor>\"", self.label)
            }
            ElementKind::Button => format!("E eu clico no botão \"{}\"", self.label),
            ElementKind::Checkbox => {
                format!("E eu marco a caixa de seleção \"{}\"", self.label)
            }
            ElementKind::Dropdown => {
                format!("E eu seleciono \"<opção>\" no dropdown \"{}\"", self.label)
            }
            _ => format!("E eu interajo com \"{}\"", self.label),
        }
    }
}

/// Immutable analysis of a screen description.
///
/// All derived fields are computed once in [`ScreenAnalysis::analyze`] and
/// never mutated. `elements` is guaranteed non-empty: when extraction finds
/// nothing, the category's canonical default set is injected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenAnalysis {
    /// The text the analysis was derived from
    pub source_text: String,
    /// Detected screen category
    pub category: ScreenCategory,
    /// Extracted (or defaulted) elements, in extraction order
    pub elements: Vec<UIElement>,
    /// Up to 10 deduplicated salient terms; no ordering guarantee
    pub keywords: Vec<String>,
    /// Heuristic confidence in [0.5, 1.0]; a relative signal, not a
    /// calibrated probability
    pub confidence: f64,
}

impl ScreenAnalysis {
    /// Analyze a screen description.
    ///
    /// Confidence is scored against the raw extraction result, before
    /// default injection, so the element increment reflects whether the
    /// text itself named any elements.
    pub fn analyze(source_text: impl Into<String>) -> Self {
        let source_text = source_text.into();
        let category = classify(&source_text);
        let extracted = extract_elements(&source_text);
        let keywords = extract_keywords(&source_text);
        let confidence = score_confidence(category, &extracted, &keywords);

        let elements = if extracted.is_empty() {
            debug!(%category, "no elements extracted; using category defaults");
            default_elements(category)
        } else {
            extracted
        };

        Self {
            source_text,
            category,
            elements,
            keywords,
            confidence,
        }
    }
}
