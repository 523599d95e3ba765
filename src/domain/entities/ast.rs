//! Rule/guideline AST
//!
//! The in-memory tree a unit's `build()` accumulates. After include resolution
//! the root unit owns a merged copy of it.

use serde::{Deserialize, Serialize};

use super::operation::Operation;

/// Rule severity, ordered low < medium < high < critical
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hard constraint
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rule {
    pub id: String,
    pub severity: Option<Severity>,
    pub text: Option<String>,
    pub why: Option<String>,
    pub on_violation: Option<String>,
}

impl Rule {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// First required field still unset, in declaration order
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.severity.is_none() {
            Some("severity")
        } else if is_blank(&self.text) {
            Some("text")
        } else if is_blank(&self.why) {
            Some("why")
        } else if is_blank(&self.on_violation) {
            Some("on_violation")
        } else {
            None
        }
    }

    pub fn is_closed(&self) -> bool {
        self.missing_field().is_none()
    }
}

fn is_blank(value: &Option<String>) -> bool {
    !matches!(value.as_deref(), Some(s) if !s.trim().is_empty())
}

/// One entry of an example body: plain text or a typed operation
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Text(String),
    Op(Operation),
}

impl Step {
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Step::Text(t) if t.is_empty())
    }
}

impl From<&str> for Step {
    fn from(value: &str) -> Self {
        Step::Text(value.to_string())
    }
}

impl From<String> for Step {
    fn from(value: String) -> Self {
        Step::Text(value)
    }
}

impl From<Operation> for Step {
    fn from(value: Operation) -> Self {
        Step::Op(value)
    }
}

/// A named workflow phase
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub id: String,
    pub text: Step,
}

/// Guideline example variants
#[derive(Debug, Clone, PartialEq)]
pub enum Example {
    Scalar(Step),
    Keyed { key: String, value: Step },
    Phased(Vec<Phase>),
    Actions(Vec<Step>),
}

/// A softer, example-driven instruction
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Guideline {
    pub id: String,
    pub text: Option<String>,
    pub examples: Vec<Example>,
}

impl Guideline {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub language: Option<String>,
    pub tone: Option<String>,
    pub brevity: Option<String>,
    pub formatting: Option<String>,
    pub forbidden_phrases: Vec<String>,
}

impl Style {
    /// Fields set on `other` win; forbidden phrases accumulate.
    fn absorb(&mut self, other: &Style) {
        overwrite(&mut self.language, &other.language);
        overwrite(&mut self.tone, &other.tone);
        overwrite(&mut self.brevity, &other.brevity);
        overwrite(&mut self.formatting, &other.formatting);
        self.forbidden_phrases
            .extend(other.forbidden_phrases.iter().cloned());
    }
}

/// A response section the agent must (or may) produce
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub brief: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseContract {
    pub sections: Vec<Section>,
    pub code_blocks: Option<String>,
    pub patches: Option<String>,
}

impl ResponseContract {
    fn absorb(&mut self, other: &ResponseContract) {
        self.sections.extend(other.sections.iter().cloned());
        overwrite(&mut self.code_blocks, &other.code_blocks);
        overwrite(&mut self.patches, &other.patches);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingPolicy {
    Stable,
    Relaxed,
}

impl OrderingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingPolicy::Stable => "stable",
            OrderingPolicy::Relaxed => "relaxed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Randomness {
    Off,
    Low,
    High,
}

impl Randomness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Randomness::Off => "off",
            Randomness::Low => "low",
            Randomness::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Determinism {
    pub ordering: Option<OrderingPolicy>,
    pub randomness: Option<Randomness>,
}

impl Determinism {
    fn absorb(&mut self, other: &Determinism) {
        if other.ordering.is_some() {
            self.ordering = other.ordering;
        }
        if other.randomness.is_some() {
            self.randomness = other.randomness;
        }
    }
}

/// The tree one unit builds (or, after merging, the tree a root owns)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ast {
    pub purpose: Option<String>,
    pub rules: Vec<Rule>,
    pub guidelines: Vec<Guideline>,
    pub style: Option<Style>,
    pub response: Option<ResponseContract>,
    pub determinism: Option<Determinism>,
}

impl Ast {
    /// Append a copy of `other`'s rules and guidelines, and overlay its singletons.
    ///
    /// Duplicated ids are kept as-is. `purpose` is owned by the root and never
    /// absorbed.
    pub fn absorb(&mut self, other: &Ast) {
        self.rules.extend(other.rules.iter().cloned());
        self.guidelines.extend(other.guidelines.iter().cloned());

        if let Some(style) = &other.style {
            self.style.get_or_insert_with(Style::default).absorb(style);
        }
        if let Some(response) = &other.response {
            self.response
                .get_or_insert_with(ResponseContract::default)
                .absorb(response);
        }
        if let Some(determinism) = &other.determinism {
            self.determinism
                .get_or_insert_with(Determinism::default)
                .absorb(determinism);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.purpose.is_none()
            && self.rules.is_empty()
            && self.guidelines.is_empty()
            && self.style.is_none()
            && self.response.is_none()
            && self.determinism.is_none()
    }
}

fn overwrite(target: &mut Option<String>, source: &Option<String>) {
    if source.is_some() {
        target.clone_from(source);
    }
}
