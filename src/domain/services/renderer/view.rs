//! Serializable document view
//!
//! The merged AST after placeholder substitution and operation rendering.
//! Field declaration order is the output order for every format.

use serde::Serialize;

use crate::domain::entities::{OrderingPolicy, Randomness, Severity};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub guidelines: Vec<GuidelineView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_contract: Option<ResponseView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub determinism: Option<DeterminismView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleView {
    pub id: String,
    pub severity: Severity,
    pub text: String,
    pub why: String,
    pub on_violation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidelineView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ExampleView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExampleView {
    Scalar(String),
    Keyed {
        key: String,
        value: String,
    },
    Phased {
        phases: Vec<PhaseView>,
    },
    Actions {
        #[serde(rename = "do")]
        steps: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseView {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brevity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatting: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forbidden_phrases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseView {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_blocks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patches: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub name: String,
    pub brief: String,
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeterminismView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<OrderingPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub randomness: Option<Randomness>,
}

impl DocumentView {
    pub fn is_empty(&self) -> bool {
        *self == DocumentView::default()
    }
}
