//! Multi-target renderer
//!
//! Turns a merged AST into one document in a given format. Rendering happens in
//! two steps: the AST is lowered to a [`DocumentView`] (operations rendered to
//! pseudo-syntax, placeholders substituted), then the view is serialized.
//!
//! Every format shares the field order
//! `purpose → rules → guidelines → style → response_contract → determinism`.

mod markup;
mod view;

pub use view::{
    DeterminismView, DocumentView, ExampleView, GuidelineView, PhaseView, ResponseView, RuleView,
    SectionView, StyleView,
};

use crate::domain::entities::{Ast, Example, Rule, Step, UnitKind};
use crate::domain::services::include_resolver::MergedAst;
use crate::domain::services::pseudo_syntax;
use crate::domain::services::variable_resolver::{substitute, VariableResolver};
use crate::domain::value_objects::Format;

/// A rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub format: Format,
    pub content: String,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("{unit}: unresolved placeholder {{{{ {name} }}}}")]
    UnresolvedPlaceholder { unit: String, name: String },

    #[error("{unit}: rule '{rule}' is missing required field '{field}'")]
    IncompleteRule {
        unit: String,
        rule: String,
        field: String,
    },

    #[error("{unit}: failed to serialize {format}: {message}")]
    Serialize {
        unit: String,
        format: Format,
        message: String,
    },
}

impl RenderError {
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::UnresolvedPlaceholder { .. } => "unresolved_placeholder",
            RenderError::IncompleteRule { .. } => "missing_required_field",
            RenderError::Serialize { .. } => "serialize_failed",
        }
    }
}

/// Renders merged ASTs for one format
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    format: Format,
    variables: Option<VariableResolver<'a>>,
    strict: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            variables: None,
            strict: false,
        }
    }

    /// Substitute placeholders through this resolver (the compile context)
    pub fn with_variables(mut self, variables: VariableResolver<'a>) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Fail on unresolved placeholders instead of leaving them literal
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn render(&self, merged: &MergedAst) -> Result<Document, RenderError> {
        let unit = format!("{}:{}", merged.kind, merged.id);

        if merged.kind == UnitKind::Include {
            return Ok(Document {
                format: self.format,
                content: String::new(),
            });
        }

        let view = self.view(&unit, &merged.ast)?;
        let content = self.serialize(&unit, &view)?;

        tracing::debug!(unit = %unit, format = %self.format, bytes = content.len(), "rendered document");
        Ok(Document {
            format: self.format,
            content,
        })
    }

    /// Lower an AST to its serializable view
    pub fn view(&self, unit: &str, ast: &Ast) -> Result<DocumentView, RenderError> {
        let text = |value: &str| self.substitute(unit, value);
        let optional = |value: &Option<String>| value.as_deref().map(text).transpose();

        let rules = ast
            .rules
            .iter()
            .map(|rule| self.rule(unit, rule))
            .collect::<Result<Vec<_>, _>>()?;

        let guidelines = ast
            .guidelines
            .iter()
            .map(|guideline| {
                Ok(GuidelineView {
                    id: guideline.id.clone(),
                    text: optional(&guideline.text)?,
                    examples: guideline
                        .examples
                        .iter()
                        .map(|example| self.example(unit, example))
                        .collect::<Result<_, _>>()?,
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        let style = match &ast.style {
            Some(style) => Some(StyleView {
                language: optional(&style.language)?,
                tone: optional(&style.tone)?,
                brevity: optional(&style.brevity)?,
                formatting: optional(&style.formatting)?,
                forbidden_phrases: style
                    .forbidden_phrases
                    .iter()
                    .map(|phrase| text(phrase))
                    .collect::<Result<_, _>>()?,
            }),
            None => None,
        };

        let response_contract = match &ast.response {
            Some(response) => Some(ResponseView {
                sections: response
                    .sections
                    .iter()
                    .map(|section| {
                        Ok(SectionView {
                            name: section.name.clone(),
                            brief: text(&section.brief)?,
                            required: section.required,
                        })
                    })
                    .collect::<Result<_, RenderError>>()?,
                code_blocks: optional(&response.code_blocks)?,
                patches: optional(&response.patches)?,
            }),
            None => None,
        };

        let determinism = ast.determinism.map(|d| DeterminismView {
            ordering: d.ordering,
            randomness: d.randomness,
        });

        Ok(DocumentView {
            purpose: optional(&ast.purpose)?,
            rules,
            guidelines,
            style,
            response_contract,
            determinism,
        })
    }

    fn rule(&self, unit: &str, rule: &Rule) -> Result<RuleView, RenderError> {
        let incomplete = |field: &str| RenderError::IncompleteRule {
            unit: unit.to_string(),
            rule: rule.id.clone(),
            field: field.to_string(),
        };
        if let Some(field) = rule.missing_field() {
            return Err(incomplete(field));
        }

        let field = |value: &Option<String>, name: &str| match value {
            Some(value) => self.substitute(unit, value),
            None => Err(incomplete(name)),
        };

        Ok(RuleView {
            id: rule.id.clone(),
            severity: rule.severity.unwrap_or_default(),
            text: field(&rule.text, "text")?,
            why: field(&rule.why, "why")?,
            on_violation: field(&rule.on_violation, "on_violation")?,
        })
    }

    fn example(&self, unit: &str, example: &Example) -> Result<ExampleView, RenderError> {
        Ok(match example {
            Example::Scalar(step) => ExampleView::Scalar(self.step(unit, step)?),
            Example::Keyed { key, value } => ExampleView::Keyed {
                key: key.clone(),
                value: self.step(unit, value)?,
            },
            Example::Phased(phases) => ExampleView::Phased {
                phases: phases
                    .iter()
                    .map(|phase| {
                        Ok(PhaseView {
                            id: phase.id.clone(),
                            text: self.step(unit, &phase.text)?,
                        })
                    })
                    .collect::<Result<_, RenderError>>()?,
            },
            Example::Actions(steps) => ExampleView::Actions {
                steps: steps
                    .iter()
                    .map(|step| self.step(unit, step))
                    .collect::<Result<_, _>>()?,
            },
        })
    }

    fn step(&self, unit: &str, step: &Step) -> Result<String, RenderError> {
        match step {
            Step::Text(text) => self.substitute(unit, text),
            Step::Op(operation) => self.substitute(unit, &pseudo_syntax::render(operation)),
        }
    }

    fn substitute(&self, unit: &str, text: &str) -> Result<String, RenderError> {
        substitute(text, self.variables.as_ref(), self.strict).map_err(|e| {
            RenderError::UnresolvedPlaceholder {
                unit: unit.to_string(),
                name: e.name,
            }
        })
    }

    fn serialize(&self, unit: &str, view: &DocumentView) -> Result<String, RenderError> {
        let failed = |message: String| RenderError::Serialize {
            unit: unit.to_string(),
            format: self.format,
            message,
        };

        match self.format {
            Format::Xml => Ok(markup::render(view)),
            Format::Json => serde_json::to_string_pretty(view)
                .map(|json| json + "\n")
                .map_err(|e| failed(e.to_string())),
            Format::Yaml => serde_yaml_ng::to_string(view).map_err(|e| failed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests;
