//! Fluent builder over the unit AST
//!
//! ```ignore
//! let mut b = Builder::new();
//! b.rule("no-secrets")
//!     .critical()
//!     .text("Never commit credentials")
//!     .why("Leaked keys are unrecoverable")
//!     .on_violation("Abort and report the file");
//! b.guideline("review-flow")
//!     .text("Review in phases")
//!     .example("")
//!     .phase("scan", "Read the diff")
//!     .phase("report", "Summarize findings");
//! ```
//!
//! Re-registering a rule or guideline id on the same builder replaces the
//! earlier entry in place.

use super::ast::{
    Ast, Determinism, Example, Guideline, OrderingPolicy, Phase, Randomness, ResponseContract,
    Rule, Section, Severity, Step, Style,
};

#[derive(Debug, Default)]
pub struct Builder {
    ast: Ast,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document purpose (defaults to the unit description)
    pub fn purpose(&mut self, text: impl Into<String>) -> &mut Self {
        self.ast.purpose = Some(text.into());
        self
    }

    pub fn rule(&mut self, id: impl Into<String>) -> RuleBuilder<'_> {
        let id = id.into();
        let rules = &mut self.ast.rules;
        let index = match rules.iter().position(|r| r.id == id) {
            Some(index) => {
                rules[index] = Rule::new(id);
                index
            }
            None => {
                rules.push(Rule::new(id));
                rules.len() - 1
            }
        };
        RuleBuilder {
            rule: &mut rules[index],
        }
    }

    pub fn guideline(&mut self, id: impl Into<String>) -> GuidelineBuilder<'_> {
        let id = id.into();
        let guidelines = &mut self.ast.guidelines;
        let index = match guidelines.iter().position(|g| g.id == id) {
            Some(index) => {
                guidelines[index] = Guideline::new(id);
                index
            }
            None => {
                guidelines.push(Guideline::new(id));
                guidelines.len() - 1
            }
        };
        GuidelineBuilder {
            guideline: &mut guidelines[index],
        }
    }

    pub fn style(&mut self) -> StyleBuilder<'_> {
        StyleBuilder {
            style: self.ast.style.get_or_insert_with(Style::default),
        }
    }

    pub fn response(&mut self) -> ResponseBuilder<'_> {
        ResponseBuilder {
            response: self.ast.response.get_or_insert_with(ResponseContract::default),
        }
    }

    pub fn determinism(&mut self) -> DeterminismBuilder<'_> {
        DeterminismBuilder {
            determinism: self.ast.determinism.get_or_insert_with(Determinism::default),
        }
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn finish(self) -> Ast {
        self.ast
    }
}

pub struct RuleBuilder<'a> {
    rule: &'a mut Rule,
}

impl RuleBuilder<'_> {
    /// Set the severity; the last call wins
    pub fn severity(self, severity: Severity) -> Self {
        self.rule.severity = Some(severity);
        self
    }

    pub fn low(self) -> Self {
        self.severity(Severity::Low)
    }

    pub fn medium(self) -> Self {
        self.severity(Severity::Medium)
    }

    pub fn high(self) -> Self {
        self.severity(Severity::High)
    }

    pub fn critical(self) -> Self {
        self.severity(Severity::Critical)
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.rule.text = Some(text.into());
        self
    }

    pub fn why(self, why: impl Into<String>) -> Self {
        self.rule.why = Some(why.into());
        self
    }

    pub fn on_violation(self, action: impl Into<String>) -> Self {
        self.rule.on_violation = Some(action.into());
        self
    }
}

pub struct GuidelineBuilder<'a> {
    guideline: &'a mut Guideline,
}

impl<'a> GuidelineBuilder<'a> {
    pub fn text(self, text: impl Into<String>) -> Self {
        self.guideline.text = Some(text.into());
        self
    }

    /// Append a scalar example. Pass `""` to start a phased or action-list example.
    pub fn example(self, value: impl Into<Step>) -> ExampleBuilder<'a> {
        ExampleBuilder::push(self.guideline, Example::Scalar(value.into()))
    }

    /// Append an action-list (`do`) example
    pub fn steps<S: Into<Step>>(self, steps: impl IntoIterator<Item = S>) -> ExampleBuilder<'a> {
        let steps = steps.into_iter().map(Into::into).collect();
        ExampleBuilder::push(self.guideline, Example::Actions(steps))
    }
}

/// Refines the example most recently appended to a guideline
pub struct ExampleBuilder<'a> {
    guideline: &'a mut Guideline,
    index: usize,
}

impl<'a> ExampleBuilder<'a> {
    fn push(guideline: &'a mut Guideline, example: Example) -> Self {
        guideline.examples.push(example);
        let index = guideline.examples.len() - 1;
        Self { guideline, index }
    }

    fn current(&mut self) -> &mut Example {
        &mut self.guideline.examples[self.index]
    }

    /// Label the current scalar example
    pub fn key(mut self, name: impl Into<String>) -> Self {
        let value = match &self.guideline.examples[self.index] {
            Example::Scalar(value) | Example::Keyed { value, .. } => Some(value.clone()),
            _ => None,
        };
        if let Some(value) = value {
            *self.current() = Example::Keyed {
                key: name.into(),
                value,
            };
        }
        self
    }

    /// Add a workflow phase.
    ///
    /// An empty scalar turns into a phased example; a non-empty one is left
    /// alone and a new phased example starts after it.
    pub fn phase(mut self, id: impl Into<String>, text: impl Into<Step>) -> Self {
        let phase = Phase {
            id: id.into(),
            text: text.into(),
        };
        match self.slot() {
            Slot::Phased => {
                if let Example::Phased(phases) = self.current() {
                    phases.push(phase);
                }
                self
            }
            Slot::Blank => {
                *self.current() = Example::Phased(vec![phase]);
                self
            }
            Slot::Actions | Slot::Other => {
                Self::push(self.guideline, Example::Phased(vec![phase]))
            }
        }
    }

    /// Attach a `do` block: an ordered list of steps
    pub fn steps<S: Into<Step>>(mut self, steps: impl IntoIterator<Item = S>) -> Self {
        let steps: Vec<Step> = steps.into_iter().map(Into::into).collect();
        match self.slot() {
            Slot::Actions => {
                if let Example::Actions(existing) = self.current() {
                    existing.extend(steps);
                }
                self
            }
            Slot::Blank => {
                *self.current() = Example::Actions(steps);
                self
            }
            Slot::Phased | Slot::Other => Self::push(self.guideline, Example::Actions(steps)),
        }
    }

    fn slot(&self) -> Slot {
        match &self.guideline.examples[self.index] {
            Example::Phased(_) => Slot::Phased,
            Example::Actions(_) => Slot::Actions,
            Example::Scalar(value) if value.is_empty_text() => Slot::Blank,
            _ => Slot::Other,
        }
    }

    /// Append another scalar example to the same guideline
    pub fn example(self, value: impl Into<Step>) -> Self {
        Self::push(self.guideline, Example::Scalar(value.into()))
    }
}

#[derive(Clone, Copy)]
enum Slot {
    Blank,
    Phased,
    Actions,
    Other,
}

pub struct StyleBuilder<'a> {
    style: &'a mut Style,
}

impl StyleBuilder<'_> {
    pub fn language(self, language: impl Into<String>) -> Self {
        self.style.language = Some(language.into());
        self
    }

    pub fn tone(self, tone: impl Into<String>) -> Self {
        self.style.tone = Some(tone.into());
        self
    }

    pub fn brevity(self, brevity: impl Into<String>) -> Self {
        self.style.brevity = Some(brevity.into());
        self
    }

    pub fn formatting(self, formatting: impl Into<String>) -> Self {
        self.style.formatting = Some(formatting.into());
        self
    }

    pub fn forbid(self, phrase: impl Into<String>) -> Self {
        self.style.forbidden_phrases.push(phrase.into());
        self
    }
}

pub struct ResponseBuilder<'a> {
    response: &'a mut ResponseContract,
}

impl ResponseBuilder<'_> {
    pub fn section(self, name: impl Into<String>, brief: impl Into<String>, required: bool) -> Self {
        self.response.sections.push(Section {
            name: name.into(),
            brief: brief.into(),
            required,
        });
        self
    }

    pub fn code_blocks(self, policy: impl Into<String>) -> Self {
        self.response.code_blocks = Some(policy.into());
        self
    }

    pub fn patches(self, policy: impl Into<String>) -> Self {
        self.response.patches = Some(policy.into());
        self
    }
}

pub struct DeterminismBuilder<'a> {
    determinism: &'a mut Determinism,
}

impl DeterminismBuilder<'_> {
    pub fn ordering(self, ordering: OrderingPolicy) -> Self {
        self.determinism.ordering = Some(ordering);
        self
    }

    pub fn randomness(self, randomness: Randomness) -> Self {
        self.determinism.randomness = Some(randomness);
        self
    }
}
