//! On-disk unit schema
//!
//! ```yaml
//! id: reviewer
//! description: Reviews diffs
//! meta: { model: opus }
//! includes: [core]
//! rules:
//!   - id: no-secrets
//!     severity: critical
//!     text: Never print secrets
//!     why: Leaks are permanent
//!     on_violation: Stop and redact
//! guidelines:
//!   - id: flow
//!     examples:
//!       - phases:
//!           - { id: scan, text: "Read {{ PROJECT_DIR }}" }
//!           - { id: report, text: { report: findings } }
//!       - do: [{ call: Grep }, { delegate: { agent: explore } }]
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{
    Arg, Builder, Directive, ExampleBuilder, GuidelineBuilder, McpServer, Metadata, Operation,
    OrderingPolicy, Randomness, Severity, Step,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct UnitFile {
    pub id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub meta: BTreeMap<String, Value>,
    #[serde(default)]
    pub includes: Vec<String>,

    pub purpose: Option<String>,
    #[serde(default)]
    pub rules: Vec<RuleDef>,
    #[serde(default)]
    pub guidelines: Vec<GuidelineDef>,
    pub style: Option<StyleDef>,
    pub response_contract: Option<ResponseDef>,
    pub determinism: Option<DeterminismDef>,

    // MCP units
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    pub url: Option<String>,
}

impl UnitFile {
    /// Split off the part the builder replays
    pub fn body(&self) -> BodyDef {
        BodyDef {
            purpose: self.purpose.clone(),
            rules: self.rules.clone(),
            guidelines: self.guidelines.clone(),
            style: self.style.clone(),
            response_contract: self.response_contract.clone(),
            determinism: self.determinism.clone(),
        }
    }

    pub fn metadata(&self) -> Metadata {
        self.meta.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    pub fn mcp(&self) -> McpServer {
        McpServer {
            command: self.command.clone(),
            args: self.args.clone(),
            env: self.env.clone(),
            url: self.url.clone(),
        }
    }
}

/// Everything the builder consumes
#[derive(Debug, Clone, Default)]
pub(super) struct BodyDef {
    pub purpose: Option<String>,
    pub rules: Vec<RuleDef>,
    pub guidelines: Vec<GuidelineDef>,
    pub style: Option<StyleDef>,
    pub response_contract: Option<ResponseDef>,
    pub determinism: Option<DeterminismDef>,
}

impl BodyDef {
    pub fn is_empty(&self) -> bool {
        self.purpose.is_none()
            && self.rules.is_empty()
            && self.guidelines.is_empty()
            && self.style.is_none()
            && self.response_contract.is_none()
            && self.determinism.is_none()
    }

    /// Replay the declaration through the builder API
    pub fn build(&self, b: &mut Builder) {
        if let Some(purpose) = &self.purpose {
            b.purpose(purpose.as_str());
        }

        for rule in &self.rules {
            let mut r = b.rule(rule.id.as_str());
            if let Some(severity) = rule.severity {
                r = r.severity(severity);
            }
            if let Some(text) = &rule.text {
                r = r.text(text.as_str());
            }
            if let Some(why) = &rule.why {
                r = r.why(why.as_str());
            }
            if let Some(action) = &rule.on_violation {
                r.on_violation(action.as_str());
            }
        }

        for guideline in &self.guidelines {
            let mut g = b.guideline(guideline.id.as_str());
            if let Some(text) = &guideline.text {
                g = g.text(text.as_str());
            }
            let mut cursor = Cursor::Guideline(g);
            for example in &guideline.examples {
                cursor = Cursor::Example(example.append(cursor));
            }
        }

        if let Some(style) = &self.style {
            let mut s = b.style();
            if let Some(language) = &style.language {
                s = s.language(language.as_str());
            }
            if let Some(tone) = &style.tone {
                s = s.tone(tone.as_str());
            }
            if let Some(brevity) = &style.brevity {
                s = s.brevity(brevity.as_str());
            }
            if let Some(formatting) = &style.formatting {
                s = s.formatting(formatting.as_str());
            }
            for phrase in &style.forbid {
                s = s.forbid(phrase.as_str());
            }
        }

        if let Some(response) = &self.response_contract {
            let mut r = b.response();
            for section in &response.sections {
                r = r.section(
                    section.name.as_str(),
                    section.brief.as_str(),
                    section.required,
                );
            }
            if let Some(policy) = &response.code_blocks {
                r = r.code_blocks(policy.as_str());
            }
            if let Some(policy) = &response.patches {
                r.patches(policy.as_str());
            }
        }

        if let Some(determinism) = &self.determinism {
            let mut d = b.determinism();
            if let Some(ordering) = determinism.ordering {
                d = d.ordering(ordering);
            }
            if let Some(randomness) = determinism.randomness {
                d.randomness(randomness);
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RuleDef {
    pub id: String,
    pub severity: Option<Severity>,
    pub text: Option<String>,
    pub why: Option<String>,
    pub on_violation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct GuidelineDef {
    pub id: String,
    pub text: Option<String>,
    #[serde(default)]
    pub examples: Vec<ExampleDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum ExampleDef {
    Phased { phases: Vec<PhaseDef> },
    Actions {
        #[serde(rename = "do")]
        steps: Vec<StepDef>,
    },
    Keyed { key: String, value: StepDef },
    Scalar(StepDef),
}

/// Where the next example goes: a fresh guideline, or after the previous example
enum Cursor<'a> {
    Guideline(GuidelineBuilder<'a>),
    Example(ExampleBuilder<'a>),
}

impl<'a> Cursor<'a> {
    fn example(self, value: Step) -> ExampleBuilder<'a> {
        match self {
            Cursor::Guideline(g) => g.example(value),
            Cursor::Example(e) => e.example(value),
        }
    }
}

impl ExampleDef {
    fn append<'a>(&self, cursor: Cursor<'a>) -> ExampleBuilder<'a> {
        match self {
            ExampleDef::Scalar(value) => cursor.example(value.to_step()),
            ExampleDef::Keyed { key, value } => cursor.example(value.to_step()).key(key.as_str()),
            ExampleDef::Phased { phases } => phases
                .iter()
                .fold(cursor.example(Step::from("")), |e, phase| {
                    e.phase(phase.id.as_str(), phase.text.to_step())
                }),
            ExampleDef::Actions { steps } => cursor
                .example(Step::from(""))
                .steps(steps.iter().map(StepDef::to_step)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct PhaseDef {
    pub id: String,
    pub text: StepDef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum StepDef {
    Text(String),
    Op(OperationDef),
}

impl StepDef {
    fn to_step(&self) -> Step {
        match self {
            StepDef::Text(text) => Step::Text(text.clone()),
            StepDef::Op(op) => Step::Op(op.to_operation()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum ArgDef {
    Text(String),
    Var(VarRef),
    Op(Box<OperationDef>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct VarRef {
    var: String,
}

impl ArgDef {
    fn to_arg(&self) -> Arg {
        match self {
            ArgDef::Text(text) => Arg::Text(text.clone()),
            ArgDef::Var(var) => Arg::var(var.var.as_str()),
            ArgDef::Op(op) => Arg::from(op.to_operation()),
        }
    }
}

fn args(defs: &[ArgDef]) -> Vec<Arg> {
    defs.iter().map(ArgDef::to_arg).collect()
}

fn operations(defs: &[OperationDef]) -> Vec<Operation> {
    defs.iter().map(OperationDef::to_operation).collect()
}

/// One pseudo-syntax node, keyed by its operator
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub(super) enum OperationDef {
    Call(String),
    Tool {
        name: String,
        #[serde(default)]
        args: Vec<ArgDef>,
    },
    Delegate {
        agent: String,
        #[serde(default)]
        args: Vec<ArgDef>,
    },
    If {
        cond: ArgDef,
        then: Vec<OperationDef>,
        #[serde(rename = "else")]
        otherwise: Option<Vec<OperationDef>>,
    },
    Foreach {
        item: ArgDef,
        #[serde(rename = "do")]
        body: Vec<OperationDef>,
    },
    StoreAs {
        name: String,
        value: ArgDef,
    },
    StoreGet(String),
    Task(Vec<OperationDef>),
    Report(ArgDef),
    Note(ArgDef),
    Skip(ArgDef),
    Verify(ArgDef),
    Output(ArgDef),
    Input(ArgDef),
    Context(ArgDef),
}

impl OperationDef {
    fn to_operation(&self) -> Operation {
        let directive = |directive: Directive, arg: &ArgDef| {
            Operation::directive(directive, [arg.to_arg()])
        };

        match self {
            OperationDef::Call(name) => Operation::call(name.as_str()),
            OperationDef::Tool { name, args: a } => Operation::tool(name.as_str(), args(a)),
            OperationDef::Delegate { agent, args: a } => Operation::delegate(agent.as_str(), args(a)),
            OperationDef::If {
                cond,
                then,
                otherwise,
            } => Operation::conditional(
                cond.to_arg(),
                operations(then),
                otherwise.as_deref().map(operations),
            ),
            OperationDef::Foreach { item, body } => Operation::foreach(item.to_arg(), operations(body)),
            OperationDef::StoreAs { name, value } => Operation::store_as(name.as_str(), value.to_arg()),
            OperationDef::StoreGet(name) => Operation::store_get(name.as_str()),
            OperationDef::Task(body) => Operation::task(operations(body)),
            OperationDef::Report(arg) => directive(Directive::Report, arg),
            OperationDef::Note(arg) => directive(Directive::Note, arg),
            OperationDef::Skip(arg) => directive(Directive::Skip, arg),
            OperationDef::Verify(arg) => directive(Directive::Verify, arg),
            OperationDef::Output(arg) => directive(Directive::Output, arg),
            OperationDef::Input(arg) => directive(Directive::Input, arg),
            OperationDef::Context(arg) => directive(Directive::Context, arg),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct StyleDef {
    pub language: Option<String>,
    pub tone: Option<String>,
    pub brevity: Option<String>,
    pub formatting: Option<String>,
    #[serde(default)]
    pub forbid: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct ResponseDef {
    #[serde(default)]
    pub sections: Vec<SectionDef>,
    pub code_blocks: Option<String>,
    pub patches: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct SectionDef {
    pub name: String,
    #[serde(default)]
    pub brief: String,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct DeterminismDef {
    pub ordering: Option<OrderingPolicy>,
    pub randomness: Option<Randomness>,
}
