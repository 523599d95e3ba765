//! Markup (XML) writer
//!
//! No indentation, one element per line, one blank line between top-level
//! blocks. Elements without content self-close; empty top-level blocks are
//! left out entirely.

use super::view::{
    DeterminismView, DocumentView, ExampleView, GuidelineView, ResponseView, RuleView, StyleView,
};
use crate::domain::services::escaping::{escape_xml_attr, escape_xml_text};

const ROOT: &str = "system";

struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    body: Body,
}

enum Body {
    Text(String),
    Children(Vec<Element>),
}

impl Element {
    fn text(name: &'static str, text: impl Into<String>) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            body: Body::Text(text.into()),
        }
    }

    fn parent(name: &'static str, children: Vec<Element>) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            body: Body::Children(children),
        }
    }

    fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    fn is_empty(&self) -> bool {
        match &self.body {
            Body::Text(text) => text.is_empty(),
            Body::Children(children) => children.is_empty(),
        }
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_xml_attr(value));
            out.push('"');
        }

        if self.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');

        match &self.body {
            Body::Text(text) => out.push_str(&escape_xml_text(text)),
            Body::Children(children) => {
                for child in children {
                    out.push('\n');
                    child.write(out);
                }
                out.push('\n');
            }
        }

        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

fn optional(name: &'static str, value: &Option<String>) -> Option<Element> {
    value.as_ref().map(|text| Element::text(name, text.clone()))
}

pub fn render(view: &DocumentView) -> String {
    let blocks: Vec<Element> = [
        view.purpose.as_ref().map(|p| Element::text("purpose", p.clone())),
        Some(rules(&view.rules)),
        Some(guidelines(&view.guidelines)),
        view.style.as_ref().map(style),
        view.response_contract.as_ref().map(response),
        view.determinism.as_ref().map(determinism),
    ]
    .into_iter()
    .flatten()
    .filter(|block| !block.is_empty())
    .collect();

    if blocks.is_empty() {
        return format!("<{}/>\n", ROOT);
    }

    let mut out = format!("<{}>\n", ROOT);
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        block.write(&mut out);
    }
    out.push_str(&format!("\n</{}>\n", ROOT));
    out
}

fn rules(rules: &[RuleView]) -> Element {
    Element::parent(
        "rules",
        rules
            .iter()
            .map(|rule| {
                Element::parent(
                    "rule",
                    vec![
                        Element::text("text", rule.text.clone()),
                        Element::text("why", rule.why.clone()),
                        Element::text("on_violation", rule.on_violation.clone()),
                    ],
                )
                .attr("id", rule.id.clone())
                .attr("severity", rule.severity.as_str())
            })
            .collect(),
    )
}

fn guidelines(guidelines: &[GuidelineView]) -> Element {
    Element::parent("guidelines", guidelines.iter().map(guideline).collect())
}

fn guideline(guideline: &GuidelineView) -> Element {
    let mut children: Vec<Element> = optional("text", &guideline.text).into_iter().collect();
    if !guideline.examples.is_empty() {
        children.push(Element::parent(
            "examples",
            guideline.examples.iter().map(example).collect(),
        ));
    }
    Element::parent("guideline", children).attr("id", guideline.id.clone())
}

fn example(example: &ExampleView) -> Element {
    match example {
        ExampleView::Scalar(value) => Element::text("example", value.clone()),
        ExampleView::Keyed { key, value } => {
            Element::text("example", value.clone()).attr("key", key.clone())
        }
        ExampleView::Phased { phases } => Element::parent(
            "example",
            phases
                .iter()
                .map(|phase| Element::text("phase", phase.text.clone()).attr("id", phase.id.clone()))
                .collect(),
        ),
        ExampleView::Actions { steps } => Element::parent(
            "example",
            vec![Element::parent(
                "do",
                steps
                    .iter()
                    .map(|step| Element::text("step", step.clone()))
                    .collect(),
            )],
        ),
    }
}

fn style(style: &StyleView) -> Element {
    let mut children: Vec<Element> = [
        optional("language", &style.language),
        optional("tone", &style.tone),
        optional("brevity", &style.brevity),
        optional("formatting", &style.formatting),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !style.forbidden_phrases.is_empty() {
        children.push(Element::parent(
            "forbidden_phrases",
            style
                .forbidden_phrases
                .iter()
                .map(|phrase| Element::text("phrase", phrase.clone()))
                .collect(),
        ));
    }
    Element::parent("style", children)
}

fn response(response: &ResponseView) -> Element {
    let mut children = Vec::new();
    if !response.sections.is_empty() {
        children.push(Element::parent(
            "sections",
            response
                .sections
                .iter()
                .map(|section| {
                    Element::text("section", section.brief.clone())
                        .attr("name", section.name.clone())
                        .attr("required", section.required.to_string())
                })
                .collect(),
        ));
    }
    children.extend(optional("code_blocks", &response.code_blocks));
    children.extend(optional("patches", &response.patches));
    Element::parent("response_contract", children)
}

fn determinism(determinism: &DeterminismView) -> Element {
    let children = [
        determinism
            .ordering
            .map(|ordering| Element::text("ordering", ordering.as_str())),
        determinism
            .randomness
            .map(|randomness| Element::text("randomness", randomness.as_str())),
    ]
    .into_iter()
    .flatten()
    .collect();
    Element::parent("determinism", children)
}
