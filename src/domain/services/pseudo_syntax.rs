//! Pseudo-syntax compiler
//!
//! Renders typed operations into the arrow-delimited macro notation agents read,
//! e.g. `IF(tests fail) → THEN → [Bash(cargo test)] → END-IF`.
//!
//! Output is target-independent: variable arguments become `{{ NAME }}`
//! placeholders that the renderer substitutes per target.

use crate::domain::entities::{Arg, Operation};
use crate::domain::value_objects::normalize_key;

/// Separator between chained operations
pub const ARROW: &str = " → ";

pub fn render(operation: &Operation) -> String {
    match operation {
        Operation::ToolCall { name, args } => format!("{}({})", name, render_args(args)),
        Operation::Delegate { agent, args } => {
            let target = format!("@agent-{}", kebab_case(agent));
            if args.is_empty() {
                format!("Task({})", target)
            } else {
                format!("Task({}, {})", target, render_args(args))
            }
        }
        Operation::Conditional {
            condition,
            then,
            otherwise,
        } => {
            let mut parts = vec![
                format!("IF({})", render_arg(condition)),
                "THEN".to_string(),
                block(then),
            ];
            if let Some(otherwise) = otherwise {
                parts.push("ELSE".to_string());
                parts.push(block(otherwise));
            }
            parts.push("END-IF".to_string());
            parts.join(ARROW)
        }
        Operation::Loop { item, body } => [
            format!("FOREACH({})", render_arg(item)),
            block(body),
            "END-FOREACH".to_string(),
        ]
        .join(ARROW),
        Operation::StoreAs { name, value } => {
            format!("STORE-AS(${} = {})", normalize_key(name), render_arg(value))
        }
        Operation::StoreGet { name } => format!("STORE-GET(${})", normalize_key(name)),
        Operation::Task { body } => {
            ["TASK".to_string(), block(body), "END-TASK".to_string()].join(ARROW)
        }
        Operation::Directive { directive, args } => {
            format!("{}({})", directive.keyword(), render_args(args))
        }
    }
}

/// Render a sequence as one chain, without brackets
pub fn render_sequence(operations: &[Operation]) -> String {
    operations.iter().map(render).collect::<Vec<_>>().join(ARROW)
}

/// `{{ NAME }}` placeholder for a variable reference
pub fn placeholder(name: &str) -> String {
    format!("{{{{ {} }}}}", normalize_key(name))
}

/// `CodeReviewer`, `code_reviewer` and `code reviewer` all become `code-reviewer`
pub fn kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with('-') {
                out.push('-');
            }
        }

        out.extend(c.to_lowercase());
    }

    out.trim_end_matches('-').to_string()
}

fn render_args(args: &[Arg]) -> String {
    args.iter().map(render_arg).collect::<Vec<_>>().join(", ")
}

fn render_arg(arg: &Arg) -> String {
    match arg {
        Arg::Text(text) => text.clone(),
        Arg::Var(name) => placeholder(name),
        Arg::Op(operation) => render(operation),
    }
}

fn block(operations: &[Operation]) -> String {
    format!("[{}]", render_sequence(operations))
}
