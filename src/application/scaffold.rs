//! Scaffold - create a new unit source file (`make:<kind> <name>`)

use std::path::PathBuf;

use serde_json::json;

use crate::domain::entities::UnitKind;
use crate::domain::ports::FileSystem;
use crate::domain::services::escaping::escape_yaml;
use crate::domain::services::tag_replace;
use crate::error::{BraincError, BraincResult};
use crate::infrastructure::repositories::BRAIN_FILE;

const BRAIN_TEMPLATE: &str = "\
description: {description}
includes: []
purpose: Working agreement for {{ PROJECT_DIR }}
rules:
  - id: stay-in-scope
    severity: high
    text: Only change what the task asks for
    why: Unrequested edits are hard to review
    on_violation: Revert the unrelated change
guidelines:
  - id: workflow
    text: Read the surrounding code before writing new code
";

const DOCUMENT_TEMPLATE: &str = "\
id: {id}
description: {description}
meta:
  model: inherit
includes: []
guidelines:
  - id: approach
    text: Describe how {id} should work
";

const INCLUDE_TEMPLATE: &str = "\
id: {id}
description: {description}
guidelines:
  - id: {id}
    text: Guidance shared by every unit including {id}
";

const MCP_TEMPLATE: &str = "\
id: {id}
description: {description}
command: npx
args: []
";

/// Options for `make`
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Source directory (.brain)
    pub source: PathBuf,
    pub kind: UnitKind,
    /// Free-form name; normalized into the unit id
    pub name: String,
    pub description: Option<String>,
    /// Overwrite an existing file
    pub force: bool,
}

impl ScaffoldOptions {
    pub fn new(source: impl Into<PathBuf>, kind: UnitKind, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind,
            name: name.into(),
            description: None,
            force: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// A freshly written unit file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
    pub kind: UnitKind,
    pub id: String,
    pub path: PathBuf,
}

/// Write a starter unit file for `options.kind`
pub fn scaffold_unit(fs: &dyn FileSystem, options: &ScaffoldOptions) -> BraincResult<Scaffolded> {
    let id = match options.kind {
        UnitKind::Brain => "brain".to_string(),
        _ => unit_id(&options.name).ok_or_else(|| BraincError::InvalidUnitFile {
            file: PathBuf::from(&options.name),
            message: "a unit name needs at least one letter or digit".to_string(),
        })?,
    };

    let path = match options.kind {
        UnitKind::Brain => options.source.join(BRAIN_FILE),
        kind => options
            .source
            .join(kind.directory())
            .join(format!("{}.yaml", id)),
    };

    if fs.exists(&path) && !options.force {
        return Err(BraincError::AlreadyExists { path });
    }

    let description = options
        .description
        .clone()
        .unwrap_or_else(|| match options.kind {
            UnitKind::Brain => "Project brain".to_string(),
            kind => format!("{} {}", humanize(&id), kind),
        });

    let template = match options.kind {
        UnitKind::Brain => BRAIN_TEMPLATE,
        UnitKind::Agent | UnitKind::Skill | UnitKind::Command => DOCUMENT_TEMPLATE,
        UnitKind::Include => INCLUDE_TEMPLATE,
        UnitKind::Mcp => MCP_TEMPLATE,
    };
    let content = tag_replace(
        template,
        &json!({ "id": id, "description": escape_yaml(&description) }),
        None,
    );

    fs.write(&path, &content)?;
    tracing::info!(path = %path.display(), kind = %options.kind, "scaffolded unit");

    Ok(Scaffolded {
        kind: options.kind,
        id,
        path,
    })
}

/// Lower-case kebab id: `Code Reviewer` → `code-reviewer`
pub fn unit_id(name: &str) -> Option<String> {
    let mut id = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c.to_ascii_lowercase());
        } else if !id.is_empty() && !id.ends_with('-') {
            id.push('-');
        }
    }
    let id = id.trim_end_matches('-').to_string();
    (!id.is_empty()).then_some(id)
}

fn humanize(id: &str) -> String {
    let words = id.replace('-', " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => words,
    }
}
