//! Shared document helpers for target adapters
//!
//! Centralizes the frontmatter block, format fencing and MCP aggregation so
//! the per-host adapters only describe their path layout.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::{McpServer, OutputFile, UnitDef, UnitKind};
use crate::domain::ports::target_adapter::{AdapterDiagnostic, AdapterError, DiagnosticSeverity};
use crate::domain::services::Document;
use crate::domain::value_objects::{Format, Target};

/// Per-host directory layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    pub target: Target,
    /// Brain document path, relative to the output root
    pub brain_file: &'static str,
    /// Directory holding command files, inside the host directory
    pub commands_dir: &'static str,
    /// Aggregated MCP config path, relative to the output root
    pub mcp_file: &'static str,
}

impl Layout {
    pub fn path_for(&self, kind: UnitKind, id: &str) -> Option<PathBuf> {
        let dir = self.target.directory();
        match kind {
            UnitKind::Brain => Some(PathBuf::from(self.brain_file)),
            UnitKind::Agent => Some(dir.join("agents").join(format!("{}.md", id))),
            UnitKind::Skill => Some(dir.join("skills").join(id).join("SKILL.md")),
            UnitKind::Command => Some(dir.join(self.commands_dir).join(format!("{}.md", id))),
            UnitKind::Include | UnitKind::Mcp => None,
        }
    }

    /// Standard compile: frontmatter for agents/skills/commands, bare body
    /// for the brain document
    pub fn compile(&self, unit: &UnitDef, document: &Document) -> Result<Vec<OutputFile>, AdapterError> {
        let Some(path) = self.path_for(unit.kind(), unit.id()) else {
            return Ok(Vec::new());
        };

        let content = match unit.kind() {
            UnitKind::Brain => body(document),
            _ => with_frontmatter(unit, document)?,
        };

        Ok(vec![
            OutputFile::new(path, content, self.target).with_source(unit.label())
        ])
    }

    pub fn post_compile(&self, units: &[&UnitDef]) -> Result<Vec<OutputFile>, AdapterError> {
        Ok(mcp_config(units, self.target, self.mcp_file)?
            .into_iter()
            .collect())
    }
}

/// Document body as written into a Markdown file; object and mapping
/// formats are fenced so hosts do not reflow them
pub(crate) fn body(document: &Document) -> String {
    match document.format {
        Format::Xml => document.content.clone(),
        Format::Json | Format::Yaml => {
            let fence = fence_for(&document.content);
            format!("{fence}{}\n{}{fence}\n", document.format, document.content)
        }
    }
}

/// A backtick fence longer than any backtick run in `content`
fn fence_for(content: &str) -> String {
    let longest = content
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

/// `---` YAML frontmatter (name, description, sorted metadata) followed by the body
pub(crate) fn with_frontmatter(unit: &UnitDef, document: &Document) -> Result<String, AdapterError> {
    #[derive(Serialize)]
    struct Frontmatter<'a> {
        name: &'a str,
        description: &'a str,
        #[serde(flatten)]
        metadata: BTreeMap<&'a str, &'a Value>,
    }

    let frontmatter = Frontmatter {
        name: unit.id(),
        description: unit.description(),
        metadata: unit
            .metadata()
            .iter()
            .filter(|(key, value)| {
                !matches!(key.as_str(), "name" | "description") && is_frontmatter_value(value)
            })
            .map(|(key, value)| (key.as_str(), value))
            .collect(),
    };

    let yaml =
        serde_yaml_ng::to_string(&frontmatter).map_err(|e| AdapterError::CompilationFailed {
            message: format!(
                "failed to serialize frontmatter for '{}': {}",
                unit.label(),
                e
            ),
        })?;

    let mut out = String::new();
    out.push_str("---\n");
    out.push_str(yaml.trim_end());
    out.push_str("\n---\n\n");
    out.push_str(&body(document));
    Ok(out)
}

/// Scalars and flat lists of scalars; nested maps stay out of frontmatter
fn is_frontmatter_value(value: &Value) -> bool {
    match value {
        Value::Null | Value::Object(_) => false,
        Value::Array(items) => items
            .iter()
            .all(|item| !matches!(item, Value::Array(_) | Value::Object(_) | Value::Null)),
        _ => true,
    }
}

/// Aggregate every Mcp unit into one `mcpServers` JSON file
pub(crate) fn mcp_config(
    units: &[&UnitDef],
    target: Target,
    path: &str,
) -> Result<Option<OutputFile>, AdapterError> {
    #[derive(Serialize)]
    struct McpConfig<'a> {
        #[serde(rename = "mcpServers")]
        mcp_servers: BTreeMap<&'a str, &'a McpServer>,
    }

    let mut servers = BTreeMap::new();
    let mut sources = Vec::new();
    for unit in units.iter().filter(|u| u.kind() == UnitKind::Mcp) {
        let server = unit
            .mcp()
            .filter(|s| s.command.is_some() || s.url.is_some())
            .ok_or_else(|| AdapterError::CompilationFailed {
                message: format!("{} needs a command or a url", unit.label()),
            })?;
        servers.insert(unit.id(), server);
        sources.push(unit.label());
    }

    if servers.is_empty() {
        return Ok(None);
    }

    let json = serde_json::to_string_pretty(&McpConfig {
        mcp_servers: servers,
    })
    .map_err(|e| AdapterError::CompilationFailed {
        message: format!("failed to serialize MCP config: {}", e),
    })?;

    let output = sources.into_iter().fold(
        OutputFile::new(path, json + "\n", target),
        OutputFile::with_source,
    );
    Ok(Some(output))
}

/// Warn about `{{ NAME }}` placeholders left in a lenient build
pub(crate) fn placeholder_diagnostics(output: &OutputFile) -> Vec<AdapterDiagnostic> {
    let mut diagnostics = Vec::new();
    let mut rest = output.content();
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let name = after[..end].trim();
        if !name.is_empty() && !name.contains(char::is_whitespace) {
            diagnostics.push(AdapterDiagnostic {
                severity: DiagnosticSeverity::Warning,
                message: format!(
                    "{}: unresolved placeholder {{{{ {} }}}}",
                    output.path().display(),
                    name
                ),
            });
        }
        rest = &after[end + 2..];
    }
    diagnostics
}
