//! Claude Code Adapter
//!
//! Generates output for Claude Code:
//! - `.claude/CLAUDE.md` - Brain document
//! - `.claude/agents/<id>.md` - Subagents
//! - `.claude/skills/<id>/SKILL.md` - Skills
//! - `.claude/commands/<id>.md` - Slash commands
//! - `.mcp.json` - MCP servers, at the project root

use std::path::PathBuf;

use super::documents::{self, Layout};
use crate::domain::entities::{OutputFile, UnitDef, UnitKind};
use crate::domain::ports::target_adapter::{
    AdapterDiagnostic, AdapterError, DiagnosticSeverity, TargetAdapter,
};
use crate::domain::services::Document;
use crate::domain::value_objects::Target;

const LAYOUT: Layout = Layout {
    target: Target::Claude,
    brain_file: ".claude/CLAUDE.md",
    commands_dir: "commands",
    mcp_file: ".mcp.json",
};

/// Claude Code adapter
pub struct ClaudeAdapter;

impl ClaudeAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClaudeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetAdapter for ClaudeAdapter {
    fn target(&self) -> Target {
        Target::Claude
    }

    fn path_for(&self, kind: UnitKind, id: &str) -> Option<PathBuf> {
        LAYOUT.path_for(kind, id)
    }

    fn compile(&self, unit: &UnitDef, document: &Document) -> Result<Vec<OutputFile>, AdapterError> {
        LAYOUT.compile(unit, document)
    }

    fn post_compile(&self, units: &[&UnitDef]) -> Result<Vec<OutputFile>, AdapterError> {
        LAYOUT.post_compile(units)
    }

    fn validate(&self, output: &OutputFile) -> Vec<AdapterDiagnostic> {
        let mut diagnostics = Vec::new();

        if output.content().trim().is_empty() {
            diagnostics.push(AdapterDiagnostic {
                severity: DiagnosticSeverity::Warning,
                message: "Generated output is empty".to_string(),
            });
        }

        // Claude Code expands `$ARGUMENTS` itself; only our own syntax is suspect
        diagnostics.extend(documents::placeholder_diagnostics(output));
        diagnostics
    }
}
