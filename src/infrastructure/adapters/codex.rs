//! OpenAI Codex CLI Adapter
//!
//! Generates output for Codex CLI:
//! - `.codex/AGENTS.md` - Brain document
//! - `.codex/agents/<id>.md` - Agents
//! - `.codex/skills/<id>/SKILL.md` - Skills
//! - `.codex/prompts/<id>.md` - Commands (Codex calls them prompts)
//! - `.codex/mcp.json` - MCP servers

use std::path::PathBuf;

use super::documents::{self, Layout};
use crate::domain::entities::{OutputFile, UnitDef, UnitKind};
use crate::domain::ports::target_adapter::{AdapterDiagnostic, AdapterError, TargetAdapter};
use crate::domain::services::Document;
use crate::domain::value_objects::Target;

const LAYOUT: Layout = Layout {
    target: Target::Codex,
    brain_file: ".codex/AGENTS.md",
    commands_dir: "prompts",
    mcp_file: ".codex/mcp.json",
};

/// Codex adapter
pub struct CodexAdapter;

impl CodexAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CodexAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetAdapter for CodexAdapter {
    fn target(&self) -> Target {
        Target::Codex
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
        documents::placeholder_diagnostics(output)
    }
}
