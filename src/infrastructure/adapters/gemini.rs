//! Gemini CLI Adapter
//!
//! Generates output for Gemini CLI:
//! - `.gemini/GEMINI.md` - Brain document
//! - `.gemini/agents/<id>.md` - Agents
//! - `.gemini/skills/<id>/SKILL.md` - Skills
//! - `.gemini/commands/<id>.md` - Commands
//! - `.gemini/mcp.json` - MCP servers

use std::path::PathBuf;

use super::documents::{self, Layout};
use crate::domain::entities::{OutputFile, UnitDef, UnitKind};
use crate::domain::ports::target_adapter::{AdapterDiagnostic, AdapterError, TargetAdapter};
use crate::domain::services::Document;
use crate::domain::value_objects::Target;

const LAYOUT: Layout = Layout {
    target: Target::Gemini,
    brain_file: ".gemini/GEMINI.md",
    commands_dir: "commands",
    mcp_file: ".gemini/mcp.json",
};

/// Gemini CLI adapter
pub struct GeminiAdapter;

impl GeminiAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GeminiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetAdapter for GeminiAdapter {
    fn target(&self) -> Target {
        Target::Gemini
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
