//! Qwen Code Adapter
//!
//! Generates output for Qwen Code:
//! - `.qwen/QWEN.md` - Brain document
//! - `.qwen/agents/<id>.md` - Agents
//! - `.qwen/skills/<id>/SKILL.md` - Skills
//! - `.qwen/commands/<id>.md` - Commands
//! - `.qwen/mcp.json` - MCP servers

use std::path::PathBuf;

use super::documents::{self, Layout};
use crate::domain::entities::{OutputFile, UnitDef, UnitKind};
use crate::domain::ports::target_adapter::{AdapterDiagnostic, AdapterError, TargetAdapter};
use crate::domain::services::Document;
use crate::domain::value_objects::Target;

const LAYOUT: Layout = Layout {
    target: Target::Qwen,
    brain_file: ".qwen/QWEN.md",
    commands_dir: "commands",
    mcp_file: ".qwen/mcp.json",
};

/// Qwen Code adapter
pub struct QwenAdapter;

impl QwenAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QwenAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetAdapter for QwenAdapter {
    fn target(&self) -> Target {
        Target::Qwen
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
