//! TargetAdapter port - per-host output layout
//!
//! An adapter decides where a unit's rendered document lands for one host and
//! what wraps it (frontmatter, aggregated MCP config...). Rendering itself is
//! format-driven and shared; adapters never touch the AST.

use std::path::PathBuf;

use crate::domain::entities::{OutputFile, UnitDef, UnitKind};
use crate::domain::services::Document;
use crate::domain::value_objects::{Format, Target};

/// Adapter failure for a single unit or post-compile step
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    #[error("{message}")]
    CompilationFailed { message: String },
}

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Warning,
    Error,
}

/// A validation finding on a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterDiagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
}

pub trait TargetAdapter: Send + Sync {
    fn target(&self) -> Target;

    /// Format used when the configuration does not pick one
    fn default_format(&self) -> Format {
        self.target().default_format()
    }

    /// Where a unit's document goes, relative to the output root.
    /// `None` for kinds that produce no standalone file.
    fn path_for(&self, kind: UnitKind, id: &str) -> Option<PathBuf>;

    /// Wrap one rendered document into output files
    fn compile(&self, unit: &UnitDef, document: &Document)
        -> Result<Vec<OutputFile>, AdapterError>;

    /// Files derived from all units at once (runs after every `compile`)
    fn post_compile(&self, _units: &[&UnitDef]) -> Result<Vec<OutputFile>, AdapterError> {
        Ok(Vec::new())
    }

    /// Validate a generated file
    fn validate(&self, output: &OutputFile) -> Vec<AdapterDiagnostic> {
        let mut diagnostics = Vec::new();
        if output.content().trim().is_empty() {
            diagnostics.push(AdapterDiagnostic {
                severity: DiagnosticSeverity::Warning,
                message: format!("{} is empty", output.path().display()),
            });
        }
        diagnostics
    }
}
