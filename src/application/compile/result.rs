//! Compile Result
//!
//! Result types for compile runs.

use std::path::PathBuf;

use crate::domain::ports::WriteStatus;
use crate::domain::value_objects::{Format, Target};

/// One generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path relative to the output root
    pub path: PathBuf,
    /// Contributing units (`kind:id`)
    pub units: Vec<String>,
    pub status: WriteStatus,
}

/// Why a target failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFailure {
    pub code: String,
    pub message: String,
}

/// Outcome for one target
#[derive(Debug, Clone)]
pub struct TargetReport {
    pub target: Target,
    pub format: Format,
    pub files: Vec<FileReport>,
    pub error: Option<TargetFailure>,
}

impl TargetReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    fn count(&self, status: WriteStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }
}

/// Result of a compile run
#[derive(Debug, Clone, Default)]
pub struct CompileResult {
    /// Registered unit count
    pub unit_count: usize,
    /// Per-target reports, in target order
    pub targets: Vec<TargetReport>,
}

impl CompileResult {
    pub fn new(unit_count: usize) -> Self {
        Self {
            unit_count,
            targets: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.targets.iter().all(TargetReport::is_success)
    }

    pub fn written(&self) -> usize {
        self.targets.iter().map(|t| t.count(WriteStatus::Written)).sum()
    }

    pub fn unchanged(&self) -> usize {
        self.targets
            .iter()
            .map(|t| t.count(WriteStatus::Unchanged))
            .sum()
    }

    pub fn planned(&self) -> usize {
        self.targets.iter().map(|t| t.count(WriteStatus::Planned)).sum()
    }

    pub fn failed_targets(&self) -> usize {
        self.targets.iter().filter(|t| !t.is_success()).count()
    }

    pub fn has_changes(&self) -> bool {
        self.written() > 0
    }
}
