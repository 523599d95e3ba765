//! Compile Event Port
//!
//! Observable interface for compile runs: progress display, NDJSON event
//! streams for CI, or nothing at all.

use std::path::PathBuf;

use crate::domain::value_objects::{Format, Target};

/// Whether a generated file hit the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    /// Existing file already had identical content
    Unchanged,
    /// Dry run: nothing was written
    Planned,
}

impl WriteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteStatus::Written => "written",
            WriteStatus::Unchanged => "unchanged",
            WriteStatus::Planned => "planned",
        }
    }
}

/// Event emitted during a compile run
#[derive(Debug, Clone, PartialEq)]
pub enum CompileEvent {
    /// Units loaded and resolved, targets about to compile
    Started {
        source: PathBuf,
        unit_count: usize,
        targets: Vec<Target>,
    },

    /// One output file handled
    FileWritten {
        target: Target,
        path: PathBuf,
        /// Contributing units (`kind:id`)
        units: Vec<String>,
        status: WriteStatus,
    },

    /// A target finished, successfully or not
    TargetCompleted {
        target: Target,
        format: Format,
        file_count: usize,
        /// `(code, message)` when the target failed
        error: Option<(String, String)>,
    },

    /// Run finished
    Completed {
        written: usize,
        unchanged: usize,
        failed_targets: usize,
    },
}

/// Trait for receiving compile events
///
/// Implementations:
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait CompileEventSink: Send + Sync {
    fn on_event(&self, event: CompileEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CompileEventSink for NoopEventSink {
    fn on_event(&self, _event: CompileEvent) {}
}
