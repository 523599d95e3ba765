//! Compile Use Case
//!
//! Orchestrates the compile flow:
//! 1. Load unit definitions from the source directory
//! 2. Register them (ids, required fields)
//! 3. Resolve every include graph; any failure aborts the run
//! 4. Render all targets in parallel
//! 5. Write each target's files, skipping unchanged content
//!
//! This use case is pure orchestration - all business logic lives in domain services.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::Datelike;

use crate::domain::entities::OutputFile;
use crate::domain::ports::{
    CompileEvent, CompileEventSink, FileSystem, FsResult, NoopEventSink, TargetAdapter,
    UnitSource, WriteStatus,
};
use crate::domain::services::{
    CompileRequest, CompilerService, IncludeResolver, RuntimeVars, TargetOutput, UnitRegistry,
};
use crate::domain::value_objects::{SafePath, Target};
use crate::error::BraincError;

use super::options::CompileOptions;
use super::result::{CompileResult, FileReport, TargetFailure, TargetReport};

/// Compile use case - orchestrates a compile run
///
/// Parameterized by its ports so tests can swap in memory implementations.
pub struct CompileUseCase<US, FS>
where
    US: UnitSource,
    FS: FileSystem,
{
    unit_source: US,
    file_system: FS,
    compiler: CompilerService,
}

impl<US, FS> CompileUseCase<US, FS>
where
    US: UnitSource,
    FS: FileSystem,
{
    pub fn new(unit_source: US, file_system: FS, adapters: Vec<Box<dyn TargetAdapter>>) -> Self {
        Self {
            unit_source,
            file_system,
            compiler: CompilerService::new(adapters),
        }
    }

    /// Execute the compile use case
    pub fn execute(&self, options: &CompileOptions) -> anyhow::Result<CompileResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the compile use case with event reporting
    ///
    /// Load, registration and include failures are returned as errors and
    /// nothing is written. Target failures are reported in the result.
    pub fn execute_with_events(
        &self,
        options: &CompileOptions,
        event_sink: Arc<dyn CompileEventSink>,
    ) -> anyhow::Result<CompileResult> {
        let units = self
            .unit_source
            .load_all(&options.source)
            .with_context(|| format!("failed to load units from {}", options.source.display()))?;

        let mut registry = UnitRegistry::new();
        for unit in units {
            registry.register(unit).map_err(BraincError::from)?;
        }

        let merged = IncludeResolver::new(&registry)
            .resolve_all()
            .map_err(BraincError::from)?;

        let targets = self.selected_targets(options);
        tracing::info!(units = registry.len(), targets = targets.len(), "compiling");
        event_sink.on_event(CompileEvent::Started {
            source: options.source.clone(),
            unit_count: registry.len(),
            targets: targets.clone(),
        });

        let runtime = self.runtime_vars(options);
        let outputs = self.compiler.compile(&CompileRequest {
            registry: &registry,
            merged: &merged,
            env: &options.env,
            runtime: &runtime,
            targets: &targets,
            formats: &options.formats,
            strict: options.strict,
        });

        let mut result = CompileResult::new(registry.len());
        for output in outputs {
            let report = self.write_target(output, options, event_sink.as_ref());
            event_sink.on_event(CompileEvent::TargetCompleted {
                target: report.target,
                format: report.format,
                file_count: report.files.len(),
                error: report
                    .error
                    .as_ref()
                    .map(|e| (e.code.clone(), e.message.clone())),
            });
            result.targets.push(report);
        }

        event_sink.on_event(CompileEvent::Completed {
            written: result.written(),
            unchanged: result.unchanged(),
            failed_targets: result.failed_targets(),
        });

        Ok(result)
    }

    fn selected_targets(&self, options: &CompileOptions) -> Vec<Target> {
        self.compiler
            .adapters()
            .iter()
            .map(|adapter| adapter.target())
            .filter(|target| options.targets.is_empty() || options.targets.contains(target))
            .collect()
    }

    /// Orchestrator variables; built-ins override `[variables]` entries
    fn runtime_vars(&self, options: &CompileOptions) -> RuntimeVars {
        let date = options
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let mut runtime = RuntimeVars::new();
        for (name, value) in &options.variables {
            runtime.insert(name, value.clone());
        }

        runtime
            .with("PROJECT_DIR", options.project_root.display().to_string())
            .with("BRAIN_DIR", options.source.display().to_string())
            .with("OUTPUT_DIR", options.output_root.display().to_string())
            .with("DATE", date.format("%Y-%m-%d").to_string())
            .with("YEAR", date.year())
    }

    fn write_target(
        &self,
        output: TargetOutput,
        options: &CompileOptions,
        event_sink: &dyn CompileEventSink,
    ) -> TargetReport {
        let mut report = TargetReport {
            target: output.target,
            format: output.format,
            files: Vec::new(),
            error: None,
        };

        let files = match output.result {
            Ok(files) => files,
            Err(e) => {
                report.error = Some(TargetFailure {
                    code: e.code().to_string(),
                    message: e.to_string(),
                });
                return report;
            }
        };

        // Every path is checked before the first write so a bad target writes nothing
        let mut checked = Vec::with_capacity(files.len());
        for file in files {
            match SafePath::new(file.path()) {
                Ok(path) => checked.push((path, file)),
                Err(e) => {
                    report.error = Some(TargetFailure {
                        code: "unsafe_path".to_string(),
                        message: format!("{}: {}", file.path().display(), e),
                    });
                    return report;
                }
            }
        }

        for (path, file) in checked {
            let status = match self.write_file(&path, &file, &options.output_root, options.dry_run) {
                Ok(status) => status,
                Err(e) => {
                    tracing::warn!(path = %file.path().display(), error = %e, "write failed");
                    report.error = Some(TargetFailure {
                        code: "io".to_string(),
                        message: e.to_string(),
                    });
                    break;
                }
            };

            event_sink.on_event(CompileEvent::FileWritten {
                target: report.target,
                path: file.path().clone(),
                units: file.sources().to_vec(),
                status,
            });
            report.files.push(FileReport {
                path: file.path().clone(),
                units: file.sources().to_vec(),
                status,
            });
        }

        report
    }

    fn write_file(
        &self,
        relative: &SafePath,
        file: &OutputFile,
        root: &Path,
        dry_run: bool,
    ) -> FsResult<WriteStatus> {
        let path = root.join(relative);

        if self.file_system.exists(&path) && self.file_system.hash(&path)? == file.content_hash() {
            tracing::debug!(path = %path.display(), "unchanged");
            return Ok(WriteStatus::Unchanged);
        }

        if dry_run {
            return Ok(WriteStatus::Planned);
        }

        self.file_system.write(&path, file.content())?;
        tracing::debug!(path = %path.display(), bytes = file.len(), "written");
        Ok(WriteStatus::Written)
    }
}
