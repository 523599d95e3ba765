//! Compile Options
//!
//! Configuration types for compile runs.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::services::EnvSource;
use crate::domain::value_objects::{Format, Target};

/// Options for the compile use case
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Source directory (.brain)
    pub source: PathBuf,
    /// Project root (`PROJECT_DIR`)
    pub project_root: PathBuf,
    /// Where generated files are written
    pub output_root: PathBuf,
    /// Targets to compile; empty means all
    pub targets: Vec<Target>,
    /// Per-target format overrides
    pub formats: BTreeMap<Target, Format>,
    /// Fail a target on unresolved placeholders
    pub strict: bool,
    /// Dry run (don't write files)
    pub dry_run: bool,
    /// Extra runtime variables (from `[variables]`)
    pub variables: BTreeMap<String, Value>,
    /// Env/settings variable source
    pub env: EnvSource,
    /// Fixed compile date; today when unset
    pub date: Option<NaiveDate>,
}

impl CompileOptions {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        let source: PathBuf = source.into();
        let project_root = source
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            source,
            output_root: project_root.clone(),
            project_root,
            targets: Vec::new(),
            formats: BTreeMap::new(),
            strict: false,
            dry_run: false,
            variables: BTreeMap::new(),
            env: EnvSource::new(),
            date: None,
        }
    }

    /// Sets the project root; the output root follows it
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self.output_root = self.project_root.clone();
        self
    }

    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    pub fn with_targets(mut self, targets: Vec<Target>) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_formats(mut self, formats: BTreeMap<Target, Format>) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_variables(mut self, variables: BTreeMap<String, Value>) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_env(mut self, env: EnvSource) -> Self {
        self.env = env;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}
