//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConfigWarning, Format, Target};
use crate::error::{BraincError, BraincResult};

use super::loader;

/// Target configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TargetsConfig {
    /// Targets compiled by default; empty means all of them
    #[serde(default)]
    pub enabled: Vec<Target>,

    /// `<target> = "xml" | "json" | "yaml"`
    ///
    /// Kept as strings so a bad entry is reported with context instead of
    /// failing the whole parse.
    #[serde(default)]
    pub formats: BTreeMap<String, String>,
}

/// Compile configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompileConfig {
    /// Fail a target on unresolved placeholders
    #[serde(default)]
    pub strict: bool,

    /// Output root, relative to the project root
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = BraincError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(BraincError::InvalidConfig {
                file: PathBuf::from("BRAINC_COLOR"),
                message: format!("unknown color mode '{}' (expected auto, always or never)", other),
            }),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Full configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub targets: TargetsConfig,

    #[serde(default)]
    pub compile: CompileConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Extra runtime variables
    #[serde(default)]
    pub variables: BTreeMap<String, serde_json::Value>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BraincResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration from a TOML file, collecting unknown keys
    pub fn load_with_warnings(path: &Path) -> BraincResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Source directory config, then user config, then defaults
    pub fn load_or_default(source: &Path) -> BraincResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(source)
    }

    /// Apply `BRAINC_*` overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Enabled targets, sorted and deduplicated (all targets if none listed)
    pub fn enabled_targets(&self) -> Vec<Target> {
        if self.targets.enabled.is_empty() {
            return Target::ALL.to_vec();
        }
        let mut targets = self.targets.enabled.clone();
        targets.sort();
        targets.dedup();
        targets
    }

    /// Parsed format overrides
    pub fn formats(&self) -> BraincResult<BTreeMap<Target, Format>> {
        self.targets
            .formats
            .iter()
            .map(|(target, format)| {
                let target = target
                    .parse::<Target>()
                    .map_err(|message| BraincError::InvalidConfig {
                        file: PathBuf::from("[targets.formats]"),
                        message,
                    })?;
                Ok((target, format.parse::<Format>()?))
            })
            .collect()
    }

    /// Format used for `target`
    pub fn format_for(&self, target: Target) -> BraincResult<Format> {
        Ok(self
            .formats()?
            .get(&target)
            .copied()
            .unwrap_or_else(|| target.default_format()))
    }

    /// Where generated files go: `output_dir` under the project root, or the
    /// project root itself
    pub fn output_root(&self, project_dir: &Path) -> PathBuf {
        match &self.compile.output_dir {
            Some(dir) => project_dir.join(dir),
            None => project_dir.to_path_buf(),
        }
    }
}
