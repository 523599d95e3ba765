//! Configuration module for brainc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BRAINC_*)
//! 3. Project config (`<source>/config.toml`)
//! 4. User config (`~/.config/brainc/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{user_config_path, with_env_overrides, CONFIG_FILE};
pub use types::{ColorMode, CompileConfig, Config, OutputConfig, TargetsConfig};
