//! Error types for brainc
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::services::{RegistryError, RenderError, ResolveError};

/// Result type alias for brainc operations
pub type BraincResult<T> = Result<T, BraincError>;

/// Main error type for brainc operations
#[derive(Error, Debug)]
pub enum BraincError {
    /// Include graph contains a cycle, or is too deep, or names a missing fragment
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Registration failed (duplicate id, incomplete unit)
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A single target failed to render
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Target format name is not one of xml/json/yaml
    #[error("unsupported target format '{format}' (expected xml, json or yaml)")]
    UnsupportedTargetFormat { format: String },

    /// Unit source file could not be parsed
    #[error("invalid unit file {}: {message}", .file.display())]
    InvalidUnitFile { file: PathBuf, message: String },

    /// Invalid config.toml
    #[error("invalid config {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Scaffold target already exists
    #[error("{} already exists (use --force to overwrite)", .path.display())]
    AlreadyExists { path: PathBuf },

    /// Directory not found
    #[error("directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// File system port failure
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BraincError {
    /// Stable machine-readable code, used by `--json` output.
    pub fn code(&self) -> &'static str {
        match self {
            BraincError::Resolve(e) => e.code(),
            BraincError::Registry(e) => e.code(),
            BraincError::Render(e) => e.code(),
            BraincError::UnsupportedTargetFormat { .. } => "unsupported_target_format",
            BraincError::InvalidUnitFile { .. } => "invalid_unit_file",
            BraincError::InvalidConfig { .. } => "invalid_config",
            BraincError::AlreadyExists { .. } => "already_exists",
            BraincError::DirectoryNotFound { .. } => "directory_not_found",
            BraincError::Fs(_) | BraincError::Io(_) => "io",
        }
    }
}
