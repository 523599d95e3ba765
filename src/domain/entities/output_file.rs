//! OutputFile entity - a compiled output file
//!
//! OutputFiles are the result of rendering a unit for one target host.
//! They represent what will be written to the file system.

use crate::domain::value_objects::Target;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// A compiled output file ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    /// Path where this file should be written (relative to the output root)
    path: PathBuf,
    /// Compiled content
    content: String,
    /// Target host this was compiled for
    target: Target,
    /// Units that contributed to this file (`kind:id`)
    sources: Vec<String>,
}

impl OutputFile {
    /// Create a new OutputFile
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, target: Target) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            target,
            sources: Vec::new(),
        }
    }

    /// Builder: record the contributing unit
    pub fn with_source(mut self, label: impl Into<String>) -> Self {
        self.sources.push(label.into());
        self
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// SHA256 of the content, `sha256:<hex>`
    pub fn content_hash(&self) -> String {
        hash_content(self.content.as_bytes())
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }
}

/// SHA256 of arbitrary bytes, `sha256:<hex>`
pub fn hash_content(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}
