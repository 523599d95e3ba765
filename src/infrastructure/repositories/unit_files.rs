//! File System Unit Repository
//!
//! Loads unit definitions from a source directory:
//!
//! ```text
//! .brain/
//! ├── brain.yaml          # the Brain unit (optional)
//! ├── agents/*.yaml
//! ├── skills/*.yaml
//! ├── commands/*.yaml
//! ├── includes/*.yaml
//! └── mcp/*.yaml
//! ```
//!
//! Each file becomes a `UnitDef` whose build function replays the declared
//! rules and guidelines through the builder, so file-defined units compile
//! exactly like code-defined ones.

mod schema;

use std::path::{Path, PathBuf};

use crate::domain::entities::{UnitDef, UnitKind};
use crate::domain::ports::UnitSource;
use crate::error::{BraincError, BraincResult};

use schema::UnitFile;

/// File name of the Brain unit inside the source directory
pub const BRAIN_FILE: &str = "brain.yaml";

const EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Unit repository that loads from the file system
pub struct FsUnitRepository;

impl FsUnitRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self
    }

    /// Parse one unit file of a known kind
    pub fn parse(&self, kind: UnitKind, path: &Path, content: &str) -> BraincResult<UnitDef> {
        let file: UnitFile = if content.trim().is_empty() {
            UnitFile::default()
        } else {
            serde_yaml_ng::from_str(content).map_err(|e| BraincError::InvalidUnitFile {
                file: path.to_path_buf(),
                message: format_yaml_error(&e),
            })?
        };

        let id = match &file.id {
            Some(id) => id.clone(),
            None if kind == UnitKind::Brain => "brain".to_string(),
            None => derive_id(path),
        };

        let mut unit = UnitDef::new(kind, id, file.description.as_str())
            .with_metadata(file.metadata())
            .with_includes(file.includes.iter().cloned());

        if kind == UnitKind::Mcp {
            unit = unit.with_mcp(file.mcp());
        } else if file.command.is_some() || file.url.is_some() {
            return Err(BraincError::InvalidUnitFile {
                file: path.to_path_buf(),
                message: format!("`command`/`url` are only valid for mcp units, not {}", kind),
            });
        }

        let body = file.body();
        if !body.is_empty() {
            unit = unit.with_build(move |b| body.build(b));
        }

        tracing::debug!(unit = %unit.label(), path = %path.display(), "loaded unit file");
        Ok(unit)
    }

    fn read(&self, kind: UnitKind, path: &Path) -> BraincResult<UnitDef> {
        let content = std::fs::read_to_string(path)?;
        self.parse(kind, path, &content)
    }
}

impl Default for FsUnitRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitSource for FsUnitRepository {
    fn load_all(&self, source: &Path) -> BraincResult<Vec<UnitDef>> {
        if !source.is_dir() {
            return Err(BraincError::DirectoryNotFound {
                path: source.to_path_buf(),
            });
        }

        let mut units = Vec::new();

        if let Some(brain) = brain_file(source) {
            units.push(self.read(UnitKind::Brain, &brain)?);
        }

        for kind in UnitKind::ALL.into_iter().filter(|k| *k != UnitKind::Brain) {
            for path in unit_files(&source.join(kind.directory()))? {
                units.push(self.read(kind, &path)?);
            }
        }

        Ok(units)
    }

    fn load_by_path(&self, path: &Path) -> BraincResult<UnitDef> {
        let kind = kind_for_path(path).ok_or_else(|| BraincError::InvalidUnitFile {
            file: path.to_path_buf(),
            message: "cannot tell the unit kind from its location".to_string(),
        })?;
        self.read(kind, path)
    }
}

fn brain_file(source: &Path) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| source.join(format!("brain.{}", ext)))
        .find(|path| path.is_file())
}

/// YAML files directly inside `dir`, sorted by name
fn unit_files(dir: &Path) -> BraincResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if path.is_file() && !hidden && has_unit_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_unit_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| EXTENSIONS.contains(&e))
}

/// Unit kind implied by a file's location (`agents/x.yaml`, `brain.yaml`...)
pub fn kind_for_path(path: &Path) -> Option<UnitKind> {
    if !has_unit_extension(path) {
        return None;
    }
    let parent = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str());
    let by_directory = UnitKind::ALL
        .into_iter()
        .find(|kind| *kind != UnitKind::Brain && Some(kind.directory()) == parent);

    by_directory.or_else(|| {
        (path.file_stem().and_then(|s| s.to_str()) == Some("brain")).then_some(UnitKind::Brain)
    })
}

/// Derive unit ID from file path
///
/// Converts path like `agents/code-reviewer.yaml` to `code-reviewer`
pub fn derive_id(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

fn format_yaml_error(err: &serde_yaml_ng::Error) -> String {
    let mut message = match err.location() {
        Some(loc) => format!("line {}: {}", loc.line(), err),
        None => err.to_string(),
    };
    if err.to_string().contains("mapping values are not allowed") {
        message.push_str("\nhint: strings with colons need quotes: description: \"My: Rule\"");
    }
    message
}

#[cfg(test)]
mod tests;
