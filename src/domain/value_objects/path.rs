//! Safe Path Value Object
//!
//! A generated file's path relative to the output root. It must stay below
//! that root: relative, non-empty, no `..` and no drive prefix.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Why a path was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("path contains traversal components (..)")]
    ContainsTraversal,

    #[error("absolute paths are not allowed")]
    AbsoluteNotAllowed,

    #[error("path is empty")]
    Empty,
}

/// A validated output path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(PathError::Empty);
        }

        if path.has_root() || path.is_absolute() {
            return Err(PathError::AbsoluteNotAllowed);
        }

        for component in path.components() {
            match component {
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::Prefix(_) | Component::RootDir => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
                Component::CurDir | Component::Normal(_) => {}
            }
        }

        Ok(Self(path.to_path_buf()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for SafePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for SafePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
