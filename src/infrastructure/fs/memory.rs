//! In-memory file system, for tests

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::entities::hash_content;
use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Mock file system
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: pre-populate a file
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files().insert(path.into(), content.into());
        self
    }

    /// Snapshot of every stored path
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files().keys().cloned().collect()
    }

    fn files(&self) -> MutexGuard<'_, BTreeMap<PathBuf, String>> {
        // A poisoned lock only means another test thread panicked
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.files()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.files().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files().contains_key(path)
    }

    fn hash(&self, path: &Path) -> FsResult<String> {
        self.read(path).map(|content| hash_content(content.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_fs_round_trip_and_sharing() {
        let fs = MemoryFs::new().with_file("a.md", "A");
        let shared = fs.clone();

        shared.write(Path::new("b.md"), "B").unwrap();

        assert_eq!(fs.read(Path::new("b.md")).unwrap(), "B");
        assert_eq!(fs.paths(), vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
        assert_eq!(fs.hash(Path::new("a.md")).unwrap(), hash_content(b"A"));
    }

    #[test]
    fn memory_fs_missing_file() {
        let fs = MemoryFs::new();
        assert!(!fs.exists(Path::new("nope")));
        assert!(matches!(fs.read(Path::new("nope")), Err(FsError::NotFound(_))));
    }
}
