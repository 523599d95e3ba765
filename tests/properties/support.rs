//! In-memory unit sources for property tests.

#![allow(dead_code)]

use std::path::Path;

use brainc::domain::ports::UnitSource;
use brainc::{BraincError, BraincResult, UnitDef};

/// Serves a fixed list of units
pub struct VecSource(pub Vec<UnitDef>);

impl UnitSource for VecSource {
    fn load_all(&self, _source: &Path) -> BraincResult<Vec<UnitDef>> {
        Ok(self.0.clone())
    }

    fn load_by_path(&self, path: &Path) -> BraincResult<UnitDef> {
        self.0
            .first()
            .cloned()
            .ok_or_else(|| BraincError::DirectoryNotFound {
                path: path.to_path_buf(),
            })
    }
}
