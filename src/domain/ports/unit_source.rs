//! UnitSource port - where unit definitions come from
//!
//! The compiler only sees `UnitDef`s; whether they were declared in code or
//! loaded from files is the implementation's business.

use std::path::Path;

use crate::domain::entities::UnitDef;
use crate::error::BraincResult;

/// Abstract source of unit definitions
///
/// Implemented by the infrastructure layer (`FsUnitRepository`).
pub trait UnitSource {
    /// Load every unit under a source directory, in a stable order
    fn load_all(&self, source: &Path) -> BraincResult<Vec<UnitDef>>;

    /// Load a single unit file
    fn load_by_path(&self, path: &Path) -> BraincResult<UnitDef>;
}
