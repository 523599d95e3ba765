//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod unit_files;

pub use unit_files::{derive_id, kind_for_path, FsUnitRepository, BRAIN_FILE};
