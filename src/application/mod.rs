//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompileUseCase` - Orchestrates the compile flow (load, register, resolve, render, write)
//! - `scaffold_unit` - Creates a starter unit file
//! - `list_units` - Enumerates registered units
//! - `search_docs` - Ranks documentation files by keyword

pub mod compile;
pub mod docs;
pub mod list;
pub mod scaffold;

pub use compile::{
    CompileOptions, CompileResult, CompileUseCase, FileReport, TargetFailure, TargetReport,
};
pub use docs::{search_docs, DocMatch, DOCS_DIR};
pub use list::{list_units, UnitSummary};
pub use scaffold::{scaffold_unit, unit_id, ScaffoldOptions, Scaffolded};
