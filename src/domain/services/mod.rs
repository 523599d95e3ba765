//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod compiler_service;
pub mod escaping;
mod include_resolver;
pub mod pseudo_syntax;
mod registry;
mod renderer;
mod variable_resolver;

pub use compiler_service::{CompileRequest, CompilerService, TargetError, TargetOutput};
pub use include_resolver::{IncludeResolver, MergedAst, ResolveError, MAX_INCLUDE_DEPTH};
pub use registry::{RegistryError, UnitHandle, UnitRecord, UnitRegistry};
pub use renderer::{
    DeterminismView, Document, DocumentView, ExampleView, GuidelineView, PhaseView, RenderError,
    Renderer, ResponseView, RuleView, SectionView, StyleView,
};
pub use variable_resolver::{
    puzzle, substitute, tag_replace, EnvSource, RuntimeVars, UnresolvedPlaceholder,
    VariableResolver,
};
