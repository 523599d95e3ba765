//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compile_events;
pub mod file_system;
pub mod target_adapter;
pub mod unit_source;

pub use compile_events::{CompileEvent, CompileEventSink, NoopEventSink, WriteStatus};
pub use file_system::{FileSystem, FsError, FsResult};
pub use target_adapter::{AdapterDiagnostic, AdapterError, DiagnosticSeverity, TargetAdapter};
pub use unit_source::UnitSource;
