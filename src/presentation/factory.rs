//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::CompileUseCase;
use crate::domain::ports::TargetAdapter;
use crate::infrastructure::{all_adapters, FsUnitRepository, LocalFs};

/// Type alias for the concrete CompileUseCase with all dependencies
pub type ConcreteCompileUseCase = CompileUseCase<FsUnitRepository, LocalFs>;

/// Create a compile use case with every target adapter
pub fn create_compile_use_case() -> ConcreteCompileUseCase {
    create_compile_use_case_with_adapters(all_adapters())
}

/// Create a compile use case with specific adapters
pub fn create_compile_use_case_with_adapters(
    adapters: Vec<Box<dyn TargetAdapter>>,
) -> ConcreteCompileUseCase {
    CompileUseCase::new(FsUnitRepository::new(), LocalFs::new(), adapters)
}
