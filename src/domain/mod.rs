//! Domain Layer
//!
//! The compiler core: unit model, include resolution, variables, pseudo-syntax
//! and format rendering. Pure logic, no I/O.
//!
//! ## Structure
//!
//! - `entities/` - Units, the rule/guideline AST, operations, output files
//! - `value_objects/` - Targets, formats, variables
//! - `services/` - Registry, include resolver, variable resolver, renderers
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
