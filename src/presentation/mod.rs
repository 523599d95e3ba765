//! Presentation Layer
//!
//! Wiring between the CLI and the application layer. Argument parsing and
//! terminal rendering live in the binary (`cli`, `ui`, `commands`).
//!
//! ## Usage
//!
//! ```ignore
//! use brainc::presentation::factory;
//!
//! // Compile use case with file-backed units and every target adapter
//! let use_case = factory::create_compile_use_case();
//! let result = use_case.execute(&options)?;
//! ```

pub mod factory;

pub use factory::{create_compile_use_case, create_compile_use_case_with_adapters};
