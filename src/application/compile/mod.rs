//! Compile Module
//!
//! Orchestrates a full compile run.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`CompileOptions`)
//! - `result` - Result types (`CompileResult`, `TargetReport`)
//! - `use_case` - Core use case logic (`CompileUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use brainc::application::compile::{CompileOptions, CompileUseCase};
//!
//! let use_case = CompileUseCase::new(unit_source, fs, adapters);
//! let result = use_case.execute(&CompileOptions::new(".brain"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::CompileOptions;
pub use result::{CompileResult, FileReport, TargetFailure, TargetReport};
pub use use_case::CompileUseCase;
