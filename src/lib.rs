//! brainc - declarative configuration compiler for AI agent hosts
//!
//! Units (a project brain, agents, skills, commands, shared includes and MCP
//! servers) are declared once, merged through their include graphs, and
//! rendered for each target host (Claude Code, Codex, Gemini CLI, Qwen Code)
//! in that host's format.
//!
//! ## Layers
//!
//! - `domain` - unit model, include resolution, variables, renderers (no I/O)
//! - `application` - compile, scaffold, list and docs use cases
//! - `infrastructure` - unit files, file systems, target adapters, event sinks
//! - `presentation` - use case wiring for the CLI

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{UnitDef, UnitKind};
pub use domain::value_objects::{Format, Target};
pub use error::{BraincError, BraincResult};
