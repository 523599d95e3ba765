//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `adapters/` - Target adapters (Claude, Codex, Gemini, Qwen)
//! - `fs/` - File system implementations (Local, Memory)
//! - `repositories/` - Unit file loading
//! - `events/` - Compile event sinks
//! - `env` - `.env` + process environment

pub mod adapters;
pub mod env;
pub mod events;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use adapters::{all_adapters, get_adapter, ClaudeAdapter, CodexAdapter, GeminiAdapter, QwenAdapter};
pub use env::load_env;
pub use events::JsonEventSink;
pub use fs::{LocalFs, MemoryFs};
pub use repositories::FsUnitRepository;
