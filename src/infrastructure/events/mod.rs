//! Event Sink Implementations
//!
//! Concrete implementations of CompileEventSink:
//! - JsonEventSink: NDJSON output for CI/automation

mod json;

pub use json::{event_json, JsonEventSink};
