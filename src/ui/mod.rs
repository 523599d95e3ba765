//! Terminal output for the CLI: capabilities, design tokens, and the
//! human-readable and NDJSON renderings of each command.

pub mod blocks;
pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
