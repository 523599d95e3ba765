//! Common test utilities for brainc contract and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Assertion macros: `assert_written!`, `assert_not_written!`
//! - Fixtures: Reusable unit file contents

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
