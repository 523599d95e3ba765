//! Domain Entities
//!
//! - `Unit` - A registered Brain/Agent/Skill/Command/Include/Mcp definition
//! - `Ast` - Rules, guidelines and singletons accumulated by the builder
//! - `Operation` - Typed pseudo-syntax nodes embedded in examples
//! - `OutputFile` - A compiled output file

mod ast;
mod builder;
mod operation;
mod output_file;
mod unit;

pub use ast::{
    Ast, Determinism, Example, Guideline, OrderingPolicy, Phase, Randomness, ResponseContract,
    Rule, Section, Severity, Step, Style,
};
pub use builder::{
    Builder, DeterminismBuilder, ExampleBuilder, GuidelineBuilder, ResponseBuilder, RuleBuilder,
    StyleBuilder,
};
pub use operation::{Arg, Directive, Operation};
pub use output_file::{hash_content, OutputFile};
pub use unit::{BuildFn, Hook, Hooks, McpServer, Metadata, UnitDef, UnitKind};
