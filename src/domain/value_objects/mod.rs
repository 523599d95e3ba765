//! Value Objects
//!
//! Immutable types without identity.
//! - `Target` / `Format` - host and serialization for compiled documents
//! - `Variable` - a resolved compile-time variable and its origin
//! - `ConfigWarning` - non-fatal configuration problem
//! - `SafePath` - output path that cannot leave the output root

mod config_warning;
mod path;
mod target;
mod variable;

pub use config_warning::ConfigWarning;
pub use path::{PathError, SafePath};
pub use target::{Format, Target};
pub use variable::{coerce, display_value, hook_key, normalize_key, Origin, Variable};
