//! Include resolver
//!
//! Expands a root unit's include graph depth-first and merges every fragment's
//! AST into a copy owned by the root:
//!
//! - fragments are merged post-order, in each unit's `includes` order
//! - the root's own content follows everything it includes
//! - nothing is deduplicated: a fragment included twice is merged twice
//! - re-entering a fragment already on the path is a cycle
//! - a fragment deeper than `MAX_INCLUDE_DEPTH` fails the whole resolution

use crate::domain::entities::{Ast, UnitKind};
use crate::domain::services::registry::{UnitHandle, UnitRegistry};

/// Deepest allowed fragment (first-level includes are depth 1)
pub const MAX_INCLUDE_DEPTH: usize = 255;

/// A root unit together with its fully expanded AST
#[derive(Debug, Clone, PartialEq)]
pub struct MergedAst {
    pub handle: UnitHandle,
    pub kind: UnitKind,
    pub id: String,
    pub ast: Ast,
    /// Fragment ids in merge order, duplicates included
    pub fragments: Vec<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("include cycle detected: {}", .chain.join(" → "))]
    CycleDetected { chain: Vec<String> },

    #[error("include depth exceeds {max}: {}", .chain.join(" → "))]
    DepthExceeded { chain: Vec<String>, max: usize },

    #[error("unknown include '{name}' (via {})", .chain.join(" → "))]
    UnknownInclude { name: String, chain: Vec<String> },
}

impl ResolveError {
    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::CycleDetected { .. } => "cycle_detected",
            ResolveError::DepthExceeded { .. } => "depth_exceeded",
            ResolveError::UnknownInclude { .. } => "unknown_include",
        }
    }

    /// Reference chain from the root to the failing fragment
    pub fn chain(&self) -> &[String] {
        match self {
            ResolveError::CycleDetected { chain }
            | ResolveError::DepthExceeded { chain, .. }
            | ResolveError::UnknownInclude { chain, .. } => chain,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IncludeResolver<'r> {
    registry: &'r UnitRegistry,
    max_depth: usize,
}

impl<'r> IncludeResolver<'r> {
    pub fn new(registry: &'r UnitRegistry) -> Self {
        Self {
            registry,
            max_depth: MAX_INCLUDE_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Resolve one root. Pure: the registry is never modified.
    pub fn resolve(&self, root: UnitHandle) -> Result<MergedAst, ResolveError> {
        let record = self.registry.get(root);
        let mut path = vec![root];
        let mut merged = Ast::default();
        let mut fragments = Vec::new();

        self.expand(record.def().includes(), &mut path, &mut merged, &mut fragments)?;
        merged.absorb(record.ast());
        merged.purpose = record
            .ast()
            .purpose
            .clone()
            .or_else(|| Some(record.def().description().to_string()));

        tracing::debug!(
            unit = %record.def().label(),
            fragments = fragments.len(),
            rules = merged.rules.len(),
            guidelines = merged.guidelines.len(),
            "resolved includes"
        );

        Ok(MergedAst {
            handle: root,
            kind: record.kind(),
            id: record.id().to_string(),
            ast: merged,
            fragments,
        })
    }

    /// Resolve every root in registration order, stopping at the first failure
    pub fn resolve_all(&self) -> Result<Vec<MergedAst>, ResolveError> {
        self.registry
            .roots()
            .map(|(handle, _)| self.resolve(handle))
            .collect()
    }

    fn expand(
        &self,
        includes: &[String],
        path: &mut Vec<UnitHandle>,
        merged: &mut Ast,
        fragments: &mut Vec<String>,
    ) -> Result<(), ResolveError> {
        for name in includes {
            let Some(handle) = self.registry.find(UnitKind::Include, name) else {
                return Err(ResolveError::UnknownInclude {
                    name: name.clone(),
                    chain: self.chain(path, None),
                });
            };

            if path.contains(&handle) {
                return Err(ResolveError::CycleDetected {
                    chain: self.chain(path, Some(name)),
                });
            }

            // `path` holds the root plus every fragment above this one
            if path.len() > self.max_depth {
                return Err(ResolveError::DepthExceeded {
                    chain: self.chain(path, Some(name)),
                    max: self.max_depth,
                });
            }

            let fragment = self.registry.get(handle);
            path.push(handle);
            self.expand(fragment.def().includes(), path, merged, fragments)?;
            path.pop();

            merged.absorb(fragment.ast());
            fragments.push(name.clone());
        }
        Ok(())
    }

    fn chain(&self, path: &[UnitHandle], next: Option<&str>) -> Vec<String> {
        path.iter()
            .map(|handle| self.registry.get(*handle).id().to_string())
            .chain(next.map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests;
