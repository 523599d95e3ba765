//! Infrastructure Adapters
//!
//! These adapters implement the TargetAdapter port from the domain layer.
//! They place rendered documents into each host's directory layout.

pub mod claude;
pub mod codex;
mod documents;
pub mod gemini;
pub mod qwen;

pub use claude::ClaudeAdapter;
pub use codex::CodexAdapter;
pub use gemini::GeminiAdapter;
pub use qwen::QwenAdapter;

use crate::domain::ports::TargetAdapter;
use crate::domain::value_objects::Target;

/// Get all available adapters, in `Target::ALL` order
pub fn all_adapters() -> Vec<Box<dyn TargetAdapter>> {
    Target::ALL.iter().map(|target| get_adapter(*target)).collect()
}

/// Get adapter for a specific target
pub fn get_adapter(target: Target) -> Box<dyn TargetAdapter> {
    match target {
        Target::Claude => Box::new(ClaudeAdapter::new()),
        Target::Codex => Box::new(CodexAdapter::new()),
        Target::Gemini => Box::new(GeminiAdapter::new()),
        Target::Qwen => Box::new(QwenAdapter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_adapters_cover_every_target() {
        let targets: Vec<Target> = all_adapters().iter().map(|a| a.target()).collect();
        assert_eq!(targets, Target::ALL.to_vec());
    }

    #[test]
    fn get_adapter_matches_target() {
        for target in Target::ALL {
            assert_eq!(get_adapter(target).target(), target);
        }
    }

    #[test]
    fn brain_paths_are_distinct() {
        let paths: std::collections::BTreeSet<_> = all_adapters()
            .iter()
            .filter_map(|a| a.path_for(crate::domain::entities::UnitKind::Brain, "brain"))
            .collect();
        assert_eq!(paths.len(), 4);
    }
}
