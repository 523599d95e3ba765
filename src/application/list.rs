//! List - enumerate registered units (`list`, `<kind>:list`)

use std::path::Path;

use crate::domain::entities::UnitKind;
use crate::domain::ports::UnitSource;
use crate::domain::services::UnitRegistry;
use crate::error::BraincResult;

/// One registered unit, as shown by `list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSummary {
    pub kind: UnitKind,
    pub id: String,
    pub description: String,
    pub includes: Vec<String>,
    pub rules: usize,
    pub guidelines: usize,
}

impl UnitSummary {
    /// `kind:id`
    pub fn label(&self) -> String {
        format!("{}:{}", self.kind, self.id)
    }
}

/// Load and register every unit under `source`, optionally keeping one kind.
///
/// Registration runs in full so `list` reports the same duplicate ids and
/// missing fields `compile` would.
pub fn list_units(
    unit_source: &dyn UnitSource,
    source: &Path,
    kind: Option<UnitKind>,
) -> BraincResult<Vec<UnitSummary>> {
    let mut registry = UnitRegistry::new();
    for unit in unit_source.load_all(source)? {
        registry.register(unit)?;
    }

    Ok(registry
        .iter()
        .map(|(_, record)| record)
        .filter(|record| kind.map_or(true, |kind| record.kind() == kind))
        .map(|record| UnitSummary {
            kind: record.kind(),
            id: record.id().to_string(),
            description: record.def().description().to_string(),
            includes: record.def().includes().to_vec(),
            rules: record.ast().rules.len(),
            guidelines: record.ast().guidelines.len(),
        })
        .collect())
}
