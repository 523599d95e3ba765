//! Unit registry
//!
//! Arena of unit records addressed by `UnitHandle`. Each unit's `build()` runs
//! exactly once, at registration; the resulting AST is immutable afterwards.

use std::collections::HashMap;

use crate::domain::entities::{Ast, UnitDef, UnitKind};

/// Index into the registry arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitHandle(usize);

impl UnitHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A registered unit and the AST its `build()` produced
#[derive(Debug, Clone)]
pub struct UnitRecord {
    def: UnitDef,
    ast: Ast,
}

impl UnitRecord {
    pub fn def(&self) -> &UnitDef {
        &self.def
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn kind(&self) -> UnitKind {
        self.def.kind()
    }

    pub fn id(&self) -> &str {
        self.def.id()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate {kind} id '{id}'")]
    DuplicateUnitId { kind: UnitKind, id: String },

    #[error("{unit}: missing required field '{field}'")]
    MissingRequiredField { unit: String, field: String },

    #[error("invalid {kind} id '{id}' (ids must be a single file name)")]
    InvalidUnitId { kind: UnitKind, id: String },
}

impl RegistryError {
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::DuplicateUnitId { .. } => "duplicate_unit_id",
            RegistryError::MissingRequiredField { .. } => "missing_required_field",
            RegistryError::InvalidUnitId { .. } => "invalid_unit_id",
        }
    }
}

#[derive(Debug, Default)]
pub struct UnitRegistry {
    records: Vec<UnitRecord>,
    index: HashMap<(UnitKind, String), UnitHandle>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit, running its `build()` and validating the result.
    ///
    /// Ids are unique per kind: an agent and a command may share an id.
    pub fn register(&mut self, def: UnitDef) -> Result<UnitHandle, RegistryError> {
        if def.id().trim().is_empty() {
            return Err(RegistryError::MissingRequiredField {
                unit: def.kind().to_string(),
                field: "id".to_string(),
            });
        }

        if !is_valid_id(def.id()) {
            return Err(RegistryError::InvalidUnitId {
                kind: def.kind(),
                id: def.id().to_string(),
            });
        }

        let key = (def.kind(), def.id().to_string());
        if self.index.contains_key(&key) {
            return Err(RegistryError::DuplicateUnitId {
                kind: def.kind(),
                id: def.id().to_string(),
            });
        }

        if def.description().trim().is_empty() {
            return Err(RegistryError::MissingRequiredField {
                unit: def.label(),
                field: "description".to_string(),
            });
        }

        let ast = def.build().finish();
        if let Some((rule, field)) = ast
            .rules
            .iter()
            .find_map(|rule| rule.missing_field().map(|field| (rule, field)))
        {
            return Err(RegistryError::MissingRequiredField {
                unit: def.label(),
                field: format!("rule '{}'.{}", rule.id, field),
            });
        }

        let handle = UnitHandle(self.records.len());
        tracing::debug!(unit = %def.label(), rules = ast.rules.len(), "registered unit");
        self.records.push(UnitRecord { def, ast });
        self.index.insert(key, handle);
        Ok(handle)
    }

    pub fn find(&self, kind: UnitKind, id: &str) -> Option<UnitHandle> {
        self.index.get(&(kind, id.to_string())).copied()
    }

    pub fn get(&self, handle: UnitHandle) -> &UnitRecord {
        &self.records[handle.0]
    }

    /// All records, in registration order
    pub fn iter(&self) -> impl Iterator<Item = (UnitHandle, &UnitRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (UnitHandle(i), record))
    }

    pub fn of_kind(&self, kind: UnitKind) -> impl Iterator<Item = (UnitHandle, &UnitRecord)> {
        self.iter().filter(move |(_, record)| record.kind() == kind)
    }

    /// Units compiled on their own: everything except Include fragments
    pub fn roots(&self) -> impl Iterator<Item = (UnitHandle, &UnitRecord)> {
        self.iter()
            .filter(|(_, record)| record.kind() != UnitKind::Include)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Ids become file names, so they must stay a single path segment
fn is_valid_id(id: &str) -> bool {
    !matches!(id, "." | "..") && !id.contains(['/', '\\', ':'])
}
