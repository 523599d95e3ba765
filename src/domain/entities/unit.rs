//! Unit entity - a registered configuration definition
//!
//! A unit is a plain data-producing function (`build`) registered under a
//! `(kind, id)` key, together with its explicit metadata and include list.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::builder::Builder;
use crate::domain::value_objects::{hook_key, normalize_key};

/// Kind of unit
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// The top-level instructions document for a project
    Brain,
    /// Specialized sub-agent
    Agent,
    /// Directory-based skill
    Skill,
    /// Slash command
    Command,
    /// Reusable fragment merged into other units; never rendered on its own
    Include,
    /// MCP server declaration
    Mcp,
}

impl UnitKind {
    pub const ALL: [UnitKind; 6] = [
        UnitKind::Brain,
        UnitKind::Agent,
        UnitKind::Skill,
        UnitKind::Command,
        UnitKind::Include,
        UnitKind::Mcp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Brain => "brain",
            UnitKind::Agent => "agent",
            UnitKind::Skill => "skill",
            UnitKind::Command => "command",
            UnitKind::Include => "include",
            UnitKind::Mcp => "mcp",
        }
    }

    /// Source sub-directory holding units of this kind
    pub fn directory(&self) -> &'static str {
        match self {
            UnitKind::Brain => ".",
            UnitKind::Agent => "agents",
            UnitKind::Skill => "skills",
            UnitKind::Command => "commands",
            UnitKind::Include => "includes",
            UnitKind::Mcp => "mcp",
        }
    }

    /// Whether units of this kind produce a standalone document
    pub fn renders_document(&self) -> bool {
        !matches!(self, UnitKind::Include | UnitKind::Mcp)
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UnitKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown unit kind '{}'", s))
    }
}

/// Declarative key → value annotations (model, color, tools...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, Value>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Exact key lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Lookup by variable name (`node-dir`, `NODE_DIR` and `node_dir` all match)
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let wanted = normalize_key(name);
        self.0
            .iter()
            .find(|(key, _)| normalize_key(key) == wanted)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Computed-default hook: receives the value found by the env/runtime/meta
/// chain (if any) and returns the final value (or `None` for "undefined").
pub type Hook = Arc<dyn Fn(Option<Value>) -> Option<Value> + Send + Sync>;

/// The unit's `build()` entry point
pub type BuildFn = Arc<dyn Fn(&mut Builder) + Send + Sync>;

/// Hooks keyed by lower-cased variable name
#[derive(Clone, Default)]
pub struct Hooks(BTreeMap<String, Hook>);

impl Hooks {
    pub fn insert(&mut self, name: &str, hook: Hook) {
        self.0.insert(hook_key(name), hook);
    }

    pub fn get(&self, name: &str) -> Option<&Hook> {
        self.0.get(&hook_key(name))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

/// MCP server entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct McpServer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A unit definition as registered
#[derive(Clone)]
pub struct UnitDef {
    kind: UnitKind,
    id: String,
    description: String,
    metadata: Metadata,
    includes: Vec<String>,
    hooks: Hooks,
    mcp: Option<McpServer>,
    build: Option<BuildFn>,
}

impl UnitDef {
    pub fn new(kind: UnitKind, id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            description: description.into(),
            metadata: Metadata::default(),
            includes: Vec::new(),
            hooks: Hooks::default(),
            mcp: None,
            build: None,
        }
    }

    /// Builder: add one metadata entry
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: replace all metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Builder: declare an included fragment (order matters)
    pub fn with_include(mut self, name: impl Into<String>) -> Self {
        self.includes.push(name.into());
        self
    }

    pub fn with_includes(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.includes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Builder: register a variable hook, keyed by the lower-cased variable name
    pub fn with_hook<F>(mut self, name: &str, hook: F) -> Self
    where
        F: Fn(Option<Value>) -> Option<Value> + Send + Sync + 'static,
    {
        self.hooks.insert(name, Arc::new(hook));
        self
    }

    /// Builder: MCP server declaration (Mcp units only)
    pub fn with_mcp(mut self, server: McpServer) -> Self {
        self.mcp = Some(server);
        self
    }

    /// Builder: the `build()` entry point
    pub fn with_build<F>(mut self, build: F) -> Self
    where
        F: Fn(&mut Builder) + Send + Sync + 'static,
    {
        self.build = Some(Arc::new(build));
        self
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `kind:id`, as shown to users
    pub fn label(&self) -> String {
        format!("{}:{}", self.kind, self.id)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    pub fn mcp(&self) -> Option<&McpServer> {
        self.mcp.as_ref()
    }

    /// Run `build()` into a fresh builder
    pub fn build(&self) -> Builder {
        let mut builder = Builder::new();
        if let Some(build) = &self.build {
            build(&mut builder);
        }
        builder
    }
}

impl std::fmt::Debug for UnitDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitDef")
            .field("kind", &self.kind)
            .field("id", &self.id)
            .field("description", &self.description)
            .field("metadata", &self.metadata)
            .field("includes", &self.includes)
            .field("hooks", &self.hooks)
            .field("mcp", &self.mcp)
            .finish_non_exhaustive()
    }
}
