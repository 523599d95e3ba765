//! Compile-time variable resolution
//!
//! Lookup order, first hit wins:
//! 1. env/settings source (upper-snake key, value coerced)
//! 2. runtime variables set by the orchestrator
//! 3. the unit's metadata
//! 4. the unit's hook named after the lower-cased variable; it sees the value
//!    found so far (if any) and its return value is final
//!
//! Nothing is cached; lookups are pure reads.

use std::collections::BTreeMap;
use std::ffi::OsString;

use serde_json::Value;

use crate::domain::entities::{Hooks, Metadata, UnitDef};
use crate::domain::value_objects::{coerce, display_value, normalize_key, Origin, Variable};

/// Raw settings strings keyed by normalized name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSource(BTreeMap<String, String>);

impl EnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process environment
    pub fn from_process() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Pairs that are not valid UTF-8 are skipped
    pub fn from_os_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        vars.into_iter()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Parse `.env` content: `KEY=VALUE` lines, `#` comments, optional
    /// `export ` prefix, matching single or double quotes stripped.
    pub fn parse_dotenv(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let line = line.strip_prefix("export ").unwrap_or(line);
                let (key, value) = line.split_once('=')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                Some((key.to_string(), unquote(value.trim()).to_string()))
            })
            .collect()
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(normalize_key(name), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&normalize_key(name)).map(String::as_str)
    }

    /// Entries of `other` replace entries of `self`
    pub fn overlay(mut self, other: EnvSource) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for EnvSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = EnvSource::new();
        for (key, value) in iter {
            env.insert(key.as_ref(), value);
        }
        env
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Process-wide variables (paths, date, target) keyed by normalized name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuntimeVars(BTreeMap<String, Value>);

impl RuntimeVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.0.insert(normalize_key(name), value.into());
    }

    /// Builder form of `insert`
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(&normalize_key(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// The layered lookup chain for one unit
#[derive(Debug, Clone, Copy)]
pub struct VariableResolver<'a> {
    env: &'a EnvSource,
    runtime: &'a RuntimeVars,
    meta: Option<&'a Metadata>,
    hooks: Option<&'a Hooks>,
}

impl<'a> VariableResolver<'a> {
    pub fn new(env: &'a EnvSource, runtime: &'a RuntimeVars) -> Self {
        Self {
            env,
            runtime,
            meta: None,
            hooks: None,
        }
    }

    /// Scope the chain to a unit's metadata and hooks
    pub fn for_unit(self, def: &'a UnitDef) -> Self {
        self.with_metadata(def.metadata()).with_hooks(def.hooks())
    }

    pub fn with_metadata(mut self, meta: &'a Metadata) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_hooks(mut self, hooks: &'a Hooks) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Walk the chain; `None` when nothing (and no hook) produced a value
    pub fn lookup(&self, name: &str) -> Option<Variable> {
        let found = self
            .env
            .get(name)
            .map(|raw| (coerce(raw), Origin::Env))
            .or_else(|| {
                self.runtime
                    .get(name)
                    .map(|value| (value.clone(), Origin::Runtime))
            })
            .or_else(|| {
                self.meta
                    .and_then(|meta| meta.lookup(name))
                    .map(|value| (value.clone(), Origin::Meta))
            });

        let (value, origin) = match self.hooks.and_then(|hooks| hooks.get(name)) {
            Some(hook) => (hook(found.map(|(value, _)| value))?, Origin::Hook),
            None => found?,
        };

        tracing::trace!(variable = name, origin = origin.as_str(), "resolved variable");
        Some(Variable {
            name: normalize_key(name),
            value,
            origin,
        })
    }

    /// Resolve `name`, falling back to `default`
    pub fn resolve(&self, name: &str, default: impl Into<Value>) -> Value {
        self.resolve_variable(name, default).value
    }

    pub fn resolve_variable(&self, name: &str, default: impl Into<Value>) -> Variable {
        self.lookup(name).unwrap_or_else(|| Variable {
            name: normalize_key(name),
            value: default.into(),
            origin: Origin::Default,
        })
    }
}

/// Resolve a puzzle variable.
///
/// Without a compile context the value is the marker `[puzzle.<name>]`;
/// with one it is whatever the chain finds.
pub fn puzzle(name: &str, context: Option<&VariableResolver<'_>>) -> Option<Value> {
    match context {
        None => Some(Value::String(format!("[puzzle.{}]", name))),
        Some(resolver) => resolver.lookup(name).map(|variable| variable.value),
    }
}

/// Replace every `{path}` in `text` with the value at dotted `path` in `source`.
///
/// `pattern` must contain one `*` marking where the path goes (default `{*}`).
/// Unresolved paths render as the empty string.
pub fn tag_replace(text: &str, source: &Value, pattern: Option<&str>) -> String {
    let pattern = pattern.unwrap_or("{*}");
    let Some((open, close)) = pattern.split_once('*') else {
        return text.to_string();
    };
    if open.is_empty() || close.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(open) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + open.len()..];

        let path = after_open
            .find(close)
            .map(|end| &after_open[..end])
            .filter(|path| is_tag_path(path, open));

        match path {
            Some(path) => {
                if let Some(value) = value_at(source, path) {
                    out.push_str(&display_value(value));
                }
                rest = &after_open[path.len() + close.len()..];
            }
            None => {
                out.push_str(open);
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_tag_path(path: &str, open: &str) -> bool {
    !path.is_empty() && !path.contains(open) && !path.chars().any(char::is_whitespace)
}

fn value_at<'v>(source: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(source, |value, segment| match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// A `{{ NAME }}` token no source could fill (strict mode only)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unresolved placeholder {{{{ {name} }}}}")]
pub struct UnresolvedPlaceholder {
    pub name: String,
}

/// Substitute `{{ NAME }}` placeholders.
///
/// - `\{{` is an escaped literal `{{`
/// - malformed tokens are left untouched
/// - `{{ puzzle.X }}` goes through [`puzzle`]
/// - unresolved tokens stay literal, or fail when `strict`
pub fn substitute(
    text: &str,
    context: Option<&VariableResolver<'_>>,
    strict: bool,
) -> Result<String, UnresolvedPlaceholder> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        if rest[..start].ends_with('\\') {
            out.push_str(&rest[..start - 1]);
            out.push_str("{{");
            rest = &rest[start + 2..];
            continue;
        }

        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return Ok(out);
        };

        let token = &rest[start..start + 2 + end + 2];
        let name = after_open[..end].trim();
        rest = &after_open[end + 2..];

        if !is_placeholder_name(name) {
            out.push_str(token);
            continue;
        }

        let value = match name.strip_prefix("puzzle.") {
            Some(puzzle_name) => puzzle(puzzle_name, context),
            None => context.and_then(|resolver| resolver.lookup(name).map(|v| v.value)),
        };

        match value {
            Some(value) => out.push_str(&display_value(&value)),
            None if strict => {
                return Err(UnresolvedPlaceholder {
                    name: name.to_string(),
                })
            }
            None => {
                tracing::debug!(placeholder = name, "leaving unresolved placeholder");
                out.push_str(token);
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
