//! Variable value object - a resolved compile-time variable
//!
//! Values are `serde_json::Value`s: bool, integer, float, string, list or map.

use serde_json::Value;

/// Where a variable's value came from (diagnostics only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Env,
    Runtime,
    Meta,
    Hook,
    Default,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Env => "env",
            Origin::Runtime => "runtime",
            Origin::Meta => "meta",
            Origin::Hook => "hook",
            Origin::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: Value,
    pub origin: Origin,
}

impl Variable {
    /// String form used when substituting into text
    pub fn render(&self) -> String {
        display_value(&self.value)
    }
}

/// Upper-cased, underscore-normalized key: `node-dir` → `NODE_DIR`
pub fn normalize_key(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Lower-cased hook name: `NODE_DIR` → `node_dir`
pub fn hook_key(name: &str) -> String {
    normalize_key(name).to_ascii_lowercase()
}

/// Coerce a raw settings string into a typed value.
///
/// `"true"`/`"false"` → bool, integers → int, decimals → float, JSON
/// arrays/objects → list/map, anything else stays a string.
pub fn coerce(raw: &str) -> Value {
    let trimmed = raw.trim();

    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if is_integer(trimmed) {
        if let Ok(n) = trimmed.parse::<i64>() {
            return Value::from(n);
        }
    }
    if is_decimal(trimmed) {
        if let Ok(f) = trimmed.parse::<f64>() {
            if let Some(n) = serde_json::Number::from_f64(f) {
                return Value::Number(n);
            }
        }
    }
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        if let Ok(value @ (Value::Array(_) | Value::Object(_))) =
            serde_json::from_str::<Value>(trimmed)
        {
            return value;
        }
    }

    Value::String(raw.to_string())
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    match unsigned.split_once('.') {
        Some((int, frac)) => {
            !int.is_empty()
                && !frac.is_empty()
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// String form of a value: scalars as written, lists/maps as compact JSON,
/// null as the empty string.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
