//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigWarning, Target};
use crate::error::{BraincError, BraincResult};

use super::types::{ColorMode, Config};

/// File name of the project config inside the source directory
pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BraincResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BraincError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(&content, &leaf),
                suggestion: suggest_key(&leaf),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the source directory's config, the user config, or defaults.
///
/// The first file found wins; files are not merged. A broken file is an
/// error rather than a silent fallback.
pub fn load_or_default(source: &Path) -> BraincResult<(Config, Vec<ConfigWarning>)> {
    let project_config = source.join(CONFIG_FILE);
    if project_config.is_file() {
        tracing::debug!(path = %project_config.display(), "using project config");
        return load_with_warnings(&project_config);
    }

    if let Some(user_config) = user_config_path().filter(|p| p.is_file()) {
        tracing::debug!(path = %user_config.display(), "using user config");
        return load_with_warnings(&user_config);
    }

    Ok((Config::default(), Vec::new()))
}

/// `~/.config/brainc/config.toml` (platform equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("brainc").join(CONFIG_FILE))
}

/// Apply environment variable overrides (BRAINC_* prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // BRAINC_TARGETS (comma-separated)
    if let Some(targets) = get_env("BRAINC_TARGETS") {
        let parsed: Vec<Target> = targets
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .filter_map(|s| match s.parse::<Target>() {
                Ok(target) => Some(target),
                Err(e) => {
                    tracing::warn!("BRAINC_TARGETS: {}", e);
                    None
                }
            })
            .collect();
        if !parsed.is_empty() {
            config.targets.enabled = parsed;
        }
    }

    // BRAINC_STRICT
    if let Some(val) = get_env("BRAINC_STRICT") {
        config.compile.strict = is_truthy(&val);
    }

    // BRAINC_OUTPUT_DIR
    if let Some(dir) = get_env("BRAINC_OUTPUT_DIR").filter(|d| !d.trim().is_empty()) {
        config.compile.output_dir = Some(PathBuf::from(dir));
    }

    // BRAINC_COLOR
    if let Some(mode) = get_env("BRAINC_COLOR") {
        match mode.parse::<ColorMode>() {
            Ok(mode) => config.output.color = mode,
            Err(e) => tracing::warn!("{}", e),
        }
    }

    config
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "targets",
        "enabled",
        "formats",
        "compile",
        "strict",
        "output_dir",
        "output",
        "color",
        "unicode",
        "variables",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
