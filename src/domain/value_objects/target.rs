//! Target value object - which AI host to compile for, and in which format

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Serialization used for a target's documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Tree-structured markup
    Xml,
    /// Object notation
    Json,
    /// Indented mapping
    Yaml,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Format {
    type Err = crate::error::BraincError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xml" | "markup" => Ok(Format::Xml),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(crate::error::BraincError::UnsupportedTargetFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Target AI host
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// Claude Code (Anthropic)
    Claude,
    /// OpenAI Codex CLI
    Codex,
    /// Gemini CLI (Google)
    Gemini,
    /// Qwen Code
    Qwen,
}

impl Target {
    pub const ALL: [Target; 4] = [Target::Claude, Target::Codex, Target::Gemini, Target::Qwen];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Claude => "claude",
            Target::Codex => "codex",
            Target::Gemini => "gemini",
            Target::Qwen => "qwen",
        }
    }

    /// Host configuration directory
    pub fn directory_name(&self) -> &'static str {
        match self {
            Target::Claude => ".claude",
            Target::Codex => ".codex",
            Target::Gemini => ".gemini",
            Target::Qwen => ".qwen",
        }
    }

    pub fn default_format(&self) -> Format {
        match self {
            Target::Claude => Format::Xml,
            Target::Codex => Format::Yaml,
            Target::Gemini | Target::Qwen => Format::Json,
        }
    }

    /// Directory for this target's documents, relative to the output root
    pub fn directory(&self) -> PathBuf {
        PathBuf::from(self.directory_name())
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Target::Claude => "Claude Code",
            Target::Codex => "Codex",
            Target::Gemini => "Gemini CLI",
            Target::Qwen => "Qwen Code",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "claude" | "claude-code" => Ok(Target::Claude),
            "codex" => Ok(Target::Codex),
            "gemini" => Ok(Target::Gemini),
            "qwen" => Ok(Target::Qwen),
            other => Err(format!("unknown target '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_all_has_4_targets() {
        assert_eq!(Target::ALL.len(), 4);
    }

    #[test]
    fn target_directory_names() {
        assert_eq!(Target::Claude.directory_name(), ".claude");
        assert_eq!(Target::Codex.directory_name(), ".codex");
        assert_eq!(Target::Gemini.directory_name(), ".gemini");
        assert_eq!(Target::Qwen.directory_name(), ".qwen");
    }

    #[test]
    fn target_default_formats() {
        assert_eq!(Target::Claude.default_format(), Format::Xml);
        assert_eq!(Target::Codex.default_format(), Format::Yaml);
        assert_eq!(Target::Gemini.default_format(), Format::Json);
    }

    #[test]
    fn target_serde_kebab_case() {
        let json = serde_json::to_string(&Target::Claude).unwrap();
        assert_eq!(json, "\"claude\"");
        let parsed: Target = serde_json::from_str("\"qwen\"").unwrap();
        assert_eq!(parsed, Target::Qwen);
    }

    #[test]
    fn target_from_str_accepts_aliases() {
        assert_eq!("claude-code".parse::<Target>(), Ok(Target::Claude));
        assert_eq!(" Gemini ".parse::<Target>(), Ok(Target::Gemini));
        assert!("cursor".parse::<Target>().is_err());
    }

    #[test]
    fn format_from_str() {
        assert_eq!("XML".parse::<Format>().unwrap(), Format::Xml);
        assert_eq!("yml".parse::<Format>().unwrap(), Format::Yaml);
        let err = "toml".parse::<Format>().unwrap_err();
        assert_eq!(err.code(), "unsupported_target_format");
    }
}
