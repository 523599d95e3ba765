//! Environment variable source
//!
//! `<source>/.env` provides project defaults; the process environment
//! overrides them.

use std::path::Path;

use crate::domain::services::EnvSource;
use crate::error::BraincResult;

/// Name of the dotenv file inside the source directory
pub const DOTENV_FILE: &str = ".env";

/// Read `<source>/.env` (if present), overlaid by the process environment
pub fn load_env(source: &Path) -> BraincResult<EnvSource> {
    Ok(load_dotenv(source)?.overlay(EnvSource::from_process()))
}

/// Only the `.env` file, without the process environment
pub fn load_dotenv(source: &Path) -> BraincResult<EnvSource> {
    let path = source.join(DOTENV_FILE);
    if !path.is_file() {
        return Ok(EnvSource::new());
    }

    let env = EnvSource::parse_dotenv(&std::fs::read_to_string(&path)?);
    tracing::debug!(path = %path.display(), entries = env.len(), "loaded dotenv");
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_dotenv_is_empty() {
        let dir = tempdir().unwrap();
        assert!(load_dotenv(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn dotenv_entries_are_loaded() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "# comment\nNODE_DIR=/src/\nexport API_URL=\"https://api.test\"\n",
        )
        .unwrap();

        let env = load_dotenv(dir.path()).unwrap();

        assert_eq!(env.get("NODE_DIR"), Some("/src/"));
        assert_eq!(env.get("API_URL"), Some("https://api.test"));
    }

    #[test]
    fn process_environment_wins() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "PATH=/from/dotenv\n").unwrap();

        let env = load_env(dir.path()).unwrap();

        if let Ok(path) = std::env::var("PATH") {
            assert_eq!(env.get("PATH"), Some(path.as_str()));
        }
    }
}
