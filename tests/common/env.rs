//! Test environment builder for isolated brainc runs.
//!
//! Provides `TestEnv` - a temp project directory and a temp HOME, plus
//! helpers to run the brainc binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{BRAIN, CORE_INCLUDE, GITHUB_MCP, REVIEWER_AGENT};

/// Result of running a brainc CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory for HOME (keeps the user config out of the way)
    pub home_dir: TempDir,
    brainc_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run brainc from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run brainc from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.brainc_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env("LC_ALL", "C")
            .env_remove("RUST_LOG")
            .env_remove("BRAINC_TARGETS")
            .env_remove("BRAINC_STRICT")
            .env_remove("BRAINC_OUTPUT_DIR")
            .env_remove("BRAINC_COLOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute brainc");
        output_to_result(output)
    }

    /// Read a generated file
    pub fn read_project_file(&self, relative_path: &str) -> String {
        let full_path = self.project_path(relative_path);
        std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for `TestEnv`
#[derive(Default)]
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit file under `.brain/`
    pub fn with_unit(mut self, relative_path: &str, content: &str) -> Self {
        self.files
            .push((format!(".brain/{}", relative_path), content.to_string()));
        self
    }

    /// Add `.brain/config.toml`
    pub fn with_config(self, content: &str) -> Self {
        self.with_unit("config.toml", content)
    }

    /// Add any file relative to the project root
    pub fn with_project_file(mut self, relative_path: &str, content: &str) -> Self {
        self.files
            .push((relative_path.to_string(), content.to_string()));
        self
    }

    /// The standard brain + include + agent + mcp set
    pub fn with_standard_units(self) -> Self {
        self.with_unit("brain.yaml", BRAIN)
            .with_unit("includes/core.yaml", CORE_INCLUDE)
            .with_unit("agents/reviewer.yaml", REVIEWER_AGENT)
            .with_unit("mcp/github.yaml", GITHUB_MCP)
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            brainc_bin: PathBuf::from(env!("CARGO_BIN_EXE_brainc")),
        };
        for (path, content) in &self.files {
            env.write_project_file(path, content);
        }
        env
    }
}
