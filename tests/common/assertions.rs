//! Assertion macros with descriptive failure messages.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that a file was generated relative to the project root.
#[macro_export]
macro_rules! assert_written {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            full_path.exists(),
            "Expected file at '{}', but it doesn't exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.project_root.path()).join("\n  ")
        );
    };
}

/// Assert that a file was NOT generated.
#[macro_export]
macro_rules! assert_not_written {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            !full_path.exists(),
            "Expected '{}' to NOT exist, but it does.",
            $path
        );
    };
}

/// Assert the command succeeded, showing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "command failed ({}):\n{}",
            $result.exit_code,
            $result.combined_output()
        );
    };
}
