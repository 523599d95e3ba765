//! Docs - index Markdown documentation next to the source directory

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{BraincError, BraincResult};

/// Directory scanned by `docs`, relative to the project root
pub const DOCS_DIR: &str = "docs";

/// A documentation file matching the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMatch {
    /// Path relative to the docs directory
    pub path: PathBuf,
    /// First Markdown heading, if any
    pub title: Option<String>,
    /// Total keyword occurrences (0 when no keywords were given)
    pub score: usize,
}

/// Walk `docs_dir` (respecting ignore files) and rank Markdown files.
///
/// Without keywords every document is listed in path order. With keywords,
/// documents mentioning none of them are dropped and the rest are sorted by
/// score, best first.
pub fn search_docs(docs_dir: &Path, keywords: &[String]) -> BraincResult<Vec<DocMatch>> {
    if !docs_dir.is_dir() {
        return Err(BraincError::DirectoryNotFound {
            path: docs_dir.to_path_buf(),
        });
    }

    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    let mut matches = Vec::new();
    for entry in WalkBuilder::new(docs_dir).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping docs entry: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || !is_markdown(path) {
            continue;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), "skipping unreadable doc: {}", e);
                continue;
            }
        };
        let score = score(&content, &keywords);
        if !keywords.is_empty() && score == 0 {
            continue;
        }

        matches.push(DocMatch {
            path: path.strip_prefix(docs_dir).unwrap_or(path).to_path_buf(),
            title: first_heading(&content),
            score,
        });
    }

    matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.path.cmp(&b.path)));
    tracing::debug!(dir = %docs_dir.display(), matches = matches.len(), "indexed docs");
    Ok(matches)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

fn score(content: &str, keywords: &[String]) -> usize {
    let haystack = content.to_lowercase();
    keywords
        .iter()
        .map(|keyword| haystack.matches(keyword.as_str()).count())
        .sum()
}

fn first_heading(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim().to_string())
        .filter(|title| !title.is_empty())
}
