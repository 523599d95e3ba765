use std::path::Path;

use anyhow::Result;
use brainc::application::{search_docs, DOCS_DIR};

use crate::cli::ColorWhen;
use crate::commands::{load_config, project_root};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::views::docs::render_docs;

pub fn cmd_docs(
    source: &Path,
    keywords: &[String],
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let (_config, ui) = load_config(source, "docs", json, color)?;

    let docs_dir = project_root(source).join(DOCS_DIR);
    let matches = search_docs(&docs_dir, keywords)?;

    if ui.json {
        let documents: Vec<serde_json::Value> = matches
            .iter()
            .map(|doc| {
                serde_json::json!({
                    "path": doc.path.display().to_string(),
                    "title": doc.title,
                    "score": doc.score,
                })
            })
            .collect();
        emit_event(&StartEvent::new("docs"))?;
        emit_event(&DataEvent::new(
            "docs",
            serde_json::json!({ "keywords": keywords, "documents": documents }),
        ))?;
        emit_event(&CompleteEvent::success("docs"))?;
    } else {
        print!(
            "{}",
            render_docs(&docs_dir, keywords, &matches, ui.color, ui.unicode)
        );
    }

    Ok(())
}
