use std::path::Path;

use anyhow::Result;
use brainc::application::{scaffold_unit, ScaffoldOptions};
use brainc::domain::entities::UnitKind;
use brainc::infrastructure::LocalFs;

use crate::cli::ColorWhen;
use crate::commands::load_config;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::views::make::render_scaffolded;

pub fn cmd_make(
    source: &Path,
    kind: UnitKind,
    name: &str,
    description: Option<String>,
    force: bool,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let (_config, ui) = load_config(source, "make", json, color)?;

    let mut options = ScaffoldOptions::new(source, kind, name).with_force(force);
    if let Some(description) = description {
        options = options.with_description(description);
    }

    let created = scaffold_unit(&LocalFs::new(), &options)?;

    if ui.json {
        emit_event(&StartEvent::new("make"))?;
        emit_event(&DataEvent::new(
            "make",
            serde_json::json!({
                "kind": created.kind.as_str(),
                "id": created.id,
                "path": created.path.display().to_string(),
            }),
        ))?;
        emit_event(&CompleteEvent::success("make"))?;
    } else {
        print!("{}", render_scaffolded(&created, ui.color, ui.unicode));
    }

    Ok(())
}
