use std::path::Path;

use anyhow::Result;
use brainc::application::list_units;
use brainc::domain::entities::UnitKind;
use brainc::infrastructure::FsUnitRepository;

use crate::cli::ColorWhen;
use crate::commands::load_config;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::views::list::render_list;

pub fn cmd_list(
    source: &Path,
    kind: Option<UnitKind>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let (_config, ui) = load_config(source, "list", json, color)?;

    let units = list_units(&FsUnitRepository::new(), source, kind)?;

    if ui.json {
        let units: Vec<serde_json::Value> = units
            .iter()
            .map(|unit| {
                serde_json::json!({
                    "kind": unit.kind.as_str(),
                    "id": unit.id,
                    "description": unit.description,
                    "includes": unit.includes,
                    "rules": unit.rules,
                    "guidelines": unit.guidelines,
                })
            })
            .collect();
        emit_event(&StartEvent::new("list"))?;
        emit_event(&DataEvent::new(
            "list",
            serde_json::json!({ "count": units.len(), "units": units }),
        ))?;
        emit_event(&CompleteEvent::success("list"))?;
    } else {
        print!(
            "{}",
            render_list(&units, kind, verbose, ui.color, ui.unicode)
        );
    }

    Ok(())
}
