pub mod compile;
pub mod docs;
pub mod list;
pub mod make;

use std::path::Path;

use anyhow::Result;
use brainc::config::{Config, ConfigWarning};
use brainc::domain::services::ResolveError;
use brainc::BraincError;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ErrorEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Load config for `source`, apply `BRAINC_*` overrides and report unknown keys
pub fn load_config(
    source: &Path,
    command: &str,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<(Config, UiContext)> {
    let (config, warnings) = Config::load_or_default(source)?;
    let config = config.with_env_overrides();
    let ui = UiContext::new(json, color, &config);
    report_config_warnings(command, &warnings, &ui);
    Ok((config, ui))
}

fn report_config_warnings(command: &str, warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        if ui.json {
            let _ = emit_event(&serde_json::json!({
                "event": "warning",
                "command": command,
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }));
        } else {
            eprintln!(
                "{} {}",
                Icon::Warning.colored(ui.color, ui.unicode),
                ColoredText::warning(warning.to_string()).render(ui.color)
            );
        }
    }
}

/// Report a command failure on stderr, or as `error` + `complete` events
pub fn report_error(command: &str, err: &anyhow::Error, ui: &UiContext) {
    let brainc_err = err.downcast_ref::<BraincError>();
    let code = brainc_err.map(BraincError::code).unwrap_or("error");
    let chain = match brainc_err {
        Some(BraincError::Resolve(resolve)) => resolve.chain().to_vec(),
        _ => err
            .downcast_ref::<ResolveError>()
            .map(|resolve| resolve.chain().to_vec())
            .unwrap_or_default(),
    };

    if ui.json {
        let _ = emit_event(
            &ErrorEvent::new(command, code, format!("{:#}", err)).with_chain(chain),
        );
        let _ = emit_event(&CompleteEvent::failure(command));
        return;
    }

    eprintln!(
        "{} {}",
        Icon::Error.colored(ui.color, ui.unicode),
        ColoredText::error(format!("{:#}", err)).render(ui.color)
    );
    if !chain.is_empty() {
        eprintln!(
            "  {} {} {}",
            Icon::Arrow.colored(ui.color, ui.unicode),
            ColoredText::dim("Include chain:").render(ui.color),
            chain.join(" → ")
        );
    }
}

/// Project root of a source directory (its parent, or `.`)
pub fn project_root(source: &Path) -> &Path {
    source
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn project_root_of_relative_source_is_cwd() {
        assert_eq!(project_root(Path::new(".brain")), Path::new("."));
        assert_eq!(
            project_root(Path::new("/work/.brain")),
            PathBuf::from("/work").as_path()
        );
    }
}
