use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use brainc::application::CompileOptions;
use brainc::domain::ports::{CompileEventSink, NoopEventSink};
use brainc::domain::value_objects::Target;
use brainc::infrastructure::{load_env, JsonEventSink};
use brainc::presentation::factory;

use crate::cli::ColorWhen;
use crate::commands::load_config;
use crate::ui::views::compile::{
    render_compile_header, render_compile_summary, render_target_report,
};

pub fn cmd_compile(
    source: &Path,
    target: Option<Target>,
    strict: bool,
    dry_run: bool,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let (config, ui) = load_config(source, "compile", json, color)?;

    let targets = match target {
        Some(target) => vec![target],
        None => config.enabled_targets(),
    };

    let options = CompileOptions::new(source);
    let output_root = config.output_root(&options.project_root);
    let options = options
        .with_output_root(output_root)
        .with_targets(targets.clone())
        .with_formats(config.formats()?)
        .with_strict(strict || config.compile.strict)
        .with_dry_run(dry_run)
        .with_variables(config.variables.clone())
        .with_env(load_env(source)?);

    if !ui.json {
        print!(
            "{}",
            render_compile_header(source, &targets, dry_run, ui.color, ui.unicode)
        );
    }

    let sink: Arc<dyn CompileEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(NoopEventSink)
    };

    let use_case = factory::create_compile_use_case();
    let result = use_case.execute_with_events(&options, sink)?;

    if !ui.json {
        println!();
        for report in &result.targets {
            print!(
                "{}",
                render_target_report(report, verbose, ui.color, ui.unicode)
            );
        }
        println!();
        print!(
            "{}",
            render_compile_summary(&result, dry_run, ui.color, ui.unicode)
        );
    }

    if !result.is_success() {
        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }

    Ok(())
}
