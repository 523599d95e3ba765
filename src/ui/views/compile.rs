use std::path::Path;

use brainc::application::{CompileResult, TargetReport};
use brainc::domain::ports::WriteStatus;
use brainc::domain::value_objects::Target;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_compile_header(
    source: &Path,
    targets: &[Target],
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Compile, "brainc compile");
    header.add("Source", source.display().to_string());
    let names: Vec<&str> = targets.iter().map(Target::display_name).collect();
    header.add("Targets", names.join(", "));
    if dry_run {
        header.add("Mode", "dry run");
    }
    header.render(supports_color, supports_unicode)
}

/// One line per target, plus one per file with `-v`
pub fn render_target_report(
    report: &TargetReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let name = report.target.display_name();
    let mut out = match &report.error {
        None => format!(
            "{} {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            name,
            ColoredText::dim(format!("({}, {} files)", report.format.as_str(), report.files.len()))
                .render(supports_color)
        ),
        Some(failure) => format!(
            "{} {} {}\n    {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            name,
            ColoredText::dim(format!("[{}]", failure.code)).render(supports_color),
            ColoredText::error(failure.message.as_str()).render(supports_color)
        ),
    };

    if verbose > 0 {
        for file in &report.files {
            let icon = match file.status {
                WriteStatus::Written => Icon::Success,
                WriteStatus::Unchanged | WriteStatus::Planned => Icon::Pending,
            };
            out.push_str(&format!(
                "    {} {} {}\n",
                icon.colored(supports_color, supports_unicode),
                file.path.display(),
                ColoredText::dim(file.status.as_str()).render(supports_color)
            ));
        }
    }

    out
}

pub fn render_compile_summary(
    result: &CompileResult,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let failed = result.failed_targets();
    let mut summary = if failed == 0 {
        ResultSummary::success("Compile complete")
    } else {
        ResultSummary::partial("Compile finished with errors")
    };

    summary.add_stat("units", result.unit_count);
    if dry_run {
        summary.add_stat("files would be written", result.planned());
    } else {
        summary.add_stat("files written", result.written());
    }
    summary.add_stat("files unchanged", result.unchanged());

    if failed > 0 {
        summary.add_warning(format!(
            "{} target{} failed",
            failed,
            if failed == 1 { "" } else { "s" }
        ));
        summary.with_next_step("Fix the errors above and run `brainc compile` again");
    } else if dry_run && result.planned() > 0 {
        summary.with_next_step("Run without --dry-run to write the files");
    }

    summary.render(supports_color, supports_unicode)
}
