use brainc::application::UnitSummary;
use brainc::domain::entities::UnitKind;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_list(
    units: &[UnitSummary],
    kind: Option<UnitKind>,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = match kind {
        Some(kind) => format!("brainc {}:list", kind),
        None => "brainc list".to_string(),
    };
    let mut out = CommandHeader::new(Icon::List, title).render(supports_color, supports_unicode);

    if units.is_empty() {
        out.push_str(&format!(
            "{}\n",
            ColoredText::dim("No units found").render(supports_color)
        ));
        return out;
    }

    let mut current: Option<UnitKind> = None;
    for unit in units {
        if kind.is_none() && current != Some(unit.kind) {
            out.push('\n');
            out.push_str(&ColoredText::info(unit.kind.as_str()).bold().render(supports_color));
            out.push('\n');
            current = Some(unit.kind);
        }

        out.push_str(&format!(
            "  {} {}\n",
            unit.label(),
            ColoredText::dim(unit.description.as_str()).render(supports_color)
        ));

        if verbose > 0 {
            if !unit.includes.is_empty() {
                out.push_str(&format!(
                    "    {} includes {}\n",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    unit.includes.join(", ")
                ));
            }
            out.push_str(&format!(
                "    {} {} rules, {} guidelines\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                unit.rules,
                unit.guidelines
            ));
        }
    }

    out
}
