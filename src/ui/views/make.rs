use brainc::application::Scaffolded;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_scaffolded(
    created: &Scaffolded,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} Created {}:{} {}\n  {} {}\n",
        Icon::Make.colored(supports_color, supports_unicode),
        created.kind,
        created.id,
        ColoredText::dim(created.path.display().to_string()).render(supports_color),
        Icon::Arrow.colored(supports_color, supports_unicode),
        "Edit the file, then run `brainc compile`"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use brainc::domain::entities::UnitKind;
    use std::path::PathBuf;

    #[test]
    fn renders_created_unit() {
        let rendered = render_scaffolded(
            &Scaffolded {
                kind: UnitKind::Agent,
                id: "reviewer".to_string(),
                path: PathBuf::from(".brain/agents/reviewer.yaml"),
            },
            false,
            false,
        );
        assert_eq!(
            rendered,
            "[MAKE] Created agent:reviewer .brain/agents/reviewer.yaml\n  [>] Edit the file, then run `brainc compile`\n"
        );
    }
}
