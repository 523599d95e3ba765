use std::path::Path;

use brainc::application::DocMatch;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_docs(
    docs_dir: &Path,
    keywords: &[String],
    matches: &[DocMatch],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Docs, "brainc docs");
    header.add("Directory", docs_dir.display().to_string());
    if !keywords.is_empty() {
        header.add("Keywords", keywords.join(" "));
    }
    let mut out = header.render(supports_color, supports_unicode);

    if matches.is_empty() {
        out.push_str(&format!(
            "{}\n",
            ColoredText::dim("No matching documents").render(supports_color)
        ));
        return out;
    }

    for doc in matches {
        let path = doc.path.display().to_string();
        let title = doc.title.as_deref().unwrap_or(path.as_str());
        out.push_str(&format!(
            "  {} {}",
            ColoredText::plain(title).bold().render(supports_color),
            ColoredText::dim(path.as_str()).render(supports_color)
        ));
        if doc.score > 0 {
            out.push_str(&format!(
                " {}",
                ColoredText::dim(format!("({} hits)", doc.score)).render(supports_color)
            ));
        }
        out.push('\n');
    }

    out
}
