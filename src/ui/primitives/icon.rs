use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Arrow,
    Compile,
    Make,
    List,
    Docs,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Compile) => theme::icons::COMPILE,
            (true, Icon::Make) => theme::icons::MAKE,
            (true, Icon::List) => theme::icons::LIST,
            (true, Icon::Docs) => theme::icons::DOCS,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Compile) => theme::icons_ascii::COMPILE,
            (false, Icon::Make) => theme::icons_ascii::MAKE,
            (false, Icon::List) => theme::icons_ascii::LIST,
            (false, Icon::Docs) => theme::icons_ascii::DOCS,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Compile | Icon::Make | Icon::List | Icon::Docs => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
