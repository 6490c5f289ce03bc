use crossterm::style::{Color, Stylize};

use crate::ui::theme::{colors, glyphs, Glyph};

/// Status and header icons used across commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Deploy,
    Remote,
    Trash,
}

impl Icon {
    fn glyph(self) -> Glyph {
        match self {
            Icon::Success => glyphs::OK,
            Icon::Error => glyphs::FAIL,
            Icon::Warning => glyphs::WARN,
            Icon::Progress => glyphs::STEP,
            Icon::Arrow => glyphs::DETAIL,
            Icon::Deploy => glyphs::PACKAGE,
            Icon::Remote => glyphs::SATELLITE,
            Icon::Trash => glyphs::TRASH,
        }
    }

    fn color(self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Progress | Icon::Trash => colors::WARNING,
            Icon::Arrow => colors::DIM,
            Icon::Deploy | Icon::Remote => colors::INFO,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        self.glyph().pick(supports_unicode)
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let text = self.render(supports_unicode);
        if supports_color {
            text.with(self.color()).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fallback_without_unicode() {
        assert_eq!(Icon::Success.render(false), "[OK]");
        assert_eq!(Icon::Trash.render(false), "[DEL]");
    }

    #[test]
    fn unicode_when_supported() {
        assert_eq!(Icon::Warning.render(true), "⚠");
    }

    #[test]
    fn no_escape_codes_without_color() {
        assert_eq!(Icon::Remote.colored(false, false), "[REMOTE]");
    }
}
