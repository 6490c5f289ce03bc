//! Colours and glyphs for terminal output.
//!
//! Every icon has a Unicode form and an ASCII fallback for terminals
//! without UTF-8 support.

use crossterm::style::Color;

/// Semantic colour roles
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// A glyph with its ASCII fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub unicode: &'static str,
    pub ascii: &'static str,
}

impl Glyph {
    pub const fn pick(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

pub mod glyphs {
    use super::Glyph;

    const fn g(unicode: &'static str, ascii: &'static str) -> Glyph {
        Glyph { unicode, ascii }
    }

    pub const OK: Glyph = g("✓", "[OK]");
    pub const FAIL: Glyph = g("✗", "[FAIL]");
    pub const WARN: Glyph = g("⚠", "[WARN]");
    pub const STEP: Glyph = g("●", "[..]");
    pub const DETAIL: Glyph = g("↳", "[>]");

    // Header glyphs
    pub const PACKAGE: Glyph = g("📦", "[DEPLOY]");
    pub const SATELLITE: Glyph = g("📡", "[REMOTE]");
    pub const TRASH: Glyph = g("🗑", "[DEL]");
}

/// Marker printed in front of the active version
pub const CURRENT_MARKER: &str = "*";
