//! Installed versions listing

use rollout::domain::entities::InstalledVersion;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::CURRENT_MARKER;

/// Render the installed versions, oldest first, marking the current one
pub fn render_versions(versions: &[InstalledVersion], supports_color: bool) -> String {
    let mut out = String::from("Installed versions:\n");
    if versions.is_empty() {
        out.push_str(&format!(
            "   {}\n",
            ColoredText::dim("(none)").render(supports_color)
        ));
        return out;
    }

    for v in versions {
        if v.is_current {
            out.push_str(&format!(
                "   {} {}\n",
                ColoredText::plain(CURRENT_MARKER)
                    .bold()
                    .render(supports_color),
                ColoredText::plain(v.version.as_str())
                    .bold()
                    .underline()
                    .render(supports_color)
            ));
        } else {
            out.push_str(&format!("     {}\n", v.version));
        }
    }
    out
}
