use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    details: Vec<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Vec::new(),
            fix: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(self.message.as_str())
                .bold()
                .render(supports_color)
        );
        for detail in &self.details {
            out.push_str(&format!("  {}\n", detail));
        }
        if let Some(fix) = &self.fix {
            out.push_str(&format!(
                "  {} {}\n",
                ColoredText::dim("FIX:").render(supports_color),
                fix
            ));
        }
        out
    }
}
