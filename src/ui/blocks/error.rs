use std::path::PathBuf;

use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::panel::{Panel, PanelStyle};

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    subject: Option<PathBuf>,
    message: String,
    details: Vec<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            subject: None,
            message: message.into(),
            details: Vec::new(),
            fix: None,
        }
    }

    pub fn with_subject(mut self, path: impl Into<PathBuf>) -> Self {
        self.subject = Some(path.into());
        self
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
        let title = format!(
            "{} ERROR",
            Icon::Error.colored(supports_color, supports_unicode)
        );
        let mut panel = Panel::with_title(title).style(PanelStyle::Error);

        if let Some(subject) = &self.subject {
            panel.add_line(subject.display().to_string());
        }
        panel.add_empty();
        panel.add_line(self.message.clone());

        if !self.details.is_empty() {
            panel.add_empty();
            for detail in &self.details {
                panel.add_line(format!("  {}", detail));
            }
        }

        if let Some(fix) = &self.fix {
            panel.add_empty();
            panel.add_line(format!("FIX: {}", fix));
        }

        panel.render(supports_color, supports_unicode)
    }
}
