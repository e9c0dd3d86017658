//! Footer widget showing key hints and the latest status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Theme;

/// Footer with help text and an optional status message.
#[derive(Debug, Clone)]
pub struct Footer<'a> {
    /// Key hints.
    help: &'a str,
    /// Status message (connection errors, etc).
    status: Option<&'a str>,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> Footer<'a> {
    /// Create a new footer with help text.
    pub fn new(help: &'a str) -> Self {
        Self {
            help,
            status: None,
            theme: Theme::default(),
        }
    }

    /// Set the status message.
    pub fn status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the footer.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(self.help, self.theme.muted_style())];
        if let Some(status) = self.status {
            spans.push(Span::raw("  "));
            spans.push(Span::raw(status));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
