//! Header widget with title, connection status and run counts.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;

/// Status indicator for the header.
#[derive(Debug, Clone)]
pub struct StatusIndicator {
    pub label: String,
    pub color: Color,
}

impl StatusIndicator {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    pub fn success(label: impl Into<String>) -> Self {
        Self::new(label, Color::Green)
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self::new(label, Color::Yellow)
    }

    pub fn error(label: impl Into<String>) -> Self {
        Self::new(label, Color::Red)
    }
}

/// A stat to display in the header.
#[derive(Debug, Clone)]
pub struct HeaderStat {
    pub label: String,
    pub value: String,
    pub color: Color,
}

impl HeaderStat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            color: Color::Cyan,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Header widget with title, status and stats.
#[derive(Debug, Clone)]
pub struct Header<'a> {
    /// Application title.
    title: &'a str,
    /// Status indicator.
    status: Option<StatusIndicator>,
    /// Stats shown after the title.
    stats: Vec<HeaderStat>,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> Header<'a> {
    /// Create a new header with a title.
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            status: None,
            stats: Vec::new(),
            theme: Theme::default(),
        }
    }

    /// Set the status indicator.
    pub fn status(mut self, status: StatusIndicator) -> Self {
        self.status = Some(status);
        self
    }

    /// Add a stat to display.
    pub fn stat(mut self, stat: HeaderStat) -> Self {
        self.stats.push(stat);
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the header.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let mut title_spans = vec![Span::styled(format!(" {} ", self.title), self.theme.bold())];
        if let Some(status) = &self.status {
            title_spans.push(Span::styled(
                format!("[{}]", status.label),
                Style::default().fg(status.color),
            ));
            title_spans.push(Span::raw(" "));
        }

        let mut stat_spans = vec![Span::raw(" ")];
        for (i, stat) in self.stats.iter().enumerate() {
            if i > 0 {
                stat_spans.push(Span::raw(" | "));
            }
            stat_spans.push(Span::raw(format!("{}: ", stat.label)));
            stat_spans.push(Span::styled(
                stat.value.clone(),
                Style::default().fg(stat.color),
            ));
        }

        let header = Paragraph::new(Line::from(stat_spans)).block(
            Block::default()
                .title(Line::from(title_spans))
                .borders(Borders::ALL)
                .border_style(self.theme.unfocused_border()),
        );
        frame.render_widget(header, area);
    }
}
