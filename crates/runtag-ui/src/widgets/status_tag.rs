//! Status tag widget: a run status painted as a colored label.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use runtag_core::PresentationDescriptor;

use crate::theme::{spinner_frame, Theme};

/// Colored label for a run status, with a spinner when the run is busy.
#[derive(Debug, Clone)]
pub struct StatusTag {
    /// What to paint.
    descriptor: PresentationDescriptor,
    /// Animation tick for the spinner.
    tick: usize,
    /// Whether the tag is under the pointer/selection.
    highlighted: bool,
    /// Theme for styling.
    theme: Theme,
}

impl StatusTag {
    /// Create a tag for a descriptor.
    pub fn new(descriptor: PresentationDescriptor) -> Self {
        Self {
            descriptor,
            tick: 0,
            highlighted: false,
            theme: Theme::default(),
        }
    }

    /// Set the spinner animation tick.
    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    /// Mark the tag as hovered.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Build the tag as a single line of spans.
    pub fn line(&self) -> Line<'static> {
        let mut style = self.theme.intent_style(self.descriptor.intent);
        if self.highlighted {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let mut spans = Vec::with_capacity(2);
        if self.descriptor.busy {
            spans.push(Span::styled(format!("{} ", spinner_frame(self.tick)), style));
        }
        spans.push(Span::styled(self.descriptor.label, style));
        Line::from(spans)
    }

    /// Display width of the tag in cells.
    pub fn width(&self) -> u16 {
        let spinner = if self.descriptor.busy {
            spinner_frame(self.tick).width() + 1
        } else {
            0
        };
        (spinner + self.descriptor.label.width()) as u16
    }

    /// Render the tag.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()), area);
    }
}
