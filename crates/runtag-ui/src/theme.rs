//! Theme and style definitions.

use ratatui::style::{Color, Modifier, Style};
use runtag_core::Intent;

/// Braille spinner frames shown next to busy status tags.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for an animation tick.
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Theme configuration for RunTag TUI applications.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color (focused borders, selection)
    pub accent: Color,
    /// Neutral intent (queued, not started, starting, managed)
    pub neutral: Color,
    /// Success intent (succeeded)
    pub success: Color,
    /// Danger intent (failed)
    pub danger: Color,
    /// Primary intent (started)
    pub primary: Color,
    /// Muted color (secondary info)
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            neutral: Color::Gray,
            success: Color::Green,
            danger: Color::Red,
            primary: Color::Blue,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Color for a presentation intent.
    pub fn intent_color(&self, intent: Intent) -> Color {
        match intent {
            Intent::Neutral => self.neutral,
            Intent::Success => self.success,
            Intent::Danger => self.danger,
            Intent::Primary => self.primary,
        }
    }

    /// Badge style for a presentation intent.
    pub fn intent_style(&self, intent: Intent) -> Style {
        Style::default()
            .fg(self.intent_color(intent))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for focused/active borders.
    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for unfocused borders.
    pub fn unfocused_border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.danger)
    }

    /// Style for muted/secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for bold text.
    pub fn bold(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }
}
