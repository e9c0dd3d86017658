//! Transient overlay showing run statistics next to a status tag.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use runtag_core::RunStats;

use crate::theme::Theme;
use crate::utils::{format_duration, format_timestamp, truncate};

const POPOVER_WIDTH: u16 = 36;

/// What the popover currently shows.
#[derive(Debug, Clone, Copy)]
pub enum PopoverContent<'a> {
    /// Lookup in flight.
    Loading,
    /// Lookup resolved.
    Stats(&'a RunStats),
    /// Lookup failed; the message is shown inside the popover only.
    Error(&'a str),
}

/// Place a `width` x `height` box next to `anchor`, inside `bounds`.
///
/// Prefers the row below the anchor, then the row above, and otherwise
/// clamps to the bottom of `bounds`.
pub fn popover_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    let y = if anchor.bottom().saturating_add(height) <= bounds.bottom() {
        anchor.bottom()
    } else if anchor.y >= bounds.y.saturating_add(height) {
        anchor.y - height
    } else {
        bounds.bottom().saturating_sub(height)
    };

    let max_x = bounds.right().saturating_sub(width);
    let x = anchor.x.clamp(bounds.x, max_x.max(bounds.x));

    Rect::new(x, y, width, height)
}

/// Overlay with the statistics of one run.
#[derive(Debug, Clone)]
pub struct StatsPopover<'a> {
    /// Run the overlay belongs to.
    run_id: &'a str,
    /// Current content.
    content: PopoverContent<'a>,
    /// Area of the tag the overlay is attached to.
    anchor: Rect,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> StatsPopover<'a> {
    /// Create a popover for a run, anchored at `anchor`.
    pub fn new(run_id: &'a str, content: PopoverContent<'a>, anchor: Rect) -> Self {
        Self {
            run_id,
            content,
            anchor,
            theme: Theme::default(),
        }
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Body lines for the current content.
    pub fn lines(&self) -> Vec<Line<'static>> {
        match self.content {
            PopoverContent::Loading => {
                vec![Line::from(Span::styled("Loading...", self.theme.muted_style()))]
            }
            PopoverContent::Error(message) => vec![
                Line::from(Span::styled("Failed to load stats", self.theme.error_style())),
                Line::from(truncate(message, POPOVER_WIDTH as usize - 2)),
            ],
            PopoverContent::Stats(stats) => {
                let mut lines = vec![
                    stat_line("Steps succeeded", stats.steps_succeeded.to_string()),
                    stat_line("Steps failed", stats.steps_failed.to_string()),
                    stat_line("Materializations", stats.materializations.to_string()),
                    stat_line("Expectations", stats.expectations.to_string()),
                ];
                if let Some(start) = &stats.start_time {
                    lines.push(stat_line("Started", format_timestamp(start)));
                }
                if let Some(end) = &stats.end_time {
                    lines.push(stat_line("Ended", format_timestamp(end)));
                }
                if let Some(duration) = stats.duration() {
                    lines.push(stat_line("Duration", format_duration(duration.num_seconds())));
                }
                lines
            }
        }
    }

    /// Area the popover occupies inside `bounds`.
    pub fn area(&self, bounds: Rect) -> Rect {
        let height = self.lines().len() as u16 + 2;
        popover_rect(self.anchor, POPOVER_WIDTH, height, bounds)
    }

    /// Render the popover over whatever is below it.
    pub fn render(self, frame: &mut Frame) {
        let area = self.area(frame.area());
        let title = format!(" Run {} ", truncate(self.run_id, POPOVER_WIDTH as usize - 8));

        frame.render_widget(Clear, area);
        let paragraph = Paragraph::new(self.lines()).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(self.theme.focused_border()),
        );
        frame.render_widget(paragraph, area);
    }
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<17}", format!("{}:", label)), Style::default()),
        Span::raw(value),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use runtag_core::RunId;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_rect_prefers_below_anchor() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(10, 3, 9, 1);
        assert_eq!(popover_rect(anchor, 36, 6, bounds), Rect::new(10, 4, 36, 6));
    }

    #[test]
    fn test_rect_flips_above_near_bottom() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(10, 20, 9, 1);
        assert_eq!(popover_rect(anchor, 36, 6, bounds), Rect::new(10, 14, 36, 6));
    }

    #[test]
    fn test_rect_clamps_to_right_edge() {
        let bounds = Rect::new(0, 0, 40, 24);
        let anchor = Rect::new(30, 2, 9, 1);
        let rect = popover_rect(anchor, 36, 6, bounds);
        assert_eq!(rect.x, 4);
        assert!(rect.right() <= bounds.right());
    }

    #[test]
    fn test_rect_in_tiny_bounds() {
        let bounds = Rect::new(0, 0, 20, 4);
        let anchor = Rect::new(0, 1, 9, 1);
        let rect = popover_rect(anchor, 36, 6, bounds);
        assert_eq!(rect, Rect::new(0, 0, 20, 4));
    }

    #[test]
    fn test_loading_content() {
        let popover = StatsPopover::new("run-123", PopoverContent::Loading, Rect::new(0, 0, 5, 1));
        let lines = popover.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "Loading...");
    }

    #[test]
    fn test_stats_content_includes_duration() {
        let stats = RunStats {
            run_id: RunId::new("run-123"),
            steps_succeeded: 3,
            steps_failed: 1,
            start_time: Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()),
            end_time: Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 2, 5).unwrap()),
            ..Default::default()
        };
        let popover = StatsPopover::new("run-123", PopoverContent::Stats(&stats), Rect::default());
        let lines = popover.lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0].spans[1].content, "3");
        assert_eq!(lines[6].spans[1].content, "2m 5s");
    }

    #[test]
    fn test_render_error_state() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| {
                StatsPopover::new(
                    "run-999",
                    PopoverContent::Error("HTTP 500: /runs/run-999/stats"),
                    Rect::new(2, 1, 6, 1),
                )
                .render(frame);
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Run run-999"));
        assert!(text.contains("Failed to load stats"));
        assert!(text.contains("HTTP 500"));
    }
}
