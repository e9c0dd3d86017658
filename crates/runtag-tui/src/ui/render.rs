//! Main render function for the dashboard.

use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use runtag_core::{RunId, RunStatus};
use runtag_ui::{
    truncate, Footer, Header, HeaderStat, PopoverContent, StatsPopover, StatusIndicator,
    StatusTag, Theme,
};

use super::layout::{self, PIPELINE_WIDTH, RUN_ID_WIDTH};
use crate::event::ConnectionState;
use crate::hover::OverlayState;
use crate::state::UiState;

const HELP: &str = " q: quit | j/k: select | r: refresh | esc: close stats | hover a status for stats";

/// Render the entire UI.
///
/// `anchor` is the area of the hovered tag; the overlay is only drawn when
/// one is given.
pub fn render(frame: &mut Frame, state: &UiState, overlay: &OverlayState, anchor: Option<Rect>) {
    let screen = frame.area();
    let areas = layout::areas(screen);
    let theme = Theme::default();

    render_header(frame, areas.header, state);
    render_runs(frame, screen, state, overlay, &theme);
    Footer::new(HELP)
        .status(state.status_message.as_deref())
        .render(frame, areas.footer);

    if let Some(anchor) = anchor {
        render_overlay(frame, overlay, anchor, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &UiState) {
    let status = match &state.connection_state {
        ConnectionState::Connecting => StatusIndicator::warning("connecting"),
        ConnectionState::Connected => StatusIndicator::success("connected"),
        ConnectionState::Disconnected { .. } => StatusIndicator::error("disconnected"),
    };

    let in_progress = state
        .runs
        .iter()
        .filter(|r| r.status.is_in_progress())
        .count();
    let finished = state.runs.iter().filter(|r| r.status.is_terminal()).count();

    Header::new("RunTag")
        .status(status)
        .stat(HeaderStat::new("Runs", state.runs.len().to_string()))
        .stat(HeaderStat::new("In progress", in_progress.to_string()).color(Color::Blue))
        .stat(HeaderStat::new("Finished", finished.to_string()).color(Color::Green))
        .stat(
            HeaderStat::new("Failed", state.count(RunStatus::Failed).to_string()).color(Color::Red),
        )
        .render(frame, area);
}

fn render_runs(
    frame: &mut Frame,
    screen: Rect,
    state: &UiState,
    overlay: &OverlayState,
    theme: &Theme,
) {
    let area = layout::areas(screen).runs;
    let block = Block::default()
        .title(" Runs ")
        .borders(Borders::ALL)
        .border_style(theme.unfocused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let headings = Line::from(vec![
        Span::styled(
            format!("{:<w$}", "RUN ID", w = RUN_ID_WIDTH as usize),
            theme.bold(),
        ),
        Span::styled(
            format!("{:<w$}", "PIPELINE", w = PIPELINE_WIDTH as usize),
            theme.bold(),
        ),
        Span::styled("STATUS", theme.bold()),
    ]);
    frame.render_widget(
        Paragraph::new(headings),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    if state.runs.is_empty() {
        let rows = layout::rows_area(area);
        if rows.height > 0 {
            frame.render_widget(
                Paragraph::new(Span::styled("No runs", theme.muted_style())),
                Rect::new(rows.x, rows.y, rows.width, 1),
            );
        }
        return;
    }

    let hovered = overlay_run(overlay);
    for (index, run) in state.runs.iter().enumerate() {
        let Some(tag_area) = layout::tag_rect(screen, index, run) else {
            break;
        };
        let row = Rect::new(inner.x, tag_area.y, inner.width, 1);

        let selected = state.selected == Some(index);
        let marker_style = if selected {
            theme.focused_border()
        } else {
            theme.muted_style()
        };
        let cells = Line::from(vec![
            Span::styled(
                format!(
                    "{:<w$}",
                    truncate(run.run_id.as_str(), RUN_ID_WIDTH as usize - 1),
                    w = RUN_ID_WIDTH as usize
                ),
                marker_style,
            ),
            Span::raw(format!(
                "{:<w$}",
                truncate(&run.pipeline_name, PIPELINE_WIDTH as usize - 1),
                w = PIPELINE_WIDTH as usize
            )),
        ]);
        frame.render_widget(Paragraph::new(cells), row);

        StatusTag::new(run.status.descriptor())
            .tick(state.tick)
            .highlighted(selected || hovered == Some(&run.run_id))
            .theme(theme.clone())
            .render(frame, tag_area);
    }
}

fn overlay_run(overlay: &OverlayState) -> Option<&RunId> {
    match overlay {
        OverlayState::Hidden => None,
        OverlayState::Loading { run_id }
        | OverlayState::Ready { run_id, .. }
        | OverlayState::Failed { run_id, .. } => Some(run_id),
    }
}

fn render_overlay(frame: &mut Frame, overlay: &OverlayState, anchor: Rect, theme: Theme) {
    let (run_id, content) = match overlay {
        OverlayState::Hidden => return,
        OverlayState::Loading { run_id } => (run_id, PopoverContent::Loading),
        OverlayState::Ready { run_id, stats } => (run_id, PopoverContent::Stats(stats)),
        OverlayState::Failed { run_id, message } => (run_id, PopoverContent::Error(message)),
    };

    StatsPopover::new(run_id.as_str(), content, anchor)
        .theme(theme)
        .render(frame);
}
