//! Screen layout shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Rect};

use runtag_core::RunSummary;
use runtag_ui::StatusTag;

/// Width of the run id column.
pub const RUN_ID_WIDTH: u16 = 14;
/// Width of the pipeline column.
pub const PIPELINE_WIDTH: u16 = 24;

/// Top-level areas of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub runs: Rect,
    pub footer: Rect,
}

/// Split the screen into header, runs table and footer.
pub fn areas(screen: Rect) -> Areas {
    let [header, runs, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(screen);
    Areas {
        header,
        runs,
        footer,
    }
}

/// Rows of the runs table: inside the border, below the column headings.
pub fn rows_area(runs: Rect) -> Rect {
    let inner = Rect::new(
        runs.x.saturating_add(1),
        runs.y.saturating_add(1),
        runs.width.saturating_sub(2),
        runs.height.saturating_sub(2),
    );
    Rect::new(
        inner.x,
        inner.y.saturating_add(1),
        inner.width,
        inner.height.saturating_sub(1),
    )
}

/// Area of the status tag of row `index`, if the row is visible.
pub fn tag_rect(screen: Rect, index: usize, run: &RunSummary) -> Option<Rect> {
    let rows = rows_area(areas(screen).runs);
    let offset = u16::try_from(index).ok()?;
    if offset >= rows.height {
        return None;
    }

    let x = rows.x + RUN_ID_WIDTH + PIPELINE_WIDTH;
    let available = rows.right().saturating_sub(x);
    if available == 0 {
        return None;
    }

    let width = StatusTag::new(run.status.descriptor()).width().min(available);
    Some(Rect::new(x, rows.y + offset, width, 1))
}

/// Row whose status tag covers `(column, row)`.
pub fn tag_at(screen: Rect, runs: &[RunSummary], column: u16, row: u16) -> Option<(usize, Rect)> {
    runs.iter().enumerate().find_map(|(index, run)| {
        let rect = tag_rect(screen, index, run)?;
        let hit = column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom();
        hit.then_some((index, rect))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtag_core::RunStatus;

    fn runs() -> Vec<RunSummary> {
        vec![
            RunSummary::new("run-123", "etl", RunStatus::Succeeded),
            RunSummary::new("run-456", "etl", RunStatus::Started),
        ]
    }

    #[test]
    fn test_tag_rect_positions() {
        let screen = Rect::new(0, 0, 80, 24);
        let runs = runs();
        // header (3) + border (1) + headings (1)
        assert_eq!(tag_rect(screen, 0, &runs[0]), Some(Rect::new(39, 5, 9, 1)));
        assert_eq!(tag_rect(screen, 1, &runs[1]), Some(Rect::new(39, 6, 9, 1)));
    }

    #[test]
    fn test_tag_at_hits_only_the_tag() {
        let screen = Rect::new(0, 0, 80, 24);
        let runs = runs();
        assert_eq!(tag_at(screen, &runs, 39, 5).map(|(i, _)| i), Some(0));
        assert_eq!(tag_at(screen, &runs, 47, 6).map(|(i, _)| i), Some(1));
        assert_eq!(tag_at(screen, &runs, 48, 5), None);
        assert_eq!(tag_at(screen, &runs, 10, 5), None);
        assert_eq!(tag_at(screen, &runs, 39, 7), None);
    }

    #[test]
    fn test_rows_past_bottom_are_hidden() {
        let screen = Rect::new(0, 0, 80, 8);
        let run = RunSummary::new("run-1", "etl", RunStatus::Queued);
        // 8 rows: header 3, footer 1, runs 4 -> one visible row
        assert!(tag_rect(screen, 0, &run).is_some());
        assert!(tag_rect(screen, 1, &run).is_none());
    }
}
