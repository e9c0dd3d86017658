//! UI state for rendering.

use runtag_core::{RunId, RunStatus, RunSummary};

use crate::event::ConnectionState;

/// Snapshot of data for rendering (no async, no locks).
#[derive(Debug, Default)]
pub struct UiState {
    /// Runs from the run tracker.
    pub runs: Vec<RunSummary>,

    /// Row selected with the keyboard or last hovered with the mouse.
    pub selected: Option<usize>,

    /// Connection state of the poller.
    pub connection_state: ConnectionState,

    /// Status message to display in footer.
    pub status_message: Option<String>,

    /// Last error message (if any).
    pub last_error: Option<String>,

    /// Animation tick for busy spinners.
    pub tick: usize,

    /// Whether the user asked to quit.
    pub(crate) quit: bool,
}

impl UiState {
    /// Request application exit.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Whether the app should exit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run at `index`, if any.
    pub fn run_at(&self, index: usize) -> Option<&RunSummary> {
        self.runs.get(index)
    }

    /// Row of `run_id`, if it is still listed.
    pub fn position(&self, run_id: &RunId) -> Option<usize> {
        self.runs.iter().position(|r| &r.run_id == run_id)
    }

    /// Number of runs with the given status.
    pub fn count(&self, status: RunStatus) -> usize {
        self.runs.iter().filter(|r| r.status == status).count()
    }

    /// Move the selection by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.runs.is_empty() {
            self.selected = None;
            return;
        }
        let last = self.runs.len() - 1;
        let next = match self.selected {
            None => 0,
            Some(i) => i.saturating_add_signed(delta).min(last),
        };
        self.selected = Some(next);
    }

    /// Keep the selection inside the list after it changed.
    pub fn clamp_selection(&mut self) {
        if self.runs.is_empty() {
            self.selected = None;
        } else if let Some(i) = self.selected {
            self.selected = Some(i.min(self.runs.len() - 1));
        }
    }
}
