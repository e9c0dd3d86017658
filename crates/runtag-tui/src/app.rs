//! Application state and main event loop.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::event::{BackendCommand, ConnectionState, UiEvent};
use crate::hover::{HoverEvent, HoverTrigger};
use crate::state::UiState;
use crate::ui::{self, layout};

/// Main application with UI state and channel handles.
pub struct App {
    /// Current UI state snapshot for rendering.
    state: UiState,

    /// Hover overlay lifecycle.
    hover: HoverTrigger,

    /// Size of the last drawn frame, for mouse hit-testing.
    screen: Rect,

    /// Receiver for events from the backend.
    ui_rx: mpsc::Receiver<UiEvent>,

    /// Receiver for hover session events.
    hover_rx: mpsc::Receiver<HoverEvent>,

    /// Sender for commands to the backend.
    cmd_tx: mpsc::Sender<BackendCommand>,
}

impl App {
    /// Create a new application instance with channel handles.
    pub fn new(
        hover: HoverTrigger,
        ui_rx: mpsc::Receiver<UiEvent>,
        hover_rx: mpsc::Receiver<HoverEvent>,
        cmd_tx: mpsc::Sender<BackendCommand>,
    ) -> Self {
        Self {
            state: UiState::default(),
            hover,
            screen: Rect::default(),
            ui_rx,
            hover_rx,
            cmd_tx,
        }
    }

    /// Run the main event loop.
    ///
    /// This runs on the main thread and handles:
    /// - Drawing the UI
    /// - Processing keyboard and mouse input
    /// - Receiving updates from the backend and hover sessions
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        loop {
            self.state.tick = self.state.tick.wrapping_add(1);

            let mut screen = self.screen;
            terminal.draw(|frame| {
                screen = frame.area();
                ui::render(frame, &self.state, self.hover.overlay(), self.hover.anchor());
            })?;
            self.screen = screen;

            // Poll terminal events (non-blocking with short timeout)
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code);
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            while let Ok(event) = self.ui_rx.try_recv() {
                self.apply_event(event);
            }
            while let Ok(event) = self.hover_rx.try_recv() {
                self.hover.apply(event);
            }

            if self.state.should_quit() {
                break;
            }
        }

        self.hover.exit();
        let _ = self.cmd_tx.blocking_send(BackendCommand::Quit);

        Ok(())
    }

    /// Apply an event from the backend to the UI state.
    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::RunsUpdated(runs) => {
                self.state.runs = runs;
                self.state.clamp_selection();
                self.state.last_error = None;
                self.reanchor_hover();
                self.update_status();
            }
            UiEvent::Error(msg) => {
                self.state.last_error = Some(msg);
                self.update_status();
            }
            UiEvent::ConnectionStateChanged(new_state) => {
                self.state.connection_state = new_state;
                if matches!(self.state.connection_state, ConnectionState::Connected) {
                    self.state.last_error = None;
                }
                self.update_status();
            }
        }
    }

    /// Keep the hover attached to its run's tag after the list changed.
    ///
    /// The run may have moved to another row or left the list (or the
    /// visible rows) entirely; in the latter case the hover ends.
    fn reanchor_hover(&mut self) {
        let Some(run_id) = self.hover.hovered() else {
            return;
        };
        let target = self.state.position(run_id).and_then(|index| {
            let run = self.state.run_at(index)?;
            layout::tag_rect(self.screen, index, run).map(|anchor| (index, anchor))
        });

        match target {
            Some((index, anchor)) => {
                let run_id = run_id.clone();
                self.state.selected = Some(index);
                self.hover.enter(run_id, anchor);
            }
            None => self.hover.exit(),
        }
    }

    /// Update the status message based on current state.
    fn update_status(&mut self) {
        self.state.status_message = Some(match &self.state.connection_state {
            ConnectionState::Connecting => "Connecting...".to_string(),
            ConnectionState::Connected => match &self.state.last_error {
                Some(error) => format!("Error: {}", error),
                None => format!("{} runs", self.state.runs.len()),
            },
            ConnectionState::Disconnected { retry_in } => match &self.state.last_error {
                Some(error) => format!("{} (retry in {}s)", error, retry_in.as_secs()),
                None => format!("Disconnected (retry in {}s)", retry_in.as_secs()),
            },
        });
    }

    /// Handle a key press.
    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.state.request_quit(),
            KeyCode::Esc => self.hover.exit(),
            KeyCode::Char('r') => {
                let _ = self.cmd_tx.try_send(BackendCommand::RefreshRuns);
            }
            KeyCode::Down | KeyCode::Char('j') => self.select(1),
            KeyCode::Up | KeyCode::Char('k') => self.select(-1),
            _ => {}
        }
    }

    /// Move the keyboard selection; the selected tag counts as hovered.
    fn select(&mut self, delta: isize) {
        self.state.move_selection(delta);
        let Some(index) = self.state.selected else {
            return;
        };
        let Some(run) = self.state.run_at(index) else {
            return;
        };
        match layout::tag_rect(self.screen, index, run) {
            Some(anchor) => self.hover.enter(run.run_id.clone(), anchor),
            None => self.hover.exit(),
        }
    }

    /// Track the pointer over status tags.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Moved) {
            return;
        }

        match layout::tag_at(self.screen, &self.state.runs, mouse.column, mouse.row) {
            Some((index, anchor)) => {
                self.state.selected = Some(index);
                let run_id = self.state.runs[index].run_id.clone();
                self.hover.enter(run_id, anchor);
            }
            None => {
                if self.hover.hovered().is_some() {
                    self.hover.exit();
                }
            }
        }
    }
}
