//! Event types for communication between background tasks and UI.

use std::time::Duration;

use runtag_core::RunSummary;

/// Connection state for the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConnectionState {
    /// Currently attempting to connect.
    #[default]
    Connecting,

    /// Last poll of the run tracker succeeded.
    Connected,

    /// Last poll failed, will retry after the specified duration.
    Disconnected { retry_in: Duration },
}

/// Events sent from the backend poller to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    /// Runs list was updated.
    RunsUpdated(Vec<RunSummary>),

    /// An error occurred.
    Error(String),

    /// Connection state changed.
    ConnectionStateChanged(ConnectionState),
}

/// Commands sent from UI to the backend poller.
#[derive(Debug)]
pub enum BackendCommand {
    /// Refresh runs list now.
    RefreshRuns,

    /// Quit the application.
    Quit,
}
