//! Background task for polling the run tracker.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use runtag_client::HttpClient;

use crate::event::{BackendCommand, ConnectionState, UiEvent};

/// Run the background polling loop.
///
/// Periodically fetches the runs list and sends updates to the UI thread via
/// `ui_tx`. Poll failures are reported, never fatal.
pub async fn run_backend(
    client: HttpClient,
    refresh_interval: Duration,
    ui_tx: mpsc::Sender<UiEvent>,
    mut cmd_rx: mpsc::Receiver<BackendCommand>,
) {
    info!(endpoint = %client.base_url(), "Polling run tracker");

    let mut interval = tokio::time::interval(refresh_interval);
    let mut connection = ConnectionState::Connecting;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                debug!("Refresh tick");
                poll_runs(&client, refresh_interval, &mut connection, &ui_tx).await;
            }

            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(BackendCommand::RefreshRuns) => {
                        debug!("Manual refresh: runs");
                        poll_runs(&client, refresh_interval, &mut connection, &ui_tx).await;
                    }
                    Some(BackendCommand::Quit) | None => {
                        info!("Received quit command, shutting down backend");
                        break;
                    }
                }
            }
        }
    }

    info!("Backend shutdown complete");
}

/// Fetch runs once and report the outcome.
async fn poll_runs(
    client: &HttpClient,
    retry_in: Duration,
    connection: &mut ConnectionState,
    ui_tx: &mpsc::Sender<UiEvent>,
) {
    let (next, event) = match client.list_runs().await {
        Ok(runs) => {
            debug!(count = runs.len(), "Fetched runs");
            (ConnectionState::Connected, UiEvent::RunsUpdated(runs))
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch runs");
            (
                ConnectionState::Disconnected { retry_in },
                UiEvent::Error(format!("Runs: {}", e)),
            )
        }
    };

    if *connection != next {
        *connection = next.clone();
        let _ = ui_tx.send(UiEvent::ConnectionStateChanged(next)).await;
    }
    let _ = ui_tx.send(event).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_tracker_reports_disconnect() {
        let client = HttpClient::new("http://127.0.0.1:1");
        let (ui_tx, mut ui_rx) = mpsc::channel(16);
        let (cmd_tx, cmd_rx) = mpsc::channel(4);

        let handle = tokio::spawn(run_backend(
            client,
            Duration::from_secs(60),
            ui_tx,
            cmd_rx,
        ));

        match ui_rx.recv().await.unwrap() {
            UiEvent::ConnectionStateChanged(ConnectionState::Disconnected { retry_in }) => {
                assert_eq!(retry_in, Duration::from_secs(60));
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(ui_rx.recv().await.unwrap(), UiEvent::Error(msg) if msg.starts_with("Runs:")));

        cmd_tx.send(BackendCommand::Quit).await.unwrap();
        handle.await.unwrap();
    }
}
