//! Hover-driven statistics overlay.
//!
//! Each hover over a status tag is a session: after `delay` the overlay opens
//! in a loading state and the stats lookup is issued once. Leaving the tag
//! cancels the session. Events from a session that is no longer live are
//! dropped, so a slow lookup can never pop an overlay after the pointer has
//! moved on.

use std::sync::Arc;
use std::time::Duration;

use ratatui::layout::Rect;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use runtag_client::{ClientError, StatsLookup};
use runtag_core::{RunId, RunStats};

/// What the overlay currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OverlayState {
    /// No overlay.
    #[default]
    Hidden,
    /// Delay elapsed, lookup in flight.
    Loading { run_id: RunId },
    /// Lookup resolved.
    Ready { run_id: RunId, stats: RunStats },
    /// Lookup failed; scoped to this overlay only.
    Failed { run_id: RunId, message: String },
}

/// Progress reported by a hover session task.
#[derive(Debug)]
pub enum HoverEvent {
    /// Hover delay elapsed; the lookup is about to be issued.
    Opened { session: u64 },
    /// Lookup finished.
    Resolved {
        session: u64,
        result: Result<RunStats, ClientError>,
    },
}

impl HoverEvent {
    fn session(&self) -> u64 {
        match self {
            Self::Opened { session } | Self::Resolved { session, .. } => *session,
        }
    }
}

/// A live hover.
struct Session {
    id: u64,
    run_id: RunId,
    anchor: Rect,
    cancel: CancellationToken,
}

/// Starts, cancels and commits hover sessions.
///
/// Owned by the UI thread. Session tasks run on `runtime` and report back
/// through `events_tx`; the owner feeds those events to [`HoverTrigger::apply`].
pub struct HoverTrigger {
    lookup: Arc<dyn StatsLookup>,
    delay: Duration,
    runtime: Handle,
    events_tx: mpsc::Sender<HoverEvent>,
    next_session: u64,
    session: Option<Session>,
    overlay: OverlayState,
}

impl HoverTrigger {
    /// Create a trigger that waits `delay` before looking stats up.
    pub fn new(
        lookup: Arc<dyn StatsLookup>,
        delay: Duration,
        runtime: Handle,
        events_tx: mpsc::Sender<HoverEvent>,
    ) -> Self {
        Self {
            lookup,
            delay,
            runtime,
            events_tx,
            next_session: 0,
            session: None,
            overlay: OverlayState::Hidden,
        }
    }

    /// Pointer entered the tag of `run_id`, drawn at `anchor`.
    ///
    /// Re-entering the run that is already hovered only moves the anchor.
    pub fn enter(&mut self, run_id: RunId, anchor: Rect) {
        if let Some(session) = self.session.as_mut() {
            if session.run_id == run_id {
                session.anchor = anchor;
                return;
            }
        }

        self.exit();

        self.next_session += 1;
        let id = self.next_session;
        let cancel = CancellationToken::new();

        debug!(session = id, run_id = %run_id, "Hover started");
        self.runtime.spawn(run_session(
            id,
            run_id.clone(),
            self.delay,
            Arc::clone(&self.lookup),
            cancel.clone(),
            self.events_tx.clone(),
        ));

        self.session = Some(Session {
            id,
            run_id,
            anchor,
            cancel,
        });
    }

    /// Pointer left the tag. Cancels the live session and hides the overlay.
    pub fn exit(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(session = session.id, run_id = %session.run_id, "Hover ended");
            session.cancel.cancel();
        }
        self.overlay = OverlayState::Hidden;
    }

    /// Commit an event from a session task, unless the session is stale.
    pub fn apply(&mut self, event: HoverEvent) {
        let Some(session) = &self.session else {
            debug!(session = event.session(), "Dropping hover event, no live hover");
            return;
        };
        if event.session() != session.id {
            debug!(
                session = event.session(),
                live = session.id,
                "Dropping stale hover event"
            );
            return;
        }

        let run_id = session.run_id.clone();
        self.overlay = match event {
            HoverEvent::Opened { .. } => OverlayState::Loading { run_id },
            HoverEvent::Resolved { result: Ok(stats), .. } => OverlayState::Ready { run_id, stats },
            HoverEvent::Resolved { result: Err(e), .. } => OverlayState::Failed {
                run_id,
                message: e.to_string(),
            },
        };
    }

    /// Current overlay.
    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    /// Run currently hovered, if any.
    pub fn hovered(&self) -> Option<&RunId> {
        self.session.as_ref().map(|s| &s.run_id)
    }

    /// Area of the hovered tag.
    pub fn anchor(&self) -> Option<Rect> {
        self.session.as_ref().map(|s| s.anchor)
    }
}

impl Drop for HoverTrigger {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            session.cancel.cancel();
        }
    }
}

/// Body of one hover session.
async fn run_session(
    session: u64,
    run_id: RunId,
    delay: Duration,
    lookup: Arc<dyn StatsLookup>,
    cancel: CancellationToken,
    events_tx: mpsc::Sender<HoverEvent>,
) {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(session, "Hover cancelled before delay elapsed");
            return;
        }
        _ = tokio::time::sleep(delay) => {}
    }

    if events_tx.send(HoverEvent::Opened { session }).await.is_err() {
        return;
    }

    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(session, run_id = %run_id, "Hover cancelled during stats lookup");
            return;
        }
        result = lookup.run_stats(&run_id) => result,
    };

    if let Err(e) = &result {
        warn!(session, run_id = %run_id, error = %e, "Stats lookup failed");
    }
    if cancel.is_cancelled() {
        return;
    }
    let _ = events_tx.send(HoverEvent::Resolved { session, result }).await;
}
