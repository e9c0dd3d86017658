//! Statistics lookup seam.

use std::sync::Arc;

use async_trait::async_trait;

use runtag_core::{RunId, RunStats};

use crate::error::ClientError;

/// Fetches statistics for a run, keyed by its identifier.
///
/// Implementations are read-only; callers may invoke them repeatedly for the
/// same run and no caching is expected.
#[async_trait]
pub trait StatsLookup: Send + Sync + 'static {
    /// Fetch statistics for `run_id`.
    async fn run_stats(&self, run_id: &RunId) -> Result<RunStats, ClientError>;
}

#[async_trait]
impl<T: StatsLookup + ?Sized> StatsLookup for Arc<T> {
    async fn run_stats(&self, run_id: &RunId) -> Result<RunStats, ClientError> {
        (**self).run_stats(run_id).await
    }
}
