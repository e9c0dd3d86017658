//! Run listing and statistics types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{RunId, RunStatus};

/// A run as listed by the run tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Unique run identifier.
    pub run_id: RunId,

    /// Name of the pipeline the run executes.
    pub pipeline_name: String,

    /// Current run status.
    pub status: RunStatus,
}

impl RunSummary {
    /// Create a new RunSummary.
    pub fn new(run_id: impl Into<RunId>, pipeline_name: impl Into<String>, status: RunStatus) -> Self {
        Self {
            run_id: run_id.into(),
            pipeline_name: pipeline_name.into(),
            status,
        }
    }
}

/// Statistics for a single run, as returned by the stats lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Run these statistics belong to.
    pub run_id: RunId,

    /// Steps that completed successfully.
    #[serde(default)]
    pub steps_succeeded: u32,

    /// Steps that failed.
    #[serde(default)]
    pub steps_failed: u32,

    /// Materializations emitted by the run.
    #[serde(default)]
    pub materializations: u32,

    /// Expectation results emitted by the run.
    #[serde(default)]
    pub expectations: u32,

    /// When the run started executing.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,

    /// When the run finished.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

impl RunStats {
    /// Elapsed time between start and end, if both are known.
    ///
    /// Clock skew can put `end_time` before `start_time`; that yields `None`.
    pub fn duration(&self) -> Option<Duration> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) if end >= start => Some(end - start),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duration() {
        let stats = RunStats {
            run_id: RunId::new("run-1"),
            start_time: Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()),
            end_time: Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 1, 30).unwrap()),
            ..Default::default()
        };
        assert_eq!(stats.duration(), Some(Duration::seconds(90)));
    }

    #[test]
    fn test_duration_missing_or_skewed() {
        let mut stats = RunStats {
            start_time: Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()),
            ..Default::default()
        };
        assert_eq!(stats.duration(), None);

        stats.end_time = Some(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
        assert_eq!(stats.duration(), None);
    }

    #[test]
    fn test_stats_deserialize_with_missing_counts() {
        let stats: RunStats = serde_json::from_str(r#"{"run_id":"run-7","steps_failed":2}"#).unwrap();
        assert_eq!(stats.run_id.as_str(), "run-7");
        assert_eq!(stats.steps_failed, 2);
        assert_eq!(stats.steps_succeeded, 0);
        assert!(stats.start_time.is_none());
    }

    #[test]
    fn test_summary_deserialize() {
        let run: RunSummary = serde_json::from_str(
            r#"{"run_id":"run-123","pipeline_name":"etl","status":"STARTED"}"#,
        )
        .unwrap();
        assert_eq!(run, RunSummary::new("run-123", "etl", RunStatus::Started));
    }
}
