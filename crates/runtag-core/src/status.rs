//! Run status enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Lifecycle status of a Run, as reported by the run tracker.
///
/// The set is closed: there is no "unknown" variant. Strings coming from
/// outside are parsed with [`FromStr`], which rejects anything unrecognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    /// Run is waiting in the run queue.
    Queued,
    /// Run has been created but launch has not been attempted.
    NotStarted,
    /// Run launch is in progress.
    Starting,
    /// Run is executing.
    Started,
    /// Run finished successfully.
    Succeeded,
    /// Run finished with a failure.
    Failed,
    /// Run is managed by an external system.
    Managed,
}

impl RunStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [RunStatus; 7] = [
        Self::Queued,
        Self::NotStarted,
        Self::Starting,
        Self::Started,
        Self::Succeeded,
        Self::Failed,
        Self::Managed,
    ];

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "QUEUED",
            Self::NotStarted => "NOT_STARTED",
            Self::Starting => "STARTING",
            Self::Started => "STARTED",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Managed => "MANAGED",
        }
    }

    /// Returns true if the run has finished.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Returns true if the run is launching or executing.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::Starting | Self::Started)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase and drop separators so `NOT_STARTED`, `not-started` and
/// `NotStarted` compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for RunStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s.trim());
        Self::ALL
            .into_iter()
            .find(|status| normalize(status.as_str()) == wanted)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(RunStatus::Succeeded.is_terminal());
        assert!(RunStatus::Failed.is_terminal());

        assert!(!RunStatus::Queued.is_terminal());
        assert!(!RunStatus::Started.is_terminal());
        assert!(!RunStatus::Managed.is_terminal());
    }

    #[test]
    fn test_in_progress_states() {
        assert!(RunStatus::Starting.is_in_progress());
        assert!(RunStatus::Started.is_in_progress());
        assert!(!RunStatus::Queued.is_in_progress());
        assert!(!RunStatus::Succeeded.is_in_progress());
    }

    #[test]
    fn test_all_lists_each_variant_once() {
        for (i, a) in RunStatus::ALL.iter().enumerate() {
            for b in &RunStatus::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_parses_wire_and_variant_names() {
        assert_eq!("NOT_STARTED".parse::<RunStatus>(), Ok(RunStatus::NotStarted));
        assert_eq!("NotStarted".parse::<RunStatus>(), Ok(RunStatus::NotStarted));
        assert_eq!("not-started".parse::<RunStatus>(), Ok(RunStatus::NotStarted));
        assert_eq!(" started ".parse::<RunStatus>(), Ok(RunStatus::Started));
    }

    #[test]
    fn test_display_matches_serde() {
        for status in RunStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
            assert_eq!(status.to_string().parse::<RunStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_rejects_unknown_status_by_name() {
        let err = "CANCELED".parse::<RunStatus>().unwrap_err();
        assert_eq!(err, CoreError::UnknownStatus("CANCELED".to_string()));
        assert_eq!(err.to_string(), "Unknown run status: 'CANCELED'");
    }

    #[test]
    fn test_rejects_empty_status() {
        assert!("".parse::<RunStatus>().is_err());
    }
}
