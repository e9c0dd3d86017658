//! Status presentation.
//!
//! Maps a [`RunStatus`] to the label, intent and busy flag a badge is drawn
//! with. The match in [`present`] has no wildcard arm, so adding a status
//! variant does not compile until it is given a presentation here.

use serde::Serialize;

use crate::RunStatus;

/// Visual severity used to color a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Neutral,
    Success,
    Danger,
    Primary,
}

/// What a rendering layer needs to paint a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PresentationDescriptor {
    /// Human-readable label.
    pub label: &'static str,
    /// Badge color category.
    pub intent: Intent,
    /// Whether a busy indicator (spinner) accompanies the label.
    pub busy: bool,
}

impl PresentationDescriptor {
    const fn new(label: &'static str, intent: Intent, busy: bool) -> Self {
        Self {
            label,
            intent,
            busy,
        }
    }
}

/// Describe how a run status is presented.
pub fn present(status: RunStatus) -> PresentationDescriptor {
    use Intent::*;

    match status {
        RunStatus::Queued => PresentationDescriptor::new("Queued", Neutral, false),
        RunStatus::NotStarted => PresentationDescriptor::new("Not started", Neutral, false),
        RunStatus::Starting => PresentationDescriptor::new("Starting", Neutral, false),
        RunStatus::Started => PresentationDescriptor::new("Started", Primary, true),
        RunStatus::Succeeded => PresentationDescriptor::new("Succeeded", Success, false),
        RunStatus::Failed => PresentationDescriptor::new("Failed", Danger, false),
        RunStatus::Managed => PresentationDescriptor::new("Managed", Neutral, false),
    }
}

impl RunStatus {
    /// Shorthand for [`present`].
    pub fn descriptor(self) -> PresentationDescriptor {
        present(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [(RunStatus, &str, Intent, bool); 7] = [
        (RunStatus::Queued, "Queued", Intent::Neutral, false),
        (RunStatus::NotStarted, "Not started", Intent::Neutral, false),
        (RunStatus::Starting, "Starting", Intent::Neutral, false),
        (RunStatus::Started, "Started", Intent::Primary, true),
        (RunStatus::Succeeded, "Succeeded", Intent::Success, false),
        (RunStatus::Failed, "Failed", Intent::Danger, false),
        (RunStatus::Managed, "Managed", Intent::Neutral, false),
    ];

    #[test]
    fn test_present_matches_table() {
        for (status, label, intent, busy) in TABLE {
            let d = present(status);
            assert_eq!(d.label, label, "label for {status:?}");
            assert_eq!(d.intent, intent, "intent for {status:?}");
            assert_eq!(d.busy, busy, "busy for {status:?}");
        }
    }

    #[test]
    fn test_every_status_has_table_entry() {
        for status in RunStatus::ALL {
            assert!(
                TABLE.iter().any(|(s, ..)| *s == status),
                "no presentation entry for {status:?}"
            );
        }
        assert_eq!(TABLE.len(), RunStatus::ALL.len());
    }

    #[test]
    fn test_present_is_pure() {
        for status in RunStatus::ALL {
            assert_eq!(present(status), present(status));
            assert_eq!(status.descriptor(), present(status));
        }
    }

    #[test]
    fn test_started_is_busy_primary() {
        assert_eq!(
            present(RunStatus::Started),
            PresentationDescriptor {
                label: "Started",
                intent: Intent::Primary,
                busy: true,
            }
        );
    }

    #[test]
    fn test_failed_is_danger() {
        assert_eq!(
            present(RunStatus::Failed),
            PresentationDescriptor {
                label: "Failed",
                intent: Intent::Danger,
                busy: false,
            }
        );
    }

    #[test]
    fn test_only_started_is_busy() {
        let busy: Vec<_> = RunStatus::ALL
            .into_iter()
            .filter(|s| present(*s).busy)
            .collect();
        assert_eq!(busy, vec![RunStatus::Started]);
    }

    #[test]
    fn test_descriptor_json() {
        let json = serde_json::to_value(present(RunStatus::Succeeded)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "label": "Succeeded", "intent": "success", "busy": false })
        );
    }
}
