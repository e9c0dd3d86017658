//! Dashboard configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default run tracker base URL.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";

/// Default refresh interval for the runs list, in seconds.
pub const DEFAULT_REFRESH_SECS: u64 = 2;

/// Default hover delay, in milliseconds.
pub const DEFAULT_HOVER_DELAY_MS: u64 = 400;

/// Default log file.
pub const DEFAULT_LOG_FILE: &str = "/tmp/runtag-tui.log";

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Run tracker base URL.
    pub endpoint: String,

    /// How often the runs list is polled.
    pub refresh: Duration,

    /// How long the pointer must rest on a tag before stats are fetched.
    pub hover_delay: Duration,

    /// Where logs are written (the terminal belongs to the UI).
    pub log_file: PathBuf,
}

impl DashboardConfig {
    /// Build a config from raw CLI values.
    ///
    /// A zero refresh interval is bumped to one second.
    pub fn from_args(endpoint: String, refresh_secs: u64, hover_delay_ms: u64, log_file: PathBuf) -> Self {
        Self {
            endpoint,
            refresh: Duration::from_secs(refresh_secs.max(1)),
            hover_delay: Duration::from_millis(hover_delay_ms),
            log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args() {
        let config = DashboardConfig::from_args(
            DEFAULT_ENDPOINT.to_string(),
            DEFAULT_REFRESH_SECS,
            DEFAULT_HOVER_DELAY_MS,
            PathBuf::from(DEFAULT_LOG_FILE),
        );
        assert_eq!(config.refresh, Duration::from_secs(2));
        assert_eq!(config.hover_delay, Duration::from_millis(400));
    }

    #[test]
    fn test_zero_refresh_is_bumped() {
        let config = DashboardConfig::from_args(String::new(), 0, 0, PathBuf::new());
        assert_eq!(config.refresh, Duration::from_secs(1));
        assert_eq!(config.hover_delay, Duration::ZERO);
    }
}
