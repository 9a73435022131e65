//! Client configuration.
//!
//! Endpoint URLs and workflow timings are injected through [`ClientConfig`]
//! so that tests can point the workflow at doubles of the remote services.

use std::time::Duration;

/// Time the analysis service needs after an upload before results exist.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_secs(5);

/// Grace period between hiding a result and discarding it.
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(400);

/// Endpoints and timings for one client instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// GET endpoint issuing `{uploadUrl, key}` for a content type.
    pub presign_endpoint: String,
    /// GET endpoint returning analysis results for a storage key.
    pub label_endpoint: String,
    /// Fixed wait between the upload and the single result fetch.
    pub analysis_delay: Duration,
    /// Fade-out grace period for a displayed result.
    pub fade_duration: Duration,
}

impl ClientConfig {
    pub fn new(presign_endpoint: impl Into<String>, label_endpoint: impl Into<String>) -> Self {
        Self {
            presign_endpoint: presign_endpoint.into(),
            label_endpoint: label_endpoint.into(),
            analysis_delay: DEFAULT_ANALYSIS_DELAY,
            fade_duration: DEFAULT_FADE_DURATION,
        }
    }

    pub fn with_analysis_delay(mut self, delay: Duration) -> Self {
        self.analysis_delay = delay;
        self
    }

    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("https://api/presign", "https://api/labels");
        assert_eq!(config.presign_endpoint, "https://api/presign");
        assert_eq!(config.label_endpoint, "https://api/labels");
        assert_eq!(config.analysis_delay, Duration::from_secs(5));
        assert_eq!(config.fade_duration, Duration::from_millis(400));
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::new("p", "l")
            .with_analysis_delay(Duration::ZERO)
            .with_fade_duration(Duration::from_millis(10));
        assert_eq!(config.analysis_delay, Duration::ZERO);
        assert_eq!(config.fade_duration, Duration::from_millis(10));
    }
}
