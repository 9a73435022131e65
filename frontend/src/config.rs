//! Application configuration.
//!
//! Deployment constants for the SNAP frontend. The workflow itself never
//! reads these directly: they are turned into a [`ClientConfig`] once at
//! start-up and injected.

use snap::ClientConfig;

/// Presign service: issues a one-time S3 upload URL for a content type.
pub const PRESIGN_ENDPOINT: &str =
    "https://jt50w5zanb.execute-api.us-east-2.amazonaws.com/v1/GenerateUploadUrl";

/// Label service: returns the stored analysis for a storage key.
pub const LABEL_ENDPOINT: &str =
    "https://ka3su04g4e.execute-api.us-east-2.amazonaws.com/v1/GetImageLabels";

/// Media types advertised by the file picker.
///
/// Advisory only; the header check decides.
pub const ACCEPTED_TYPES: &str = "image/png, image/jpeg";

/// Page heading and document title.
pub const APP_TITLE: &str = "Upload Image for SNAP to Analyze";

/// Logo served next to `index.html`.
pub const LOGO_PATH: &str = "/SNAP.png";

/// Build the workflow configuration from the constants above.
pub fn client_config() -> ClientConfig {
    ClientConfig::new(PRESIGN_ENDPOINT, LABEL_ENDPOINT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_config_uses_deployment_endpoints() {
        let config = client_config();
        assert_eq!(config.presign_endpoint, PRESIGN_ENDPOINT);
        assert_eq!(config.label_endpoint, LABEL_ENDPOINT);
        assert_eq!(config.analysis_delay, Duration::from_secs(5));
    }
}
