//! Error types for the upload workflow.
//!
//! - [`ApiError`] - Failures talking to the presign, storage or label services
//! - [`HostError`] - Failures of browser-side effects (file reading, object
//!   URLs, file saving)
//!
//! Neither kind is fatal: the orchestrator turns an [`ApiError`] into the
//! user-visible message via [`ApiError::user_message`] and returns to a
//! ready state.

use thiserror::Error;

/// Message shown when a remote step fails without a server-supplied reason.
pub const UPLOAD_FAILED: &str = "Upload failed";

// =============================================================================
// Remote Service Errors
// =============================================================================

/// Errors from one of the three remote calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (DNS, CORS, connection reset...).
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status.
    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        /// `message` field of the JSON body, if any.
        message: Option<String>,
    },

    /// Response body did not match the expected contract.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: server_message(body),
        }
    }

    /// Text to surface to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => UPLOAD_FAILED.to_string(),
        }
    }
}

/// Extract the `message` field from a JSON error body.
///
/// Other fields (the presign service's `error`, for one) are not shown.
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

// =============================================================================
// Host Errors
// =============================================================================

/// Errors from the platform the workflow runs on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    /// Could not create or release an object URL.
    #[error("Object URL error: {0}")]
    ObjectUrl(String),

    /// Could not read the bytes of a selected file.
    #[error("Failed to read file: {0}")]
    Read(String),

    /// Could not hand the file to the browser for saving.
    #[error("Failed to save file: {0}")]
    Save(String),

    /// Result could not be serialized for export.
    #[error("Failed to serialize results: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for HostError {
    fn from(err: serde_json::Error) -> Self {
        HostError::Serialize(err.to_string())
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for remote service calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_is_surfaced() {
        let err = ApiError::from_response(404, r#"{"message": "Image not found"}"#);
        assert_eq!(err.user_message(), "Image not found");
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_error_field_is_not_surfaced() {
        let body = r#"{"error": "Maximum images in S3 bucket reached, come back later after it's emptied."}"#;
        let err = ApiError::from_response(403, body);
        assert_eq!(err.user_message(), UPLOAD_FAILED);
        assert!(server_message(body).is_none());
    }

    #[test]
    fn test_message_read_alongside_error() {
        let body = r#"{"error": "internal", "message": "Try again"}"#;
        assert_eq!(server_message(body).as_deref(), Some("Try again"));
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(ApiError::from_response(500, "<html>").user_message(), UPLOAD_FAILED);
        assert_eq!(ApiError::from_response(500, r#"{"message": ""}"#).user_message(), UPLOAD_FAILED);
        assert_eq!(ApiError::Network("reset".into()).user_message(), UPLOAD_FAILED);
        assert_eq!(ApiError::Decode("missing key".into()).user_message(), UPLOAD_FAILED);
    }

    #[test]
    fn test_host_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HostError = json_err.into();
        assert!(matches!(err, HostError::Serialize(_)));
    }
}
