//! Seams between the workflow and the outside world.
//!
//! | Trait           | Browser implementation            | Purpose                           |
//! |-----------------|-----------------------------------|-----------------------------------|
//! | [`AnalysisApi`] | `gloo-net` HTTP client            | presign, storage upload, labels   |
//! | [`Host`]        | `gloo-timers` + `web-sys`         | delays, object URLs, file saving  |
//!
//! Both traits use `async fn` without `Send` bounds: the workflow runs on a
//! single-threaded event loop.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ApiResult, HostResult};
use crate::models::{AnalysisResult, PreviewHandle, UploadCandidate};

/// Query parameter carrying the media type on the presign request.
pub const CONTENT_TYPE_PARAM: &str = "contentType";

/// Query parameter carrying the storage key on the label request.
pub const KEY_PARAM: &str = "key";

/// One-time upload destination issued by the presign service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignResponse {
    pub upload_url: String,
    /// Opaque storage key used to fetch the analysis later.
    pub key: String,
}

/// The three remote calls of an upload cycle.
#[allow(async_fn_in_trait)]
pub trait AnalysisApi {
    /// `GET <presign>?contentType=<content_type>`
    async fn presign(&self, content_type: &str) -> ApiResult<PresignResponse>;

    /// `PUT <upload_url>` with the raw bytes.
    async fn upload(&self, upload_url: &str, content_type: &str, bytes: &[u8]) -> ApiResult<()>;

    /// `GET <labels>?key=<key>`
    async fn fetch_labels(&self, key: &str) -> ApiResult<AnalysisResult>;
}

/// Platform effects the orchestrator needs besides HTTP.
#[allow(async_fn_in_trait)]
pub trait Host {
    /// Suspend without blocking the event loop.
    async fn sleep(&self, duration: Duration);

    /// Create a local preview reference for a candidate.
    fn create_preview(&self, candidate: &UploadCandidate) -> HostResult<PreviewHandle>;

    /// Release a preview reference created by [`Host::create_preview`].
    fn release_preview(&self, handle: &PreviewHandle);

    /// Offer `contents` to the user as a download named `file_name`.
    ///
    /// Any temporary resource created for the save must be released before
    /// returning, on success and on failure.
    fn save_text(&self, file_name: &str, contents: &str) -> HostResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presign_deserialization() {
        let json = r#"{
            "uploadUrl": "https://bucket.s3.amazonaws.com/3f2a.jpeg?X-Amz-Signature=abc",
            "key": "3f2a.jpeg"
        }"#;

        let response: PresignResponse = serde_json::from_str(json).unwrap();
        assert!(response.upload_url.starts_with("https://bucket"));
        assert_eq!(response.key, "3f2a.jpeg");
    }

    #[test]
    fn test_presign_missing_key_rejected() {
        let result: Result<PresignResponse, _> = serde_json::from_str(r#"{"uploadUrl": "https://x"}"#);
        assert!(result.is_err());
    }
}
