//! HTTP client for the presign, storage and label services.

use gloo_net::http::{Request, Response};
use js_sys::Uint8Array;
use snap::{
    AnalysisApi, AnalysisResult, ApiError, ApiResult, ClientConfig, PresignResponse,
    CONTENT_TYPE_PARAM, KEY_PARAM,
};

/// [`AnalysisApi`] over `fetch`.
#[derive(Debug, Clone)]
pub struct HttpAnalysisApi {
    presign_endpoint: String,
    label_endpoint: String,
}

impl HttpAnalysisApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            presign_endpoint: config.presign_endpoint.clone(),
            label_endpoint: config.label_endpoint.clone(),
        }
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn decode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the body's
/// message if it has one.
async fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let url = response.url();
    let body = response.text().await.unwrap_or_default();
    log::warn!("⚠️ {} answered {}: {}", url, status, body);
    Err(ApiError::from_response(status, &body))
}

impl AnalysisApi for HttpAnalysisApi {
    async fn presign(&self, content_type: &str) -> ApiResult<PresignResponse> {
        let response = Request::get(&self.presign_endpoint)
            .query([(CONTENT_TYPE_PARAM, content_type)])
            .send()
            .await
            .map_err(network_error)?;

        ensure_success(response)
            .await?
            .json::<PresignResponse>()
            .await
            .map_err(decode_error)
    }

    async fn upload(&self, upload_url: &str, content_type: &str, bytes: &[u8]) -> ApiResult<()> {
        let response = Request::put(upload_url)
            .header("Content-Type", content_type)
            .body(Uint8Array::from(bytes))
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn fetch_labels(&self, key: &str) -> ApiResult<AnalysisResult> {
        let response = Request::get(&self.label_endpoint)
            .query([(KEY_PARAM, key)])
            .send()
            .await
            .map_err(network_error)?;

        ensure_success(response)
            .await?
            .json::<AnalysisResult>()
            .await
            .map_err(decode_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_come_from_config() {
        let config = ClientConfig::new("http://localhost:9000/presign", "http://localhost:9000/labels");
        let api = HttpAnalysisApi::new(&config);
        assert_eq!(api.presign_endpoint, "http://localhost:9000/presign");
        assert_eq!(api.label_endpoint, "http://localhost:9000/labels");
    }
}
