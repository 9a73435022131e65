//! Browser implementation of the workflow's [`Host`] effects.
//!
//! Object URLs pin their blob in memory until revoked. Previews are revoked
//! by the orchestrator when superseded; download URLs live in an
//! [`ObjectUrl`] guard that revokes on drop, whatever path `save_text` takes.

use std::time::Duration;

use js_sys::{Array, Uint8Array};
use snap::{Host, HostError, HostResult, PreviewHandle, UploadCandidate, EXPORT_MIME_TYPE};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

/// Render a JS exception for logs and error messages.
pub fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn blob_options(mime: &str) -> BlobPropertyBag {
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    options
}

fn bytes_blob(bytes: &[u8], mime: &str) -> Result<Blob, JsValue> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    Blob::new_with_u8_array_sequence_and_options(&parts, &blob_options(mime))
}

fn text_blob(text: &str, mime: &str) -> Result<Blob, JsValue> {
    let parts = Array::of1(&JsValue::from_str(text));
    Blob::new_with_str_sequence_and_options(&parts, &blob_options(mime))
}

/// An object URL revoked when dropped.
struct ObjectUrl(String);

impl ObjectUrl {
    fn new(blob: &Blob) -> HostResult<Self> {
        Url::create_object_url_with_blob(blob)
            .map(ObjectUrl)
            .map_err(|e| HostError::ObjectUrl(js_error(&e)))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            log::warn!("Could not revoke {}: {}", self.0, js_error(&e));
        }
    }
}

/// [`Host`] backed by `window`, timers and the DOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    fn create_preview(&self, candidate: &UploadCandidate) -> HostResult<PreviewHandle> {
        let blob = bytes_blob(&candidate.bytes, candidate.upload_content_type())
            .map_err(|e| HostError::ObjectUrl(js_error(&e)))?;
        Url::create_object_url_with_blob(&blob)
            .map(PreviewHandle)
            .map_err(|e| HostError::ObjectUrl(js_error(&e)))
    }

    fn release_preview(&self, handle: &PreviewHandle) {
        if let Err(e) = Url::revoke_object_url(handle.url()) {
            log::warn!("Could not revoke preview {}: {}", handle.url(), js_error(&e));
        }
    }

    fn save_text(&self, file_name: &str, contents: &str) -> HostResult<()> {
        let save_error = |e: JsValue| HostError::Save(js_error(&e));

        let blob = text_blob(contents, EXPORT_MIME_TYPE).map_err(save_error)?;
        let url = ObjectUrl::new(&blob)?;

        let document = gloo_utils::document();
        let link: HtmlAnchorElement = document
            .create_element("a")
            .map_err(save_error)?
            .dyn_into()
            .map_err(|_| HostError::Save("created element is not an anchor".into()))?;
        link.set_href(&url.0);
        link.set_download(file_name);

        let body = gloo_utils::body();
        body.append_child(&link).map_err(save_error)?;
        link.click();
        body.remove_child(&link).map_err(save_error)?;
        Ok(())
    }
}

/// Read a picked or dropped file into an [`UploadCandidate`].
pub async fn read_candidate(file: &File) -> HostResult<UploadCandidate> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| HostError::Read(js_error(&e)))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(UploadCandidate::new(file.name(), file.type_(), bytes))
}
