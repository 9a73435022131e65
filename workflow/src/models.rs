//! Domain models for the upload workflow.
//!
//! - [`UploadCandidate`] - The selected file awaiting analysis
//! - [`AnalysisResult`] - The label service's response
//! - [`WorkflowState`] - Everything the UI renders from

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::rc::Rc;

/// Content type sent with the upload when the file declares none.
pub const FALLBACK_CONTENT_TYPE: &str = "image/png";

// =============================================================================
// Upload Candidate
// =============================================================================

/// A file selected by the user, owned by the orchestrator until superseded.
#[derive(Clone, PartialEq)]
pub struct UploadCandidate {
    /// Local file name, shown to the user as the display key.
    pub name: String,
    /// Media type declared by the browser (may be empty).
    pub media_type: String,
    /// Full file content.
    pub bytes: Vec<u8>,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// `Content-Type` header value for the storage upload.
    pub fn upload_content_type(&self) -> &str {
        if self.media_type.is_empty() {
            FALLBACK_CONTENT_TYPE
        } else {
            &self.media_type
        }
    }
}

impl std::fmt::Debug for UploadCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadCandidate")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Revocable local reference to a candidate's bytes (an object URL in a
/// browser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle(pub String);

impl PreviewHandle {
    pub fn url(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Analysis Result
// =============================================================================

/// A single detected label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Label {
    pub name: String,
    /// Percentage in `0.0..=100.0`.
    pub confidence: f64,
}

impl Label {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AnalysisFields {
    #[serde(default)]
    labels: Option<Vec<Label>>,
    #[serde(default)]
    celebrities: Option<Vec<String>>,
    #[serde(default)]
    faces: Option<Vec<String>>,
}

/// Analysis returned by the label service.
///
/// The typed fields are read from the payload; the payload itself is kept
/// untouched so the export reproduces exactly what the service sent.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub labels: Option<Vec<Label>>,
    pub celebrities: Option<Vec<String>>,
    pub faces: Option<Vec<String>>,
    raw: Value,
}

impl AnalysisResult {
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        let fields = AnalysisFields::deserialize(&raw)?;
        Ok(Self {
            labels: fields.labels,
            celebrities: fields.celebrities,
            faces: fields.faces,
            raw,
        })
    }

    /// The payload exactly as received.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AnalysisResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        AnalysisResult::from_value(raw).map_err(D::Error::custom)
    }
}

// =============================================================================
// Workflow State
// =============================================================================

/// The single mutable record behind the UI.
///
/// Only the orchestrator writes it; everyone else sees clones. Large members
/// are reference counted so snapshots stay cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowState {
    pub candidate: Option<Rc<UploadCandidate>>,
    pub preview: Option<PreviewHandle>,
    /// Original filename of the last submitted candidate.
    pub display_key: Option<String>,
    /// Opaque key issued by the presign service for the last upload.
    pub storage_key: Option<String>,
    pub result: Option<Rc<AnalysisResult>>,
    pub is_busy: bool,
    pub error: Option<String>,
    /// `false` while a result is fading out.
    pub result_visible: bool,
}

impl WorkflowState {
    /// Whether the upload trigger should be enabled.
    pub fn can_upload(&self) -> bool {
        self.candidate.is_some() && !self.is_busy
    }

    /// Whether there is something to export.
    pub fn can_download(&self) -> bool {
        self.result.is_some() && self.display_key.is_some()
    }
}

/// How a call to `start_upload` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Result stored and made visible.
    Completed,
    /// A step failed; the message is in [`WorkflowState::error`].
    Failed,
    /// Nothing selected or an upload already in flight.
    Skipped,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_deserialization() {
        let json = r#"{
            "ImageKey": "0b6f1d2e.jpeg",
            "Labels": [
                {"Name": "Orange", "Confidence": 95.2},
                {"Name": "Fruit", "Confidence": 88}
            ],
            "Celebrities": [],
            "Faces": ["Smiling (97.3%)"]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        let labels = result.labels.as_ref().unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0], Label::new("Orange", 95.2));
        assert_eq!(labels[1].confidence, 88.0);
        assert_eq!(result.celebrities, Some(vec![]));
        assert_eq!(result.faces.as_deref(), Some(&["Smiling (97.3%)".to_string()][..]));
        assert_eq!(result.raw()["ImageKey"], "0b6f1d2e.jpeg");
    }

    #[test]
    fn test_missing_and_null_sections() {
        let result = AnalysisResult::from_value(json!({"Labels": null})).unwrap();
        assert!(result.labels.is_none());
        assert!(result.celebrities.is_none());
        assert!(result.faces.is_none());
    }

    #[test]
    fn test_malformed_label_rejected() {
        let err = AnalysisResult::from_value(json!({"Labels": [{"Name": "Cat"}]}));
        assert!(err.is_err());
    }

    #[test]
    fn test_serializes_payload_verbatim() {
        let raw = json!({"ImageKey": "k.png", "Labels": [{"Name": "Cat", "Confidence": 91}], "Extra": true});
        let result = AnalysisResult::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), raw);
    }

    #[test]
    fn test_upload_content_type_fallback() {
        let typed = UploadCandidate::new("a.jpg", "image/jpeg", vec![]);
        let untyped = UploadCandidate::new("a", "", vec![]);
        assert_eq!(typed.upload_content_type(), "image/jpeg");
        assert_eq!(untyped.upload_content_type(), FALLBACK_CONTENT_TYPE);
    }

    #[test]
    fn test_state_guards() {
        let mut state = WorkflowState::default();
        assert!(!state.can_upload());
        assert!(!state.can_download());

        state.candidate = Some(Rc::new(UploadCandidate::new("a.png", "image/png", vec![1])));
        assert!(state.can_upload());
        state.is_busy = true;
        assert!(!state.can_upload());

        state.result = Some(Rc::new(AnalysisResult::from_value(json!({})).unwrap()));
        assert!(!state.can_download());
        state.display_key = Some("a.png".into());
        assert!(state.can_download());
    }
}
