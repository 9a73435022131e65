//! # SNAP - image upload and analysis workflow
//!
//! Platform-independent core of the SNAP client. A user picks a PNG or JPEG,
//! the client checks its magic bytes, asks the presign service for a one-time
//! upload URL, PUTs the file to object storage, waits for the analysis to run
//! and fetches the labels, celebrities and face attributes found.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │  Validator  │────▶│   Orchestrator   │────▶│  Renderer   │
//! │ (magic hdr) │     │ presign/PUT/GET  │     │ (view model)│
//! └─────────────┘     └──────────────────┘     └─────────────┘
//!                        │            │
//!                  AnalysisApi       Host
//!                  (HTTP calls)   (timers, object URLs, saving)
//! ```
//!
//! The browser implementations of [`AnalysisApi`] and [`Host`] live in the
//! `snap-frontend` crate; tests use in-memory doubles.
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Injected endpoints and timings
//! - [`models`] - Candidate, result and workflow state
//! - [`validator`] - PNG/JPEG header sniffing
//! - [`api`] - Traits for remote services and host effects
//! - [`orchestrator`] - The upload cycle
//! - [`render`] - Results view model
//! - [`export`] - Text export of a result set

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Intake
pub mod validator;

// Workflow
pub mod api;
pub mod orchestrator;

// Presentation
pub mod export;
pub mod render;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{AnalysisApi, Host, PresignResponse, CONTENT_TYPE_PARAM, KEY_PARAM};
pub use config::ClientConfig;
pub use error::{server_message, ApiError, ApiResult, HostError, HostResult, UPLOAD_FAILED};
pub use export::{export_file_name, ResultsExport, EXPORT_MIME_TYPE};
pub use models::{AnalysisResult, Label, PreviewHandle, UploadCandidate, UploadOutcome, WorkflowState};
pub use orchestrator::Orchestrator;
pub use render::{
    display_name, render, sorted_labels, ConfidenceTier, FaceAttribute, LabelView, ResultsView,
    CELEBRITY_ICON, NO_LABELS_PLACEHOLDER,
};
pub use validator::{sniff, validate, ImageKind, HEADER_LEN, INVALID_IMAGE_MESSAGE};
