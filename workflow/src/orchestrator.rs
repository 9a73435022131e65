//! Upload orchestration.
//!
//! The [`Orchestrator`] owns the [`WorkflowState`] and runs the upload cycle:
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │  fade    │──▶│ presign  │──▶│   PUT    │──▶│ wait 5s  │──▶│  labels  │
//! │ previous │   │   GET    │   │ storage  │   │          │   │   GET    │
//! └──────────┘   └──────────┘   └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! Every step is awaited before the next one starts. The busy flag is the only
//! mutual exclusion; it is released by a drop guard so no exit path can leave
//! the workflow stuck. State is read from the cell at each step, never from a
//! snapshot taken earlier, and borrows are never held across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{AnalysisApi, Host};
use crate::config::ClientConfig;
use crate::error::{ApiResult, HostResult};
use crate::export::ResultsExport;
use crate::models::{AnalysisResult, UploadCandidate, UploadOutcome, WorkflowState};
use crate::validator::{sniff, INVALID_IMAGE_MESSAGE};

type Observer = Box<dyn Fn(&WorkflowState)>;

/// Drives the validate → presign → upload → fetch workflow.
pub struct Orchestrator<A, H> {
    api: A,
    host: H,
    config: ClientConfig,
    state: RefCell<WorkflowState>,
    observers: RefCell<Vec<Observer>>,
}

impl<A, H> Orchestrator<A, H> {
    pub fn new(api: A, host: H, config: ClientConfig) -> Self {
        Self {
            api,
            host,
            config,
            state: RefCell::new(WorkflowState::default()),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    /// Call `observer` with a fresh snapshot after every state change.
    pub fn subscribe(&self, observer: impl Fn(&WorkflowState) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    fn update<R>(&self, f: impl FnOnce(&mut WorkflowState) -> R) -> R {
        let out = f(&mut self.state.borrow_mut());
        self.notify();
        out
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for observer in self.observers.borrow().iter() {
            observer(&snapshot);
        }
    }

    /// Drop `expected` if it is still the active result.
    ///
    /// A fade started for an older result must not discard a newer one that
    /// arrived during the grace period.
    fn clear_result_if(&self, expected: &Rc<AnalysisResult>) {
        let cleared = {
            let mut state = self.state.borrow_mut();
            let is_current = state
                .result
                .as_ref()
                .is_some_and(|current| Rc::ptr_eq(current, expected));
            if is_current {
                state.result = None;
            }
            is_current
        };
        if cleared {
            self.notify();
        }
    }
}

impl<A: AnalysisApi, H: Host> Orchestrator<A, H> {
    /// Intake entry point for both the file picker and drag-and-drop.
    ///
    /// Returns whether the file was accepted as the new candidate. The
    /// selection applies before the previous result has finished fading out.
    pub async fn handle_file(&self, candidate: UploadCandidate) -> bool {
        let fading = self.hide_result();
        let accepted = self.select_candidate(candidate);
        self.finish_fade(fading).await;
        accepted
    }

    fn select_candidate(&self, candidate: UploadCandidate) -> bool {
        let Some(kind) = sniff(&candidate.bytes) else {
            log::warn!("❌ Rejected {}: not a PNG or JPEG header", candidate.name);
            let stale = self.update(|state| {
                state.candidate = None;
                state.error = Some(INVALID_IMAGE_MESSAGE.to_string());
                state.preview.take()
            });
            if let Some(handle) = stale {
                self.host.release_preview(&handle);
            }
            return false;
        };

        log::info!(
            "🖼️ Selected {} ({}, {} bytes, declared {:?})",
            candidate.name,
            kind.media_type(),
            candidate.bytes.len(),
            candidate.media_type
        );

        let preview = match self.host.create_preview(&candidate) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("Could not create preview: {}", e);
                None
            }
        };

        let stale = self.update(|state| {
            state.candidate = Some(Rc::new(candidate));
            state.error = None;
            std::mem::replace(&mut state.preview, preview)
        });
        if let Some(handle) = stale {
            self.host.release_preview(&handle);
        }
        true
    }

    /// Run one upload cycle for the selected candidate.
    ///
    /// No-op when nothing is selected or a cycle is already in flight.
    pub async fn start_upload(&self) -> UploadOutcome {
        let candidate = {
            let state = self.state.borrow();
            if state.is_busy {
                log::debug!("Upload already in flight, ignoring trigger");
                return UploadOutcome::Skipped;
            }
            match &state.candidate {
                Some(candidate) => Rc::clone(candidate),
                None => return UploadOutcome::Skipped,
            }
        };

        let _busy = BusyGuard::acquire(self);
        self.invalidate_result().await;

        match self.run_cycle(&candidate).await {
            Ok(result) => {
                self.update(|state| {
                    state.result = Some(Rc::new(result));
                    state.result_visible = true;
                });
                UploadOutcome::Completed
            }
            Err(e) => {
                log::error!("❌ Upload of {} failed: {}", candidate.name, e);
                self.update(|state| state.error = Some(e.user_message()));
                UploadOutcome::Failed
            }
        }
    }

    async fn run_cycle(&self, candidate: &UploadCandidate) -> ApiResult<AnalysisResult> {
        log::info!("📤 Requesting upload URL (contentType={:?})", candidate.media_type);
        let presign = self.api.presign(&candidate.media_type).await?;

        self.update(|state| {
            state.display_key = Some(candidate.name.clone());
            state.storage_key = Some(presign.key.clone());
        });

        log::info!("☁️ Uploading {} bytes as {}", candidate.bytes.len(), presign.key);
        self.api
            .upload(&presign.upload_url, candidate.upload_content_type(), &candidate.bytes)
            .await?;

        log::info!("⏳ Waiting {:?} for analysis", self.config.analysis_delay);
        self.host.sleep(self.config.analysis_delay).await;

        let result = self.api.fetch_labels(&presign.key).await?;
        log::info!(
            "✅ Analysis received: {} labels",
            result.labels.as_ref().map_or(0, Vec::len)
        );
        Ok(result)
    }

    /// Fade out the displayed result, then discard it.
    async fn invalidate_result(&self) {
        let fading = self.hide_result();
        self.finish_fade(fading).await;
    }

    /// Start fading the active result. Returns it with whether it was shown.
    fn hide_result(&self) -> Option<(Rc<AnalysisResult>, bool)> {
        let (current, visible) = {
            let state = self.state.borrow();
            (state.result.clone()?, state.result_visible)
        };
        if visible {
            self.update(|state| state.result_visible = false);
        }
        Some((current, visible))
    }

    async fn finish_fade(&self, fading: Option<(Rc<AnalysisResult>, bool)>) {
        let Some((result, was_visible)) = fading else {
            return;
        };
        if was_visible {
            self.host.sleep(self.config.fade_duration).await;
        }
        self.clear_result_if(&result);
    }

    /// Save the active result as `<name>-results.txt`.
    ///
    /// Returns the saved file name, or `None` when there is nothing to save.
    pub fn download_results(&self) -> HostResult<Option<String>> {
        let (display_key, result) = {
            let state = self.state.borrow();
            match (&state.display_key, &state.result) {
                (Some(key), Some(result)) => (key.clone(), Rc::clone(result)),
                _ => return Ok(None),
            }
        };

        let export = ResultsExport::new(&display_key, &result)?;
        self.host.save_text(&export.file_name, &export.contents)?;
        log::info!("💾 Saved {}", export.file_name);
        Ok(Some(export.file_name))
    }
}

/// Holds the busy flag for the lifetime of an upload cycle.
struct BusyGuard<'a, A, H> {
    orchestrator: &'a Orchestrator<A, H>,
}

impl<'a, A, H> BusyGuard<'a, A, H> {
    fn acquire(orchestrator: &'a Orchestrator<A, H>) -> Self {
        orchestrator.update(|state| {
            state.is_busy = true;
            state.error = None;
        });
        Self { orchestrator }
    }
}

impl<A, H> Drop for BusyGuard<'_, A, H> {
    fn drop(&mut self) {
        self.orchestrator.update(|state| state.is_busy = false);
    }
}
