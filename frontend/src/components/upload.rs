//! Image intake with drag & drop support.
//!
//! Both the hidden file input and the drop zone feed the same intake path:
//! read the file, then hand it to the orchestrator for header validation.

use std::rc::Rc;

use leptos::*;
use snap::WorkflowState;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::services::read_candidate;
use crate::{BrowserOrchestrator, ACCEPTED_TYPES};

const DROP_PROMPT: &str = "Drag & drop an image or click to select";

#[component]
pub fn UploadSection(
    orchestrator: Rc<BrowserOrchestrator>,
    state: ReadSignal<WorkflowState>,
) -> impl IntoView {
    // Shared by the picker and the drop zone
    let intake = {
        let orchestrator = Rc::clone(&orchestrator);
        move |file: File| {
            let orchestrator = Rc::clone(&orchestrator);
            spawn_local(async move {
                match read_candidate(&file).await {
                    Ok(candidate) => {
                        orchestrator.handle_file(candidate).await;
                    }
                    Err(e) => log::error!("❌ Could not read {}: {}", file.name(), e),
                }
            });
        }
    };

    let on_file_change = {
        let intake = intake.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                intake(file);
            }
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            intake(file);
        }
    };

    // Keeps the browser from opening the dropped file itself
    let on_dragover = move |ev: DragEvent| ev.prevent_default();

    let on_upload = move |_: ev::MouseEvent| {
        let orchestrator = Rc::clone(&orchestrator);
        spawn_local(async move {
            orchestrator.start_upload().await;
        });
    };

    let has_preview = move || state.with(|s| s.preview.is_some());

    view! {
        <div
            class="drop-zone"
            class:empty=move || !has_preview()
            on:drop=on_drop
            on:dragover=on_dragover
        >
            <input
                type="file"
                id="fileInput"
                accept=ACCEPTED_TYPES
                style="display:none"
                on:change=on_file_change
            />
            <label for="fileInput" class="drop-zone-label">
                {move || match state.with(|s| s.preview.clone()) {
                    Some(preview) => view! {
                        <img src=preview.url().to_string() alt="Preview" class="preview-image"/>
                    }.into_view(),
                    None => DROP_PROMPT.into_view(),
                }}
            </label>
        </div>

        <button
            class="btn btn-primary"
            id="uploadBtn"
            on:click=on_upload
            disabled=move || !state.with(WorkflowState::can_upload)
        >
            {move || if state.with(|s| s.is_busy) {
                view! {
                    <span class="busy">
                        <span class="spinner"></span>
                        "Processing..."
                    </span>
                }.into_view()
            } else {
                "Upload & Analyze".into_view()
            }}
        </button>

        <Show
            when=move || state.with(|s| s.error.is_some())
            fallback=|| view! { }
        >
            <p class="error-message">
                {move || state.with(|s| s.error.clone().unwrap_or_default())}
            </p>
        </Show>
    }
}
