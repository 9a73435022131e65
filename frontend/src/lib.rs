//! SNAP - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading an image and browsing its automated
//! analysis (labels, celebrities, face attributes).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (logo, title)                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── UploadSection (drop zone, upload button, error)         │
//! │  └── ResultsPanel (results + download, when available)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All workflow logic lives in the `snap` crate; this crate provides the
//! browser implementations of its traits and the markup.
//!
//! # Modules
//!
//! - [`config`] - Endpoints and page constants
//! - [`components`] - UI components (Hero, Upload, Results)
//! - [`services`] - HTTP client and browser host

use std::rc::Rc;

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use snap::Orchestrator;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// Services
pub use services::*;

/// The workflow wired to the real network and DOM.
pub type BrowserOrchestrator = Orchestrator<HttpAnalysisApi, BrowserHost>;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and panic hooks, then mount the application.
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 SNAP - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let config = client_config();
    let orchestrator = Rc::new(BrowserOrchestrator::new(
        HttpAnalysisApi::new(&config),
        BrowserHost,
        config,
    ));

    // Mirror every workflow state change into the reactive graph
    let (state, set_state) = create_signal(orchestrator.snapshot());
    orchestrator.subscribe(move |snapshot| set_state.set(snapshot.clone()));

    view! {
        <div class="container">
            <Hero/>

            <div class="card">
                <UploadSection orchestrator=Rc::clone(&orchestrator) state=state/>
                <ResultsPanel orchestrator=orchestrator state=state/>
            </div>
        </div>
    }
}
