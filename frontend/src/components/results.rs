//! Analysis results: labels, celebrities and face attributes.

use std::rc::Rc;

use leptos::*;
use snap::{
    render, AnalysisResult, LabelView, ResultsView, WorkflowState, CELEBRITY_ICON,
    NO_LABELS_PLACEHOLDER,
};

use crate::BrowserOrchestrator;

/// The result being shown, compared by identity so busy or error changes
/// do not rebuild the panel.
#[derive(Clone)]
struct Shown {
    display_key: String,
    result: Rc<AnalysisResult>,
}

impl PartialEq for Shown {
    fn eq(&self, other: &Self) -> bool {
        self.display_key == other.display_key && Rc::ptr_eq(&self.result, &other.result)
    }
}

/// Fading container shown while a result exists, plus the download button.
#[component]
pub fn ResultsPanel(
    orchestrator: Rc<BrowserOrchestrator>,
    state: ReadSignal<WorkflowState>,
) -> impl IntoView {
    let on_download = move |_: ev::MouseEvent| match orchestrator.download_results() {
        Ok(Some(file_name)) => log::info!("📄 Download started: {}", file_name),
        Ok(None) => {}
        Err(e) => log::error!("❌ Download failed: {}", e),
    };

    let visible = move || state.with(|s| s.result_visible);
    let shown = create_memo(move |_| {
        state.with(|s| match (&s.display_key, &s.result) {
            (Some(key), Some(result)) => Some(Shown {
                display_key: key.clone(),
                result: Rc::clone(result),
            }),
            _ => None,
        })
    });

    view! {
        <Show
            when=move || shown.with(Option::is_some)
            fallback=|| view! { }
        >
            <div class="results-wrapper" class:fade-in=visible class:fade-out=move || !visible()>
                {move || shown.get().map(|Shown { display_key, result }| view! {
                    <ResultsDisplay display_key=display_key result=result/>
                })}
            </div>
        </Show>

        <Show
            when=move || state.with(WorkflowState::can_download)
            fallback=|| view! { }
        >
            <div class="download">
                <button class="btn btn-secondary" id="downloadBtn" on:click=on_download.clone()>
                    "Download Results as .txt"
                </button>
            </div>
        </Show>
    }
}

#[component]
pub fn ResultsDisplay(display_key: String, result: Rc<AnalysisResult>) -> impl IntoView {
    let ResultsView {
        title,
        labels,
        celebrities,
        faces,
    } = render(&display_key, &result);

    view! {
        <div class="results">
            <h2 class="results-title">
                "Results for: "
                <span class="results-name">"📄 " <code>{title}</code></span>
            </h2>

            <div class="results-section">
                <p class="section-title">"Labels (sorted by confidence):"</p>
                <ul class="label-list">
                    {if labels.is_empty() {
                        view! { <li class="placeholder">{NO_LABELS_PLACEHOLDER}</li> }.into_view()
                    } else {
                        labels
                            .into_iter()
                            .map(|label| view! { <LabelRow label=label/> })
                            .collect_view()
                    }}
                </ul>
            </div>

            {(!celebrities.is_empty()).then(|| view! {
                <div class="results-section">
                    <p class="section-title">"Celebrities:"</p>
                    <ul class="badge-list">
                        {celebrities
                            .into_iter()
                            .map(|name| view! {
                                <li><span class="celebrity-badge">{CELEBRITY_ICON} " " {name}</span></li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            })}

            {(!faces.is_empty()).then(|| view! {
                <div class="results-section">
                    <p class="section-title">"Face Attributes:"</p>
                    <div class="badge-list">
                        {faces
                            .into_iter()
                            .map(|attr| view! { <span class="face-badge">{attr.to_string()}</span> })
                            .collect_view()}
                    </div>
                </div>
            })}
        </div>
    }
}

#[component]
fn LabelRow(label: LabelView) -> impl IntoView {
    let tier = label.tier.css_class();
    let percent = label.percent_text();
    let width = label.bar_width();

    view! {
        <li class="label-row">
            <span
                class=format!("label-badge {}", tier)
                title=format!("Confidence: {}", percent)
            >
                {label.icon} " " {label.name}
            </span>
            <div class="bar-track">
                <div
                    class=format!("bar-fill {}", tier)
                    style=format!("width: {}%", width)
                ></div>
            </div>
            <span class="label-percent">{percent}</span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shown(key: &str, result: &Rc<AnalysisResult>) -> Shown {
        Shown {
            display_key: key.to_string(),
            result: Rc::clone(result),
        }
    }

    #[test]
    fn test_shown_compares_result_identity() {
        let payload = json!({"Labels": [{"Name": "Orange", "Confidence": 95}]});
        let first = Rc::new(AnalysisResult::from_value(payload.clone()).unwrap());
        let again = Rc::new(AnalysisResult::from_value(payload).unwrap());

        assert!(shown("a.jpg", &first) == shown("a.jpg", &first));
        assert!(shown("a.jpg", &first) != shown("a.jpg", &again));
        assert!(shown("a.jpg", &first) != shown("b.jpg", &first));
    }
}
