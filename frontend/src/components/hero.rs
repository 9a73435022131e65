//! Logo and page heading

use leptos::*;
use crate::{APP_TITLE, LOGO_PATH};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <img src=LOGO_PATH alt="Logo" class="hero-logo"/>
            <h1>{APP_TITLE}</h1>
        </div>
    }
}
