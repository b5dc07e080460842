//! Spinner shown while remote data or the session is loading.

use leptos::prelude::*;

/// Loading indicator; `full_screen` centers it over the whole viewport.
#[component]
pub fn Loader(#[prop(optional)] full_screen: bool) -> impl IntoView {
    let class = if full_screen {
        "loader loader--full-screen"
    } else {
        "loader"
    };
    view! {
        <div class=class role="status" aria-label="Loading">
            <div class="loader__spinner"></div>
        </div>
    }
}
