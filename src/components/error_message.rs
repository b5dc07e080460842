//! Inline error panel with a manual retry action.

use leptos::prelude::*;

/// Error panel shown when a fetch fails; the button re-runs the fetch.
#[component]
pub fn ErrorMessage(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-message" role="alert">
            <p class="error-message__text">{message}</p>
            <button class="btn" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}
