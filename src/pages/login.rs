//! Admin login page.
//!
//! A successful remote login is adopted into the session store and the user
//! is sent to the dashboard. A failure surfaces the server's message inline
//! and leaves the session untouched.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::auth::use_auth;

/// Email/password login form for the admin panel.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    // Already logged in: skip the form.
    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated() {
            navigate("/admin/dashboard", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    let nav_after_login = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = Credentials {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            error.set("Enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = nav_after_login.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&credentials).await {
                    Ok(resp) => {
                        crate::state::auth::login(auth, resp.user, resp.token);
                        navigate("/admin/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Login"</h1>
                <p class="login-card__subtitle">"Sign in to manage your portfolio"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-error">{move || error.get()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="login-card__footer">"Forgot your password? Contact support."</p>
            </div>
        </div>
    }
}
