//! Route guard gating the admin subtree on session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! A UX-only guard: it redirects unauthenticated visitors to the login page
//! but does not enforce security; the API still validates the bearer token
//! on every request.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loader::Loader;
use crate::state::auth::use_auth;

/// What the guard should do for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still hydrating: show a loading indicator, no navigation.
    Pending,
    /// Settled and unauthenticated: replace-navigate to the login page.
    Denied,
    /// Settled and authenticated: render the protected subtree.
    Granted,
}

/// Pure decision table driven by the auth gateway's derived state.
pub fn decide(loading: bool, authenticated: bool) -> GuardDecision {
    if loading {
        GuardDecision::Pending
    } else if authenticated {
        GuardDecision::Granted
    } else {
        GuardDecision::Denied
    }
}

/// Renders `children` only for an authenticated session.
///
/// The redirect uses replace semantics so the guarded page never enters the
/// history stack; back-navigation from the login page skips it.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if decide(state.loading, state.is_authenticated()) == GuardDecision::Denied {
            navigate(
                "/admin/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || {
                let state = auth.get();
                decide(state.loading, state.is_authenticated()) == GuardDecision::Granted
            }
            fallback=|| view! { <Loader full_screen=true/> }
        >
            {children()}
        </Show>
    }
}
