//! Auth-session state for the admin user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is logged in". The session is held in an
//! `RwSignal<AuthState>` provided via context; all mutations go through
//! `login`/`logout` so each change is one atomic signal replacement. The
//! route guard and sidebar read it, the login page writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "portfolio_token";
/// localStorage key holding the serialized user profile.
pub const USER_KEY: &str = "portfolio_user";

/// Authentication state tracking the current user, token, and hydration.
///
/// `loading` is true only between process start and the one-time restore
/// from durable storage; it never becomes true again afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the persisted session has been restored.
    pub fn hydrating() -> Self {
        Self { user: None, token: None, loading: true }
    }

    /// Settled logged-out state.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Resolve a raw storage read into a settled session.
    ///
    /// A session is adopted only when both a non-empty token and a parsable
    /// user record are present; anything missing or malformed resolves to
    /// logged-out. Storage faults therefore never surface to the user.
    pub fn hydrated(token: Option<String>, user_json: Option<String>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        let user = user_json.and_then(|raw| serde_json::from_str::<User>(&raw).ok());
        match (token, user) {
            (Some(token), Some(user)) => Self {
                user: Some(user),
                token: Some(token),
                loading: false,
            },
            _ => Self::logged_out(),
        }
    }

    /// True iff the current session holds a non-empty token.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Access the session signal provided by [`crate::app::App`].
pub fn use_auth() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}

/// One-time restore of the persisted session at startup.
///
/// Ends the hydration window unconditionally: readers observe
/// `loading == false` after this returns, logged in or not.
pub fn hydrate_session(auth: RwSignal<AuthState>) {
    let token = storage::get_string(TOKEN_KEY);
    let user_json = storage::get_string(USER_KEY);
    auth.set(AuthState::hydrated(token, user_json));
}

/// Adopt a freshly authenticated session.
///
/// Persists both keys first, then replaces the in-memory state in a single
/// `set` so no reader can observe a half-written session.
pub fn login(auth: RwSignal<AuthState>, user: User, token: String) {
    storage::set_string(TOKEN_KEY, &token);
    storage::save_json(USER_KEY, &user);
    auth.set(AuthState {
        user: Some(user),
        token: Some(token),
        loading: false,
    });
}

/// Clear the session in memory and in durable storage. Idempotent.
pub fn logout(auth: RwSignal<AuthState>) {
    storage::remove(TOKEN_KEY);
    storage::remove(USER_KEY);
    auth.set(AuthState::logged_out());
}
