use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

// =============================================================
// Defaults and hydration window
// =============================================================

#[test]
fn default_state_is_logged_out_and_settled() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn hydrating_state_is_loading_and_unauthenticated() {
    let state = AuthState::hydrating();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Hydration outcomes
// =============================================================

#[test]
fn hydrated_adopts_stored_session() {
    let user_json = serde_json::to_string(&sample_user()).unwrap();
    let state = AuthState::hydrated(Some("tok123".to_owned()), Some(user_json));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok123"));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn hydrated_with_nothing_stored_is_logged_out() {
    let state = AuthState::hydrated(None, None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn hydrated_with_corrupt_user_json_is_logged_out() {
    let state = AuthState::hydrated(Some("tok123".to_owned()), Some("{not json".to_owned()));
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn hydrated_with_empty_token_is_logged_out() {
    let user_json = serde_json::to_string(&sample_user()).unwrap();
    let state = AuthState::hydrated(Some(String::new()), Some(user_json));
    assert!(!state.is_authenticated());
}

#[test]
fn hydrated_with_token_but_no_user_is_logged_out() {
    // The user-iff-token invariant: a dangling token is discarded.
    let state = AuthState::hydrated(Some("tok123".to_owned()), None);
    assert!(!state.is_authenticated());
    assert!(state.token.is_none());
}

// =============================================================
// is_authenticated derivation
// =============================================================

#[test]
fn authenticated_tracks_token_presence() {
    let mut state = AuthState::logged_out();
    assert!(!state.is_authenticated());

    state = AuthState {
        user: Some(sample_user()),
        token: Some("tok123".to_owned()),
        loading: false,
    };
    assert!(state.is_authenticated());

    state = AuthState::logged_out();
    assert!(!state.is_authenticated());
}
