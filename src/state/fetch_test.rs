use super::*;

// =============================================================
// Initial state
// =============================================================

#[test]
fn initial_state_is_loading_with_nothing_resolved() {
    let state = FetchState::<Vec<String>>::default();
    assert!(state.loading);
    assert!(state.data.is_none());
    assert!(state.error.is_none());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn resolve_stores_data_and_stops_loading() {
    let mut state = FetchState::default();
    state.begin();
    state.resolve(vec![1, 2, 3]);
    assert!(!state.loading);
    assert_eq!(state.data.as_deref(), Some(&[1, 2, 3][..]));
    assert!(state.error.is_none());
}

#[test]
fn reject_stores_message_and_stops_loading() {
    let mut state = FetchState::<()>::default();
    state.begin();
    state.reject("X");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("X"));
}

#[test]
fn reject_keeps_previously_resolved_data() {
    let mut state = FetchState::default();
    state.resolve(vec!["a".to_owned()]);
    state.begin();
    state.reject("network down");
    assert_eq!(state.data.as_ref().map(Vec::len), Some(1));
    assert_eq!(state.error.as_deref(), Some("network down"));
}

#[test]
fn begin_clears_stale_error_but_keeps_data() {
    let mut state = FetchState::default();
    state.resolve(7);
    state.reject("boom");
    state.begin();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.data, Some(7));
}

// =============================================================
// Completion application
// =============================================================

#[test]
fn apply_completion_routes_ok_and_err() {
    let mut state = FetchState::default();
    apply_completion(&mut state, Ok(42));
    assert_eq!(state.data, Some(42));

    state.begin();
    apply_completion(&mut state, Err("Invalid credentials".to_owned()));
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    // The earlier value survives the failed refresh.
    assert_eq!(state.data, Some(42));
}

#[test]
fn only_the_live_generation_tag_applies() {
    assert!(completion_applies(2, Some(2)));
    // Superseded by a newer invocation.
    assert!(!completion_applies(1, Some(2)));
    // Owning scope disposed before the result arrived.
    assert!(!completion_applies(1, None));
}

#[test]
fn stale_completion_is_discarded_and_leaves_state_untouched() {
    // First fetch is still in flight when a refetch bumps the generation;
    // the refetch resolves first, then the first fetch's result arrives.
    let mut state = FetchState::default();
    let current = 2u64;

    state.begin();
    state.begin();
    apply_completion(&mut state, Ok("newer"));

    let stale = Ok("older");
    if completion_applies(1, Some(current)) {
        apply_completion(&mut state, stale);
    }
    assert_eq!(state.data, Some("newer"));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn interleaved_cycles_leave_last_result_visible() {
    // refetch during an in-flight fetch: whichever completion is applied
    // last determines the final state.
    let mut state = FetchState::default();
    state.begin();
    state.begin();
    apply_completion(&mut state, Ok("second"));
    assert!(!state.loading);
    assert_eq!(state.data, Some("second"));
    assert!(state.error.is_none());
}
