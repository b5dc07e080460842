use super::*;

#[test]
fn hydrating_session_is_pending_regardless_of_token() {
    assert_eq!(decide(true, false), GuardDecision::Pending);
    assert_eq!(decide(true, true), GuardDecision::Pending);
}

#[test]
fn settled_unauthenticated_session_is_denied() {
    assert_eq!(decide(false, false), GuardDecision::Denied);
}

#[test]
fn settled_authenticated_session_is_granted() {
    assert_eq!(decide(false, true), GuardDecision::Granted);
}
