use super::*;

// =============================================================
// Submit gating during multi-file upload
// =============================================================

#[test]
fn submit_blocked_while_any_upload_is_in_flight() {
    // Two files selected: the first completing must not unblock submit.
    let mut in_flight = 2usize;
    assert!(!can_submit(false, in_flight));

    in_flight -= 1;
    assert!(!can_submit(false, in_flight));

    in_flight -= 1;
    assert!(can_submit(false, in_flight));
}

#[test]
fn submit_blocked_while_saving() {
    assert!(!can_submit(true, 0));
    assert!(can_submit(false, 0));
}

// =============================================================
// Image list edits
// =============================================================

#[test]
fn remove_url_at_drops_only_the_requested_index() {
    let mut urls = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    remove_url_at(&mut urls, 1);
    assert_eq!(urls, ["a", "c"]);
}

#[test]
fn remove_url_at_ignores_out_of_range_index() {
    let mut urls = vec!["a".to_owned()];
    remove_url_at(&mut urls, 5);
    assert_eq!(urls, ["a"]);
}
