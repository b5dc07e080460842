use super::*;

fn message(id: &str) -> ContactMessage {
    ContactMessage {
        id: id.to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: None,
        message: "Hello".to_owned(),
        read: false,
        created_at: "2024-01-15T00:00:00.000Z".to_owned(),
    }
}

// =============================================================
// Active-row selection
// =============================================================

#[test]
fn selected_message_matches_its_own_row() {
    let open = message("m1");
    assert!(is_selected(Some(&open), "m1"));
    assert!(!is_selected(Some(&open), "m2"));
}

#[test]
fn no_row_is_active_without_a_selection() {
    assert!(!is_selected(None, "m1"));
}
