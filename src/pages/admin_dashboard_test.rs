use super::*;

fn message(id: &str, read: bool) -> ContactMessage {
    ContactMessage {
        id: id.to_owned(),
        name: "Visitor".to_owned(),
        email: "v@example.com".to_owned(),
        subject: None,
        message: "hello".to_owned(),
        read,
        created_at: "2024-02-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn unread_count_ignores_read_messages() {
    let messages = [message("a", false), message("b", true), message("c", false)];
    assert_eq!(unread_count(&messages), 2);
}

#[test]
fn unread_count_of_empty_list_is_zero() {
    assert_eq!(unread_count(&[]), 0);
}
