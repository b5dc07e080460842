use super::*;

// =============================================================
// error_message extraction
// =============================================================

#[test]
fn prefers_message_field_from_failure_body() {
    let body = r#"{"message": "Invalid credentials"}"#;
    assert_eq!(error_message(401, body), "Invalid credentials");
}

#[test]
fn falls_back_to_status_line_for_non_json_body() {
    assert_eq!(error_message(502, "<html>Bad Gateway</html>"), "request failed: 502");
}

#[test]
fn falls_back_when_json_body_lacks_message() {
    assert_eq!(error_message(500, r#"{"error": "boom"}"#), "request failed: 500");
}

#[test]
fn falls_back_for_empty_body() {
    assert_eq!(error_message(404, ""), "request failed: 404");
}
