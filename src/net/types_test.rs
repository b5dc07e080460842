use super::*;

#[test]
fn project_deserializes_from_api_shape() {
    let raw = r#"{
        "_id": "p1",
        "title": "Portfolio",
        "description": "This site",
        "category": "Web",
        "techStack": ["Rust", "Leptos"],
        "thumbnail": "https://cdn.example.com/t.png",
        "githubUrl": "https://github.com/x/y",
        "featured": true,
        "createdAt": "2024-01-15T10:30:00.000Z"
    }"#;
    let project: Project = serde_json::from_str(raw).unwrap();
    assert_eq!(project.id, "p1");
    assert_eq!(project.tech_stack, vec!["Rust", "Leptos"]);
    assert!(project.live_url.is_none());
    assert!(project.featured);
}

#[test]
fn login_response_flattens_user_fields() {
    let raw = r#"{
        "_id": "u1",
        "name": "Ada",
        "email": "ada@example.com",
        "token": "tok123"
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "tok123");
    assert_eq!(resp.user.id, "u1");
    assert_eq!(resp.user.name, "Ada");
}

#[test]
fn message_read_flag_defaults_to_false() {
    let raw = r#"{
        "_id": "m1",
        "name": "Visitor",
        "email": "v@example.com",
        "message": "Hi there",
        "createdAt": "2024-02-01T00:00:00Z"
    }"#;
    let msg: ContactMessage = serde_json::from_str(raw).unwrap();
    assert!(!msg.read);
    assert!(msg.subject.is_none());
}
