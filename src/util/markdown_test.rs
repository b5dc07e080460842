use super::*;

#[test]
fn renders_basic_markdown() {
    let out = render("# Title\n\nSome *emphasis*.");
    assert!(out.contains("<h1>Title</h1>"));
    assert!(out.contains("<em>emphasis</em>"));
}

#[test]
fn renders_strikethrough_extension() {
    let out = render("~~gone~~");
    assert!(out.contains("<del>gone</del>"));
}

#[test]
fn empty_source_renders_empty() {
    assert_eq!(render(""), "");
}
