use super::*;

#[test]
fn slugify_lowercases_and_hyphenates() {
    assert_eq!(slugify("Hello World"), "hello-world");
}

#[test]
fn slugify_collapses_punctuation_runs() {
    assert_eq!(slugify("Rust & WASM: a field report!"), "rust-wasm-a-field-report");
}

#[test]
fn slugify_never_starts_or_ends_with_hyphen() {
    assert_eq!(slugify("  --Edge case--  "), "edge-case");
}

#[test]
fn slugify_of_symbols_only_is_empty() {
    assert_eq!(slugify("!!!"), "");
}
