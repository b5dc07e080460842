use super::*;

#[test]
fn split_csv_trims_and_drops_empties() {
    assert_eq!(
        split_csv(" Rust, Leptos , ,Postgres,"),
        vec!["Rust", "Leptos", "Postgres"]
    );
}

#[test]
fn split_csv_of_empty_string_is_empty() {
    assert!(split_csv("").is_empty());
    assert!(split_csv(" , ,").is_empty());
}
