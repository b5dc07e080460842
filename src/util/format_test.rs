use super::*;

#[test]
fn formats_full_timestamp() {
    assert_eq!(format_date("2024-01-15T10:30:00.000Z"), "Jan 15, 2024");
}

#[test]
fn formats_bare_date() {
    assert_eq!(format_date("2023-12-01"), "Dec 1, 2023");
}

#[test]
fn strips_leading_zero_from_day() {
    assert_eq!(format_date("2024-06-05T00:00:00Z"), "Jun 5, 2024");
}

#[test]
fn returns_garbage_unchanged() {
    assert_eq!(format_date("not a date"), "not a date");
    assert_eq!(format_date(""), "");
}

#[test]
fn rejects_out_of_range_month() {
    assert_eq!(format_date("2024-13-01"), "2024-13-01");
}
