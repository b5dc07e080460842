//! Display formatting for API timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an ISO-8601 timestamp as e.g. "Jan 15, 2024".
///
/// Values that do not look like a date are returned unchanged so a bad
/// timestamp renders as-is instead of breaking the page.
pub fn format_date(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return iso.to_owned();
    };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return iso.to_owned();
    }
    format!("{} {day}, {year}", MONTHS[month - 1])
}
