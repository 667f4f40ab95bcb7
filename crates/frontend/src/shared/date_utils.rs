/// Calendar helpers for month-scoped views
///
/// All dates exchanged with the backend are ISO strings ("YYYY-MM-DD"); these
/// helpers generate and format them consistently.
use chrono::{Datelike, NaiveDate};

/// Number of calendar days in `month` of `year`.
///
/// Panics when `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    assert!((1..=12).contains(&month), "month out of range: {month}");
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Every day of the month as a zero-padded ISO date.
/// Example: (2021, 2) -> ["2021-02-01", ..., "2021-02-28"]
pub fn month_columns(year: i32, month: u32) -> Vec<String> {
    (1..=days_in_month(year, month))
        .map(|day| format!("{}-{:02}-{:02}", year, month, day))
        .collect()
}

/// Short label for chart axes and tooltips.
/// Example: "2021-01-05" -> "Jan 5"
pub fn format_chart_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => date_str.to_string(),
    }
}
