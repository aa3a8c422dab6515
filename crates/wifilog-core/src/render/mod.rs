//! Pure formatting of connection records into display rows.
//!
//! No side effects and no mutation: every function is a deterministic
//! transform of its input, so a display surface can recompute its rows
//! from the latest log at any time.

use crate::records::types::{ConnectionLog, ConnectionRecord};
use chrono::{Datelike, NaiveDate};

/// Format a `%Y-%m-%d` date as an upper-cased `<weekday> <month> <ordinal
/// day>` label, e.g. `2024-03-05` -> `TUE MAR 5TH`.
///
/// A date that does not parse falls back to the raw input upper-cased;
/// one bad record must not blank the whole list.
pub fn format_date_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!(
            "{} {} {}{}",
            parsed.format("%a"),
            parsed.format("%b"),
            parsed.day(),
            ordinal_suffix(parsed.day())
        )
        .to_uppercase(),
        Err(_) => date.to_uppercase(),
    }
}

/// `08:15` + `17:42` -> `08:15 TO 17:42`.
pub fn format_time_range(earliest: &str, latest: &str) -> String {
    format!("{} TO {}", earliest, latest)
}

/// One display row: date label and time range.
pub fn format_row(record: &ConnectionRecord) -> String {
    format!(
        "{} — {}",
        format_date_label(&record.date),
        format_time_range(&record.earliest, &record.latest)
    )
}

/// All display rows, one per record, in input order.
///
/// No sorting, filtering, or de-duplication; row identity is positional.
pub fn render_rows(log: &ConnectionLog) -> Vec<String> {
    log.iter().map(format_row).collect()
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
