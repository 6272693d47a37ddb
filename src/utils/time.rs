//! Time utilities: minute arithmetic and report formatting.

use chrono::NaiveTime;

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Render minutes as hours with exactly one decimal, rounding half up.
///
/// Integer arithmetic keeps the output independent of float formatting
/// and locale: `570` -> `9.5`, `59` -> `1.0`, `15` -> `0.3`.
pub fn format_hours(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let tenths = (mins.abs() * 10 + 30) / 60;
    format!("{}{}.{}", sign, tenths / 10, tenths % 10)
}
