// src/export/model.rs

use crate::models::day_summary::DaySummary;
use serde::Serialize;

/// Flat record used for JSON and CSV output.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SummaryExport {
    pub date: String,
    pub start: String,
    pub end: String,
    pub minutes: i64,
    pub hours: String,
}

impl From<&DaySummary> for SummaryExport {
    fn from(s: &DaySummary) -> Self {
        Self {
            date: s.date_str(),
            start: s.start_str(),
            end: s.end_str(),
            minutes: s.total_minutes,
            hours: s.hours_str(),
        }
    }
}
