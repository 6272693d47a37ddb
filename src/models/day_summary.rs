use crate::utils::time::{format_hhmm, format_hours};
use chrono::{NaiveDate, NaiveTime};
use std::fmt;

/// Per-day aggregate of all working periods filed under `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub first_start: NaiveTime,
    pub last_end: NaiveTime,
    pub total_minutes: i64,
}

impl DaySummary {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        format_hhmm(self.first_start)
    }

    pub fn end_str(&self) -> String {
        format_hhmm(self.last_end)
    }

    /// Total hours with one decimal, e.g. `9.5`.
    pub fn hours_str(&self) -> String {
        format_hours(self.total_minutes)
    }
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Beginn: {} Ende: {} Dauer: {}h",
            self.date_str(),
            self.start_str(),
            self.end_str(),
            self.hours_str()
        )
    }
}
