use super::event_type::EventType;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::fmt;

/// A single `Start:` or `End:` line from the log.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TimestampEvent {
    pub at: NaiveDateTime,
    pub kind: EventType,
}

impl TimestampEvent {
    pub fn new(kind: EventType, at: NaiveDateTime) -> Self {
        Self { at, kind }
    }

    pub fn date(&self) -> NaiveDate {
        self.at.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.at.time()
    }

    pub fn date_str(&self) -> String {
        self.at.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.at.format("%H:%M").to_string()
    }
}

impl fmt::Display for TimestampEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date_str(), self.time_str(), self.kind)
    }
}
