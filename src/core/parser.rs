//! Line parser: turns raw log lines into start and end events.
//!
//! A recognised line is, after trimming, exactly
//! `Start: D.M.YYYY H:mm` or `End: D.M.YYYY H:mm`. Anything else is skipped.

use crate::errors::{AppError, AppResult};
use crate::models::event::TimestampEvent;
use crate::models::event_type::EventType;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Start|End): ([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4}) ([0-9]{1,2}):([0-9]{2})$")
        .expect("line pattern is a valid regex")
});

/// Start and end events in the order they appeared in the input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedLog {
    pub starts: Vec<TimestampEvent>,
    pub ends: Vec<TimestampEvent>,
}

impl ParsedLog {
    /// Chronologically last start event, regardless of input order.
    pub fn last_start(&self) -> Option<&TimestampEvent> {
        self.starts.iter().max_by_key(|e| e.at)
    }

    /// All events sorted by timestamp; starts come before ends at the same instant.
    pub fn sorted_events(&self) -> Vec<TimestampEvent> {
        let mut all: Vec<TimestampEvent> = self.starts.iter().chain(&self.ends).copied().collect();
        all.sort_by_key(|e| (e.at, e.kind.is_end()));
        all
    }
}

/// Parse every line, keeping recognised events in input order.
///
/// Fails with [`AppError::InvalidTimestamp`] on the first line that has the
/// right shape but names an impossible date or time.
pub fn parse_lines<I, S>(lines: I) -> AppResult<ParsedLog>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut log = ParsedLog::default();
    let mut skipped = 0usize;

    for (idx, line) in lines.into_iter().enumerate() {
        match parse_line(idx + 1, line.as_ref())? {
            Some(ev) if ev.kind.is_start() => log.starts.push(ev),
            Some(ev) => log.ends.push(ev),
            None => skipped += 1,
        }
    }

    debug!(
        starts = log.starts.len(),
        ends = log.ends.len(),
        skipped,
        "parsed log lines"
    );
    Ok(log)
}

/// Parse a single line. `line_no` is 1-based and only used for errors.
pub fn parse_line(line_no: usize, line: &str) -> AppResult<Option<TimestampEvent>> {
    let text = line.trim();
    let Some(caps) = LINE_RE.captures(text) else {
        trace!(line_no, text, "skipping unrecognised line");
        return Ok(None);
    };

    let kind = if &caps[1] == "Start" {
        EventType::Start
    } else {
        EventType::End
    };

    let invalid = || AppError::InvalidTimestamp {
        line: line_no,
        text: text.to_string(),
    };
    let num = |i: usize| caps[i].parse::<u32>().map_err(|_| invalid());

    let (day, month, hour, minute) = (num(2)?, num(3)?, num(5)?, num(6)?);
    let year = caps[4].parse::<i32>().map_err(|_| invalid())?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;

    Ok(Some(TimestampEvent::new(kind, NaiveDateTime::new(date, time))))
}
