//! Reduction of per-day working periods into day summaries.

use super::periods::DayPeriods;
use crate::models::day_summary::DaySummary;
use crate::models::working_period::WorkingPeriod;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Summarise one day. Returns `None` for a day without periods.
pub fn summarize_day(date: NaiveDate, periods: &BTreeSet<WorkingPeriod>) -> Option<DaySummary> {
    let first_start = periods.iter().map(|p| p.start).min()?;
    let last_end = periods.iter().map(|p| p.end).max()?;
    let total_minutes = periods.iter().map(WorkingPeriod::minutes).sum();

    Some(DaySummary {
        date,
        first_start,
        last_end,
        total_minutes,
    })
}

/// Summaries sorted by date ascending, at most `limit` of them.
pub fn summarize_days(periods: &DayPeriods, limit: Option<usize>) -> Vec<DaySummary> {
    periods
        .iter()
        .filter_map(|(date, day)| summarize_day(*date, day))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}
