use crate::core::calculator::periods::{self, DayPeriods};
use crate::core::calculator::summary;
use crate::core::parser::{self, ParsedLog};
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use tracing::{info, warn};

pub struct Core;

impl Core {
    /// Parse `lines` and return one formatted report line per day,
    /// sorted by date and truncated to `limit` entries.
    pub fn summarize<I, S>(lines: I, limit: Option<usize>) -> AppResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let log = parser::parse_lines(lines)?;
        let days = Self::build_day_periods(&log);
        Ok(Self::build_summaries(&days, limit)
            .iter()
            .map(ToString::to_string)
            .collect())
    }

    /// Group the parsed events by day and pair them into working periods.
    pub fn build_day_periods(log: &ParsedLog) -> DayPeriods {
        let Some(last_start) = log.last_start() else {
            warn!("no start events found, nothing to report");
            return DayPeriods::new();
        };

        let starts = periods::group_by_day(&log.starts);
        let ends = periods::group_by_day(&log.ends);
        let days = periods::build_periods(&starts, &ends, Some(last_start.date()));

        info!(days = days.len(), "built working periods");
        days
    }

    pub fn build_summaries(days: &DayPeriods, limit: Option<usize>) -> Vec<DaySummary> {
        summary::summarize_days(days, limit)
    }
}
