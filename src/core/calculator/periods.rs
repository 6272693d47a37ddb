//! Pairing of start and end times into per-day working periods.

use crate::models::event::TimestampEvent;
use crate::models::working_period::WorkingPeriod;
use chrono::{NaiveDate, NaiveTime};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// Times of one event kind, grouped by date and sorted ascending per date.
pub type DayTimes = BTreeMap<NaiveDate, Vec<NaiveTime>>;

/// Working periods filed under the day that owns them.
pub type DayPeriods = BTreeMap<NaiveDate, BTreeSet<WorkingPeriod>>;

pub fn group_by_day(events: &[TimestampEvent]) -> DayTimes {
    let mut by_day = DayTimes::new();
    for ev in events {
        by_day.entry(ev.date()).or_default().push(ev.time());
    }
    for times in by_day.values_mut() {
        times.sort();
    }
    by_day
}

/// Build the working periods of every day.
///
/// `last_start` is the date of the chronologically last start event of the
/// whole input. Ends logged on the day after it belong to the final
/// overnight shift and get filed under that day.
///
/// Only the first end of a day is compared with the first start of the same
/// day, so at most one carry-over from the previous night is recognised per
/// day.
pub fn build_periods(starts: &DayTimes, ends: &DayTimes, last_start: Option<NaiveDate>) -> DayPeriods {
    let mut periods = DayPeriods::new();

    for (date, day_starts) in starts {
        let day_ends = ends.get(date).map(Vec::as_slice).unwrap_or_default();
        let day = periods.entry(*date).or_default();

        // -----------------------------
        // Pair each start with the next later end
        // -----------------------------
        for &start in day_starts {
            let period = match day_ends.iter().find(|&&end| end > start) {
                Some(&end) => WorkingPeriod::closed(start, end),
                None => WorkingPeriod::open(start),
            };
            trace!(%date, %period, "paired start");
            day.insert(period);
        }

        // -----------------------------
        // Morning part of last night's shift
        // -----------------------------
        if let (Some(&first_start), Some(&first_end)) = (day_starts.first(), day_ends.first())
            && first_end < first_start
        {
            debug!(%date, end = %first_end, "carry-over from previous day");
            day.insert(WorkingPeriod::carry_over(first_end));
        }
    }

    // -----------------------------
    // Closing half of the final overnight shift
    // -----------------------------
    if let Some(next) = last_start.and_then(|d| d.succ_opt())
        && let Some(&first_end) = ends.get(&next).and_then(|times| times.first())
    {
        debug!(date = %next, end = %first_end, "carry-over after last start");
        periods
            .entry(next)
            .or_default()
            .insert(WorkingPeriod::carry_over(first_end));
    }

    periods
}
