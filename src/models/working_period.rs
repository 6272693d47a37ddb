use chrono::NaiveTime;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// How the bounds of a [`WorkingPeriod`] were obtained.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// Real start paired with a real end on the same day.
    Closed,
    /// Real start without a later end; the end is [`WorkingPeriod::DAY_END`].
    Open,
    /// Tail of a shift begun the day before; the start is [`WorkingPeriod::DAY_START`].
    CarryOver,
}

impl PeriodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Closed => "closed",
            PeriodKind::Open => "open",
            PeriodKind::CarryOver => "carry-over",
        }
    }
}

/// One interval of work, filed under the calendar day that owns it.
///
/// Equality and ordering only look at the bounds, so a day's
/// `BTreeSet<WorkingPeriod>` never counts the same interval twice.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorkingPeriod {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub kind: PeriodKind,
}

impl WorkingPeriod {
    /// Midnight: stands in for a start logged on the previous day.
    pub const DAY_START: NaiveTime = NaiveTime::MIN;

    /// Last representable instant of a day: stands in for a missing end.
    /// Rendered as `23:59`.
    pub const DAY_END: NaiveTime = match NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999) {
        Some(t) => t,
        None => NaiveTime::MIN,
    };

    pub fn closed(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end,
            kind: PeriodKind::Closed,
        }
    }

    pub fn open(start: NaiveTime) -> Self {
        Self {
            start,
            end: Self::DAY_END,
            kind: PeriodKind::Open,
        }
    }

    pub fn carry_over(end: NaiveTime) -> Self {
        Self {
            start: Self::DAY_START,
            end,
            kind: PeriodKind::CarryOver,
        }
    }

    /// Whole minutes between start and end, truncated.
    pub fn minutes(&self) -> i64 {
        crate::utils::time::minutes_between(self.start, self.end)
    }
}

impl PartialEq for WorkingPeriod {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WorkingPeriod {}

impl PartialOrd for WorkingPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WorkingPeriod {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start, self.end).cmp(&(other.start, other.end))
    }
}

impl fmt::Display for WorkingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.kind.as_str()
        )
    }
}
