//! Calendar-month bucketing on due dates.
//!
//! Buckets are keyed by `(year, month)`. Labels are presentation only and
//! never used for lookup, so January 2023 and January 2024 never collide.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::fmt;
use tracing::trace;
use treasury_core::config::MonthLabels;
use treasury_core::model::{Check, CheckType};

/// Length of the rolling chart series.
pub const SERIES_MONTHS: usize = 12;

const FRENCH_LABELS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Août", "Sep", "Oct", "Nov", "Déc",
];

const ENGLISH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month.
///
/// # Examples
///
/// ```
/// use treasury_analytics::aggregation::MonthKey;
/// use treasury_core::config::MonthLabels;
///
/// let jan = MonthKey::new(2024, 1);
/// assert_eq!(jan.previous(), MonthKey::new(2023, 12));
/// assert_eq!(jan.label(MonthLabels::French), "Jan");
/// assert_eq!(MonthKey::new(2024, 2).label(MonthLabels::French), "Fév");
/// assert_eq!(jan.to_string(), "2024-01");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthKey {
    /// Calendar year.
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
}

impl MonthKey {
    /// Creates a key; `month` is expected in 1-12.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Month containing the given date.
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// The calendar month before this one.
    pub fn previous(&self) -> Self {
        if self.month <= 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// The `count` months ending with this one, oldest first.
    pub fn trailing(&self, count: usize) -> Vec<MonthKey> {
        let mut keys = Vec::with_capacity(count);
        let mut key = *self;
        for _ in 0..count {
            keys.push(key);
            key = key.previous();
        }
        keys.reverse();
        keys
    }

    /// Localised month abbreviation.
    pub fn label(&self, labels: MonthLabels) -> &'static str {
        let index = (self.month.clamp(1, 12) - 1) as usize;
        match labels {
            MonthLabels::French => FRENCH_LABELS[index],
            MonthLabels::English => ENGLISH_LABELS[index],
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Incoming and outgoing sums for checks due in one month.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthStats {
    /// The month.
    pub key: MonthKey,
    /// Sum of incoming amounts due in the month.
    pub incoming: f64,
    /// Sum of outgoing amounts due in the month.
    pub outgoing: f64,
}

impl MonthStats {
    /// Empty stats for a month.
    pub fn empty(key: MonthKey) -> Self {
        Self {
            key,
            incoming: 0.0,
            outgoing: 0.0,
        }
    }

    /// Incoming minus outgoing.
    pub fn net(&self) -> f64 {
        self.incoming - self.outgoing
    }

    fn push(&mut self, check: &Check) {
        match check.check_type {
            CheckType::Incoming => self.incoming += check.amount(),
            CheckType::Outgoing => self.outgoing += check.amount(),
        }
    }
}

fn due_month(check: &Check) -> Option<MonthKey> {
    let month = check.due_instant().map(|due| MonthKey::of(due.date()));
    if month.is_none() {
        trace!(check = %check.id, due_date = %check.due_date, "excluded from monthly buckets");
    }
    month
}

/// Stats for a single month, all statuses included.
pub fn month_stats(checks: &[Check], key: MonthKey) -> MonthStats {
    checks
        .iter()
        .filter(|check| due_month(check) == Some(key))
        .fold(MonthStats::empty(key), |mut stats, check| {
            stats.push(check);
            stats
        })
}

/// Rolling series of `months` calendar months ending with the month of `now`.
///
/// Chronological, oldest first. Months without checks are present with
/// zero sums. Checks with an unparseable due date are left out.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use treasury_analytics::aggregation::{monthly_series, MonthKey};
/// use treasury_core::model::{Check, CheckStatus, CheckType};
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let checks = vec![
///     Check::new("a", CheckType::Incoming, CheckStatus::Paid, 80.0).with_due_date("2024-03-02"),
///     Check::new("b", CheckType::Outgoing, CheckStatus::Paid, 30.0).with_due_date("2023-04-30"),
///     Check::new("c", CheckType::Outgoing, CheckStatus::Paid, 99.0).with_due_date("2023-03-31"),
/// ];
///
/// let series = monthly_series(&checks, now, 12);
/// assert_eq!(series.len(), 12);
/// assert_eq!(series[0].key, MonthKey::new(2023, 4));
/// assert_eq!(series[0].outgoing, 30.0);
/// assert_eq!(series[11].incoming, 80.0);
/// ```
pub fn monthly_series(checks: &[Check], now: NaiveDateTime, months: usize) -> Vec<MonthStats> {
    let keys = MonthKey::of(now.date()).trailing(months);

    let mut buckets: HashMap<MonthKey, MonthStats> = keys
        .iter()
        .map(|key| (*key, MonthStats::empty(*key)))
        .collect();

    for check in checks {
        if let Some(stats) = due_month(check).and_then(|key| buckets.get_mut(&key)) {
            stats.push(check);
        }
    }

    keys.iter()
        .map(|key| {
            buckets
                .get(key)
                .copied()
                .unwrap_or_else(|| MonthStats::empty(*key))
        })
        .collect()
}
