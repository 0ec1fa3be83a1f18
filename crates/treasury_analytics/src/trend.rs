//! Period-over-period trend percentages.
//!
//! Compares the calendar month containing `now` with the calendar month
//! before it, on due dates, all statuses included.

use chrono::NaiveDateTime;
use treasury_core::model::Check;

use crate::aggregation::{month_stats, MonthKey, MonthStats};

/// Whole-number percentage change from `previous` to `current`.
///
/// A zero baseline yields `100` when the current value is positive and `0`
/// otherwise, so the result is always finite. Other results round half away
/// from zero.
///
/// # Examples
///
/// ```
/// use treasury_analytics::trend;
///
/// assert_eq!(trend(0.0, 0.0), 0);
/// assert_eq!(trend(100.0, 0.0), 100);
/// assert_eq!(trend(150.0, 100.0), 50);
/// assert_eq!(trend(50.0, 100.0), -50);
/// ```
pub fn trend(current: f64, previous: f64) -> i64 {
    if previous == 0.0 {
        return if current > 0.0 { 100 } else { 0 };
    }
    let pct = ((current - previous) / previous) * 100.0;
    if pct.is_finite() {
        pct.round() as i64
    } else {
        0
    }
}

/// Month-over-month trend for incoming, outgoing and net flows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendSummary {
    /// Incoming sum trend, percent.
    pub incoming: i64,
    /// Outgoing sum trend, percent.
    pub outgoing: i64,
    /// Net flow trend, percent.
    pub net: i64,
}

impl TrendSummary {
    /// Trend between two months of stats.
    pub fn between(current: &MonthStats, previous: &MonthStats) -> Self {
        Self {
            incoming: trend(current.incoming, previous.incoming),
            outgoing: trend(current.outgoing, previous.outgoing),
            net: trend(current.net(), previous.net()),
        }
    }

    /// Current calendar month against the previous one.
    pub fn month_over_month(checks: &[Check], now: NaiveDateTime) -> Self {
        let current = MonthKey::of(now.date());
        Self::between(
            &month_stats(checks, current),
            &month_stats(checks, current.previous()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use treasury_core::model::{CheckStatus, CheckType};

    #[test]
    fn test_zero_baseline() {
        assert_eq!(trend(0.0, 0.0), 0);
        assert_eq!(trend(100.0, 0.0), 100);
        assert_eq!(trend(-20.0, 0.0), 0);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(trend(150.0, 100.0), 50);
        assert_eq!(trend(50.0, 100.0), -50);
        assert_eq!(trend(225.0, 200.0), 13);
        assert_eq!(trend(125.0, 200.0), -38);
        assert_eq!(trend(1.0, 3.0), -67);
    }

    #[test]
    fn test_negative_baseline_keeps_formula() {
        // Net flows can be negative; the raw formula applies unchanged.
        assert_eq!(trend(-50.0, -100.0), -50);
    }

    #[test]
    fn test_month_over_month_crosses_year() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let checks = vec![
            Check::new("a", CheckType::Incoming, CheckStatus::Paid, 300.0)
                .with_due_date("2024-01-05"),
            Check::new("b", CheckType::Incoming, CheckStatus::Paid, 200.0)
                .with_due_date("2023-12-20"),
            Check::new("c", CheckType::Outgoing, CheckStatus::Pending, 100.0)
                .with_due_date("2023-12-01"),
        ];
        let summary = TrendSummary::month_over_month(&checks, now);
        assert_eq!(summary.incoming, 50);
        assert_eq!(summary.outgoing, -100);
        assert_eq!(summary.net, 200);
    }

    proptest! {
        #[test]
        fn test_trend_never_panics(current in -1e12f64..1e12, previous in -1e12f64..1e12) {
            let _ = trend(current, previous);
        }

        #[test]
        fn test_growth_sign(previous in 1.0f64..1e9, factor in 1.01f64..10.0) {
            prop_assert!(trend(previous * factor, previous) >= 1);
        }
    }
}
