//! Exposure figures shown next to the risk signals.
//!
//! These are presentation metrics, not signals: they do not feed the score.

use chrono::NaiveDateTime;
use std::collections::HashMap;
use treasury_analytics::aggregation::{outgoing_due_within, WindowSummary};
use treasury_core::model::{Check, CheckStatus, CheckType, Settings};

/// The counterparty carrying the largest pending amount.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopExposure {
    /// Issuer or drawer name.
    pub entity_name: String,
    /// Sum of the entity's pending amounts.
    pub amount: f64,
    /// `amount` as a percentage of the grand total of every check.
    pub share_pct: f64,
}

/// Recovery, overdue and concentration figures for one snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureMetrics {
    /// Largest pending exposure; `None` without pending checks.
    pub top_exposure: Option<TopExposure>,
    /// Paid incoming over all incoming, percent, in `[0, 100]`.
    pub recovery_rate: f64,
    /// Pending incoming checks already past due.
    pub overdue_incoming_sum: f64,
    /// Pending outgoing checks inside the configured horizon.
    pub upcoming_outgoing: WindowSummary,
}

impl ExposureMetrics {
    /// Computes every metric relative to `now`.
    pub fn compute(checks: &[Check], settings: &Settings, now: NaiveDateTime) -> Self {
        Self {
            top_exposure: top_exposure(checks),
            recovery_rate: recovery_rate(checks),
            overdue_incoming_sum: overdue_incoming_sum(checks, now),
            upcoming_outgoing: outgoing_due_within(checks, now, settings.outgoing_window_days()),
        }
    }
}

/// Paid incoming amount over total incoming amount, as a percentage.
///
/// Zero when there is no incoming amount.
///
/// ```
/// use treasury_core::model::{Check, CheckStatus, CheckType};
/// use treasury_risk::exposure::recovery_rate;
///
/// let checks = vec![
///     Check::new("a", CheckType::Incoming, CheckStatus::Paid, 300.0),
///     Check::new("b", CheckType::Incoming, CheckStatus::Pending, 100.0),
///     Check::new("c", CheckType::Outgoing, CheckStatus::Paid, 999.0),
/// ];
/// assert_eq!(recovery_rate(&checks), 75.0);
/// assert_eq!(recovery_rate(&[]), 0.0);
/// ```
pub fn recovery_rate(checks: &[Check]) -> f64 {
    let (paid, total) = checks
        .iter()
        .filter(|c| c.check_type == CheckType::Incoming)
        .fold((0.0, 0.0), |(paid, total), c| {
            let amount = c.amount();
            let paid = if c.status == CheckStatus::Paid {
                paid + amount
            } else {
                paid
            };
            (paid, total + amount)
        });

    if total > 0.0 {
        (paid / total * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Sum of pending incoming checks due strictly before `now`.
pub fn overdue_incoming_sum(checks: &[Check], now: NaiveDateTime) -> f64 {
    checks
        .iter()
        .filter(|c| c.check_type == CheckType::Incoming && c.is_overdue(now))
        .map(Check::amount)
        .sum()
}

/// Entity with the largest summed pending amount.
///
/// Ties keep the entity seen first. The share is taken against the grand
/// total of every check, all statuses.
pub fn top_exposure(checks: &[Check]) -> Option<TopExposure> {
    let grand_total: f64 = checks.iter().map(Check::amount).sum();

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entities: Vec<(&str, f64)> = Vec::new();
    for check in checks.iter().filter(|c| c.is_pending()) {
        let slot = *index.entry(check.entity_name.as_str()).or_insert_with(|| {
            entities.push((check.entity_name.as_str(), 0.0));
            entities.len() - 1
        });
        entities[slot].1 += check.amount();
    }

    let mut top: Option<(&str, f64)> = None;
    for (name, amount) in entities {
        if top.map_or(true, |(_, best)| amount > best) {
            top = Some((name, amount));
        }
    }

    top.map(|(name, amount)| TopExposure {
        entity_name: name.to_string(),
        amount,
        share_pct: if grand_total > 0.0 {
            amount / grand_total * 100.0
        } else {
            0.0
        },
    })
}
