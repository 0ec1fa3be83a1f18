//! Composite risk score.
//!
//! Linear and capped: each high signal weighs 30 points, each medium signal
//! 10, and the result never exceeds 100.

use std::fmt;
use treasury_core::model::{RiskLevel, RiskSignal};

/// Points per high-level signal.
pub const HIGH_WEIGHT: u32 = 30;

/// Points per medium-level signal.
pub const MEDIUM_WEIGHT: u32 = 10;

/// Upper bound of the score.
pub const MAX_SCORE: u32 = 100;

/// Score and signal counts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskScore {
    /// Signals at [`RiskLevel::High`].
    pub high_count: usize,
    /// Signals at [`RiskLevel::Medium`].
    pub medium_count: usize,
    /// Weighted score in `[0, 100]`.
    pub score: u32,
    /// Sum of signal amounts.
    ///
    /// A check raising two signals is counted twice: this measures exposure
    /// to risk events, not distinct capital.
    pub total_risk_amount: f64,
}

impl RiskScore {
    /// Scores a signal list.
    ///
    /// ```
    /// use treasury_core::model::{Check, CheckStatus, CheckType, RiskKind, RiskSignal};
    /// use treasury_risk::scoring::RiskScore;
    ///
    /// let check = Check::new("a", CheckType::Incoming, CheckStatus::Returned, 300.0);
    /// let signals = vec![
    ///     RiskSignal::for_check(RiskKind::Returned, &check),
    ///     RiskSignal::concentration("Atlas", 1_000.0),
    /// ];
    ///
    /// let score = RiskScore::from_signals(&signals);
    /// assert_eq!(score.score, 40);
    /// assert_eq!(score.total_risk_amount, 1_300.0);
    /// ```
    pub fn from_signals(signals: &[RiskSignal]) -> Self {
        let high_count = signals.iter().filter(|s| s.level == RiskLevel::High).count();
        let medium_count = signals
            .iter()
            .filter(|s| s.level == RiskLevel::Medium)
            .count();
        let total_risk_amount = signals.iter().map(|s| s.amount).sum();

        let points = weighted(high_count, HIGH_WEIGHT)
            .saturating_add(weighted(medium_count, MEDIUM_WEIGHT));
        Self {
            high_count,
            medium_count,
            score: points.min(MAX_SCORE),
            total_risk_amount,
        }
    }

    /// Band for this score.
    pub fn band(&self) -> RiskBand {
        RiskBand::from_score(self.score)
    }
}

fn weighted(count: usize, weight: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(weight)
}

/// Qualitative reading of the score.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskBand {
    /// Score of 20 or less.
    Stable,
    /// Score above 20.
    Elevated,
    /// Score above 50.
    Critical,
}

impl RiskBand {
    /// Band for a score.
    pub fn from_score(score: u32) -> Self {
        if score > 50 {
            RiskBand::Critical
        } else if score > 20 {
            RiskBand::Elevated
        } else {
            RiskBand::Stable
        }
    }

    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Stable => "stable",
            RiskBand::Elevated => "elevated",
            RiskBand::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
