//! Single-snapshot evaluation.
//!
//! [`PortfolioEngine::evaluate`] derives every output from one snapshot and
//! one reference instant, so no view can mix figures from different
//! snapshots.

use chrono::NaiveDateTime;
use tracing::debug;
use treasury_analytics::aggregation::{
    group_totals, monthly_series, recent_checks, GroupBy, GroupTotal, MonthStats,
    OperationalWindows, SERIES_MONTHS,
};
use treasury_analytics::summary::PortfolioSummary;
use treasury_core::config::EngineConfig;
use treasury_core::model::{Check, RiskSignal, Settings};
use treasury_core::snapshot::Snapshot;

use crate::detection::RiskDetector;
use crate::exposure::ExposureMetrics;
use crate::narrative::StrategicNarrative;
use crate::scoring::{RiskBand, RiskScore};

/// Default number of checks in the recent-activity list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Everything the dashboards show for one snapshot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioReport {
    /// Reference instant of the evaluation.
    pub generated_at: NaiveDateTime,
    /// Settings the snapshot was evaluated with.
    pub settings: Settings,
    /// Totals, net liquidity and trends.
    pub summary: PortfolioSummary,
    /// Trailing monthly series, oldest first.
    pub monthly: Vec<MonthStats>,
    /// Settlement windows.
    pub windows: OperationalWindows,
    /// Totals per bank.
    pub by_bank: Vec<GroupTotal>,
    /// Totals per entity.
    pub by_entity: Vec<GroupTotal>,
    /// Most recently created checks.
    pub recent: Vec<Check>,
    /// Detected risk signals.
    pub signals: Vec<RiskSignal>,
    /// Recovery and concentration figures.
    pub exposure: ExposureMetrics,
    /// Composite score.
    pub score: RiskScore,
    /// Band of the score.
    pub band: RiskBand,
    /// Plain-language reading.
    pub narrative: StrategicNarrative,
}

/// Evaluates snapshots.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use treasury_core::model::{Check, CheckStatus, CheckType, Settings};
/// use treasury_core::snapshot::Snapshot;
/// use treasury_risk::engine::PortfolioEngine;
///
/// let now = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let snapshot = Snapshot::new(
///     vec![Check::new("a", CheckType::Incoming, CheckStatus::Returned, 300.0)],
///     Settings::default(),
/// );
///
/// let report = PortfolioEngine::default().evaluate(&snapshot, now);
/// assert_eq!(report.score.score, 30);
/// assert_eq!(report.monthly.len(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioEngine {
    recent_limit: usize,
    months: usize,
}

impl Default for PortfolioEngine {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            months: SERIES_MONTHS,
        }
    }
}

impl PortfolioEngine {
    /// Engine with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine sized from the configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::default().with_recent_limit(config.recent_limit)
    }

    /// Sets the length of the recent-activity list.
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Evaluates `snapshot` relative to `now`.
    pub fn evaluate(&self, snapshot: &Snapshot, now: NaiveDateTime) -> PortfolioReport {
        let checks = snapshot.checks.as_slice();
        let settings = &snapshot.settings;

        let signals = RiskDetector::from_settings(settings).detect(checks, now);
        let score = RiskScore::from_signals(&signals);
        let exposure = ExposureMetrics::compute(checks, settings, now);
        let narrative = StrategicNarrative::compose(&exposure, &score, settings.currency);

        debug!(
            checks = checks.len(),
            signals = signals.len(),
            score = score.score,
            %now,
            "snapshot evaluated"
        );

        PortfolioReport {
            generated_at: now,
            settings: settings.clone(),
            summary: PortfolioSummary::compute(checks, now),
            monthly: monthly_series(checks, now, self.months),
            windows: OperationalWindows::compute(checks, settings, now),
            by_bank: group_totals(checks, GroupBy::Bank),
            by_entity: group_totals(checks, GroupBy::Entity),
            recent: recent_checks(checks, self.recent_limit),
            band: score.band(),
            signals,
            exposure,
            score,
            narrative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use treasury_core::model::{CheckStatus, CheckType};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_snapshot() {
        let report = PortfolioEngine::new().evaluate(&Snapshot::default(), now());
        assert!(report.signals.is_empty());
        assert_eq!(report.score.score, 0);
        assert_eq!(report.band, RiskBand::Stable);
        assert_eq!(report.monthly.len(), SERIES_MONTHS);
        assert!(report.recent.is_empty());
        assert!(report.exposure.top_exposure.is_none());
    }

    #[test]
    fn test_recent_limit_from_config() {
        let config = EngineConfig {
            recent_limit: 1,
            ..EngineConfig::default()
        };
        let checks = vec![
            Check::new("a", CheckType::Incoming, CheckStatus::Paid, 1.0)
                .with_created_at("2024-06-01"),
            Check::new("b", CheckType::Incoming, CheckStatus::Paid, 1.0)
                .with_created_at("2024-06-02"),
        ];
        let snapshot = Snapshot::new(checks, Settings::default());
        let report = PortfolioEngine::from_config(&config).evaluate(&snapshot, now());
        assert_eq!(report.recent.len(), 1);
        assert_eq!(report.recent[0].id.as_str(), "b");
    }

    #[test]
    fn test_settings_threshold_applies() {
        let settings = Settings {
            high_value_threshold: 100.0,
            ..Settings::default()
        };
        let checks = vec![Check::new("a", CheckType::Outgoing, CheckStatus::Pending, 150.0)];
        let report = PortfolioEngine::new().evaluate(&Snapshot::new(checks, settings), now());
        assert_eq!(report.score.medium_count, 1);
        assert_eq!(report.score.score, 10);
    }
}
