//! Plain-language reading of the exposure figures and score.

use treasury_core::types::Currency;

use crate::exposure::ExposureMetrics;
use crate::scoring::RiskScore;

/// Scores above this trigger the liquidity-fragility recommendation.
pub const FRAGILITY_SCORE: u32 = 30;

/// Three short paragraphs summarising the risk view.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategicNarrative {
    /// Recovery rate and overdue receivables.
    pub liquidity_diagnostic: String,
    /// Largest pending counterparty exposure.
    pub exposure_notice: String,
    /// Overall recommendation from the score.
    pub recommendation: String,
}

impl StrategicNarrative {
    /// Builds the narrative; amounts are formatted in `currency`.
    ///
    /// ```
    /// use treasury_core::types::Currency;
    /// use treasury_risk::exposure::ExposureMetrics;
    /// use treasury_risk::narrative::StrategicNarrative;
    /// use treasury_risk::scoring::RiskScore;
    ///
    /// let metrics = ExposureMetrics { recovery_rate: 87.26, ..Default::default() };
    /// let narrative = StrategicNarrative::compose(&metrics, &RiskScore::default(), Currency::MAD);
    ///
    /// assert!(narrative.liquidity_diagnostic.starts_with("Recovery rate of 87.3%"));
    /// assert!(narrative.recommendation.starts_with("Stability confirmed"));
    /// ```
    pub fn compose(metrics: &ExposureMetrics, score: &RiskScore, currency: Currency) -> Self {
        let liquidity_diagnostic = if metrics.overdue_incoming_sum > 0.0 {
            format!(
                "Recovery rate of {:.1}% calls for immediate action on overdue receivables of {}.",
                metrics.recovery_rate,
                currency.format_amount(metrics.overdue_incoming_sum)
            )
        } else {
            format!(
                "Recovery rate of {:.1}% reflects a healthy collection pipeline with no critical delay detected.",
                metrics.recovery_rate
            )
        };

        let exposure_notice = match metrics
            .top_exposure
            .as_ref()
            .filter(|top| !top.entity_name.is_empty())
        {
            Some(top) => format!(
                "Concentration noted on {} ({:.1}% of capital). Plan a diversification strategy.",
                top.entity_name, top.share_pct
            ),
            None => "Exposure is well spread across counterparties. No systemic dependency detected."
                .to_string(),
        };

        let recommendation = if score.score > FRAGILITY_SCORE {
            "Alert: liquidity fragility detected. Prioritise bank diversification and recovery of unpaid checks."
        } else {
            "Stability confirmed. Risk profile is sound; keep verification processes in place and watch critical thresholds."
        }
        .to_string();

        Self {
            liquidity_diagnostic,
            exposure_notice,
            recommendation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exposure::TopExposure;

    #[test]
    fn test_overdue_receivables_named() {
        let metrics = ExposureMetrics {
            recovery_rate: 40.0,
            overdue_incoming_sum: 1_250.5,
            ..Default::default()
        };
        let narrative = StrategicNarrative::compose(&metrics, &RiskScore::default(), Currency::USD);
        assert_eq!(
            narrative.liquidity_diagnostic,
            "Recovery rate of 40.0% calls for immediate action on overdue receivables of 1250.50 USD."
        );
    }

    #[test]
    fn test_exposure_notice() {
        let metrics = ExposureMetrics {
            top_exposure: Some(TopExposure {
                entity_name: "Orion SARL".to_string(),
                amount: 400.0,
                share_pct: 33.333,
            }),
            ..Default::default()
        };
        let narrative = StrategicNarrative::compose(&metrics, &RiskScore::default(), Currency::MAD);
        assert!(narrative.exposure_notice.contains("Orion SARL (33.3% of capital)"));
    }

    #[test]
    fn test_unnamed_entity_reads_as_spread() {
        let metrics = ExposureMetrics {
            top_exposure: Some(TopExposure {
                entity_name: String::new(),
                amount: 400.0,
                share_pct: 100.0,
            }),
            ..Default::default()
        };
        let narrative = StrategicNarrative::compose(&metrics, &RiskScore::default(), Currency::MAD);
        assert!(narrative.exposure_notice.starts_with("Exposure is well spread"));
    }

    #[test]
    fn test_recommendation_threshold() {
        let metrics = ExposureMetrics::default();
        let at = RiskScore {
            score: 30,
            ..Default::default()
        };
        let above = RiskScore {
            score: 40,
            ..Default::default()
        };
        assert!(StrategicNarrative::compose(&metrics, &at, Currency::MAD)
            .recommendation
            .starts_with("Stability"));
        assert!(StrategicNarrative::compose(&metrics, &above, Currency::MAD)
            .recommendation
            .starts_with("Alert"));
    }
}
