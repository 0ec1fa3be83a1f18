//! End-to-end scenarios through the engine and the notification feed.

use approx::assert_relative_eq;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use std::collections::HashSet;
use treasury_core::model::{
    Check, CheckId, CheckStatus, CheckType, RiskKind, RiskLevel, Settings,
};
use treasury_core::snapshot::Snapshot;
use treasury_risk::exposure::recovery_rate;
use treasury_risk::notifications::{NotificationCenter, SequentialIdGenerator};
use treasury_risk::{PortfolioEngine, RiskBand, RiskDetector, RiskScore};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn day(offset: i64) -> String {
    (now().date() + Duration::days(offset)).to_string()
}

fn three_check_snapshot() -> Snapshot {
    Snapshot::new(
        vec![
            Check::new("in-1", CheckType::Incoming, CheckStatus::Pending, 1_000.0)
                .with_bank("Atlas")
                .with_entity("Orion")
                .with_due_date(day(1)),
            Check::new("out-1", CheckType::Outgoing, CheckStatus::Pending, 500.0)
                .with_bank("Crescent")
                .with_entity("Delta")
                .with_due_date(day(2)),
            Check::new("ret-1", CheckType::Incoming, CheckStatus::Returned, 300.0)
                .with_bank("Meridian")
                .with_entity("Kappa")
                .with_due_date(day(-1)),
        ],
        Settings {
            high_value_threshold: 10_000.0,
            ..Settings::default()
        },
    )
}

#[test]
fn test_three_check_report() {
    let report = PortfolioEngine::new().evaluate(&three_check_snapshot(), now());

    let totals = &report.summary.totals;
    assert_relative_eq!(totals.by_type.incoming.amount, 1_300.0);
    assert_relative_eq!(totals.by_type.outgoing.amount, 500.0);
    assert_relative_eq!(report.summary.net_liquidity, 800.0);

    let returned: Vec<_> = report
        .signals
        .iter()
        .filter(|s| s.kind == RiskKind::Returned)
        .collect();
    assert_eq!(returned.len(), 1);
    assert_eq!(returned[0].level, RiskLevel::High);
    assert_relative_eq!(returned[0].amount, 300.0);

    // Atlas carries 1000 of 1800, which is over half of the book.
    let concentration: Vec<_> = report
        .signals
        .iter()
        .filter(|s| s.kind == RiskKind::Concentration)
        .collect();
    assert_eq!(concentration.len(), 1);
    assert_eq!(concentration[0].id, "conc-Atlas");
    assert_eq!(report.signals.len(), 2);

    assert_eq!(report.score.high_count, 1);
    assert_eq!(report.score.medium_count, 1);
    assert_eq!(report.score.score, 40);
    assert_eq!(report.band, RiskBand::Elevated);

    assert_eq!(report.windows.outgoing_soon.count(), 1);
    assert_relative_eq!(report.exposure.upcoming_outgoing.total, 500.0);
    assert!(report.windows.incoming_today.is_empty());
    assert_relative_eq!(report.exposure.recovery_rate, 0.0);
}

#[test]
fn test_three_check_report_without_dominant_bank() {
    let mut snapshot = three_check_snapshot();
    snapshot.checks[0].amount = 700.0;

    let report = PortfolioEngine::new().evaluate(&snapshot, now());
    assert_eq!(report.signals.len(), 1);
    assert_eq!(report.signals[0].kind, RiskKind::Returned);
    assert_eq!(report.score.score, 30);
}

#[test]
fn test_three_check_notifications() {
    let snapshot = three_check_snapshot();
    let mut feed = NotificationCenter::with_id_generator(SequentialIdGenerator::new("n"));
    assert_eq!(feed.refresh(&snapshot.checks, now()), 1);
    assert_eq!(feed.refresh(&snapshot.checks, now()), 0);
    assert_eq!(feed.unread_count(), 1);
}

#[test]
fn test_malformed_records_degrade_gracefully() {
    let json = r#"{
        "checks": [
            {"id": "a", "type": "incoming", "status": "pending", "amount": "abc", "due_date": ""},
            {"id": "b", "type": "outgoing", "status": "pending", "amount": null, "due_date": "31/12/2024"},
            {"id": "c", "type": "incoming", "status": "paid", "amount": 120.5, "due_date": "2024-06-03"}
        ]
    }"#;
    let snapshot = Snapshot::from_json_str(json, &Settings::default()).unwrap();
    let report = PortfolioEngine::new().evaluate(&snapshot, now());

    assert_relative_eq!(report.summary.totals.all.amount, 120.5);
    assert!(report
        .signals
        .iter()
        .all(|s| s.kind != RiskKind::Overdue));
    assert_relative_eq!(report.exposure.recovery_rate, 100.0);
    let june = report.monthly.last().unwrap();
    assert_relative_eq!(june.incoming, 120.5);
    assert_relative_eq!(june.outgoing, 0.0);
}

#[test]
fn test_signal_set_for_mixed_portfolio() {
    let checks = vec![
        Check::new("r", CheckType::Incoming, CheckStatus::Returned, 200.0)
            .with_bank("Atlas")
            .with_entity("X"),
        Check::new("p", CheckType::Incoming, CheckStatus::Pending, 60_000.0)
            .with_bank("Atlas")
            .with_entity("X")
            .with_due_date(day(-3)),
        Check::new("q", CheckType::Outgoing, CheckStatus::Paid, 100.0)
            .with_bank("Crescent")
            .with_entity("Y"),
    ];
    let signals = RiskDetector::new(50_000.0).detect(&checks, now());
    let ids: HashSet<&str> = signals.iter().map(|s| s.id.as_str()).collect();
    let expected: HashSet<&str> = ["conc-Atlas", "ret-r", "over-p", "high-p", "cl-p"]
        .into_iter()
        .collect();
    assert_eq!(ids, expected);

    let score = RiskScore::from_signals(&signals);
    assert_eq!(score.high_count, 2);
    assert_eq!(score.medium_count, 3);
    assert_eq!(score.score, 90);
    assert_relative_eq!(
        score.total_risk_amount,
        60_200.0 + 200.0 + 60_000.0 * 3.0
    );
}

fn arb_check() -> impl Strategy<Value = Check> {
    (
        "[a-z]{4}",
        prop_oneof![Just(CheckType::Incoming), Just(CheckType::Outgoing)],
        prop::sample::select(CheckStatus::ALL.to_vec()),
        prop_oneof![9 => -1_000.0f64..200_000.0, 1 => Just(f64::NAN)],
        -30i64..30,
        prop::sample::select(vec!["Atlas", "Crescent", "Delta"]),
        prop::sample::select(vec!["Orion", "Kappa", ""]),
    )
        .prop_map(|(id, t, s, amount, offset, bank, entity)| {
            Check::new(id, t, s, amount)
                .with_bank(bank)
                .with_entity(entity)
                .with_due_date(day(offset))
        })
}

proptest! {
    #[test]
    fn test_score_and_recovery_bounds(checks in prop::collection::vec(arb_check(), 0..40)) {
        let signals = RiskDetector::new(50_000.0).detect(&checks, now());
        let score = RiskScore::from_signals(&signals);
        prop_assert!(score.score <= 100);

        let rate = recovery_rate(&checks);
        prop_assert!((0.0..=100.0).contains(&rate));
    }

    #[test]
    fn test_notification_refresh_idempotent(checks in prop::collection::vec(arb_check(), 0..40)) {
        let mut feed = NotificationCenter::with_id_generator(SequentialIdGenerator::new("n"));
        feed.refresh(&checks, now());
        let before = feed.notifications().to_vec();
        prop_assert_eq!(feed.refresh(&checks, now()), 0);
        prop_assert_eq!(feed.notifications(), before.as_slice());
    }

    #[test]
    fn test_per_check_rules_fire_only_on_pending(checks in prop::collection::vec(arb_check(), 0..40)) {
        let checks: Vec<Check> = checks
            .into_iter()
            .enumerate()
            .map(|(i, c)| Check { id: CheckId::new(format!("c{}", i)), ..c })
            .collect();
        let signals = RiskDetector::new(0.0).detect(&checks, now());
        for signal in &signals {
            let Some(id) = &signal.related_check_id else {
                prop_assert_eq!(signal.kind, RiskKind::Concentration);
                continue;
            };
            let check = checks.iter().find(|c| &c.id == id).unwrap();
            match signal.kind {
                RiskKind::Returned => prop_assert_eq!(check.status, CheckStatus::Returned),
                _ => prop_assert_eq!(check.status, CheckStatus::Pending),
            }
        }
    }
}
