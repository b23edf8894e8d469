use bodyline::core::rate;
use bodyline::models::BodyMetric;
use bodyline::models::config::Thresholds;
use bodyline::models::rate::RateTier;

fn defaults() -> Thresholds {
    Thresholds::default()
}

// ─── weight ──────────────────────────────────────────────────────────────────

#[test]
fn test_weight_tiers_with_default_multipliers() {
    let t = defaults();
    assert_eq!(rate::classify(-0.4, BodyMetric::Weight, &t), RateTier::Normal);
    assert_eq!(rate::classify(-0.7, BodyMetric::Weight, &t), RateTier::Caution);
    assert_eq!(rate::classify(-1.0, BodyMetric::Weight, &t), RateTier::Extreme);
}

#[test]
fn test_weight_boundaries_are_strict() {
    let t = defaults();
    // 1.25 × 0.5 and 1.5 × 0.5
    assert_eq!(rate::classify(-0.625, BodyMetric::Weight, &t), RateTier::Normal);
    assert_eq!(rate::classify(-0.626, BodyMetric::Weight, &t), RateTier::Caution);
    assert_eq!(rate::classify(-0.75, BodyMetric::Weight, &t), RateTier::Caution);
    assert_eq!(rate::classify(-0.751, BodyMetric::Weight, &t), RateTier::Extreme);
}

#[test]
fn test_weight_gain_is_worst_tier() {
    let t = defaults();
    for change in [0.01, 0.3, 2.0] {
        assert_eq!(rate::classify(change, BodyMetric::Weight, &t), RateTier::Extreme);
    }
}

#[test]
fn test_zero_and_non_finite_are_unclassified() {
    let t = defaults();
    for metric in BodyMetric::ALL {
        assert_eq!(rate::classify(0.0, metric, &t), RateTier::Unclassified);
        assert_eq!(rate::classify(f64::NAN, metric, &t), RateTier::Unclassified);
        assert_eq!(rate::classify(f64::NEG_INFINITY, metric, &t), RateTier::Unclassified);
    }
}

// ─── fat / muscle ────────────────────────────────────────────────────────────

#[test]
fn test_fat_tiers() {
    let t = defaults();
    assert_eq!(rate::classify(-0.1, BodyMetric::FatPercentage, &t), RateTier::Normal);
    assert_eq!(rate::classify(-0.17, BodyMetric::FatPercentage, &t), RateTier::Caution);
    assert_eq!(rate::classify(-0.2, BodyMetric::FatPercentage, &t), RateTier::Extreme);
    assert_eq!(rate::classify(0.05, BodyMetric::FatPercentage, &t), RateTier::Extreme);
}

#[test]
fn test_muscle_tiers() {
    let t = defaults();
    // Reference is the aggressive end of the gain band, 0.375 kg/week.
    assert_eq!(rate::classify(0.2, BodyMetric::MuscleMass, &t), RateTier::Normal);
    assert_eq!(rate::classify(0.5, BodyMetric::MuscleMass, &t), RateTier::Caution);
    assert_eq!(rate::classify(0.6, BodyMetric::MuscleMass, &t), RateTier::Extreme);
    assert_eq!(rate::classify(-0.1, BodyMetric::MuscleMass, &t), RateTier::Extreme);
}

// ─── thresholds ──────────────────────────────────────────────────────────────

#[test]
fn test_custom_multipliers_move_boundaries() {
    let t = Thresholds::new(1.0, 2.0).unwrap();
    assert_eq!(rate::classify(-0.55, BodyMetric::Weight, &t), RateTier::Caution);
    assert_eq!(rate::classify(-0.9, BodyMetric::Weight, &t), RateTier::Caution);
    assert_eq!(rate::classify(-1.1, BodyMetric::Weight, &t), RateTier::Extreme);
}

#[test]
fn test_misordered_multipliers_never_extreme() {
    let t = Thresholds::new(1.8, 1.2).unwrap();
    assert!(!t.is_ordered());
    assert_eq!(rate::classify(-0.8, BodyMetric::Weight, &t), RateTier::Normal);
    assert_eq!(rate::classify(-5.0, BodyMetric::Weight, &t), RateTier::Caution);
    // Wrong direction is still the worst tier.
    assert_eq!(rate::classify(1.0, BodyMetric::Weight, &t), RateTier::Extreme);
}

#[test]
fn test_describe_reports_thresholds() {
    let c = rate::describe(-0.7, BodyMetric::Weight, &defaults());
    assert_eq!(c.tier, RateTier::Caution);
    assert_eq!(c.reference, -0.5);
    assert!((c.caution_threshold - 0.625).abs() < 1e-12);
    assert!((c.extreme_threshold - 0.75).abs() < 1e-12);
    assert_eq!(c.unit, "kg/week");
}

#[test]
fn test_tier_parse_and_display() {
    for tier in [
        RateTier::Unclassified,
        RateTier::Normal,
        RateTier::Caution,
        RateTier::Extreme,
    ] {
        let parsed: RateTier = tier.to_string().parse().unwrap();
        assert_eq!(parsed, tier);
    }
    assert!("severe".parse::<RateTier>().is_err());
}
